use dtsp_core::{Tour, Vertex};
use serde::Serialize;

/// Where the bounded search compares the running cost against the best tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Pruning {
    /// Only the entry frame checks the bound; everything below it is plain
    /// backtracking.
    EntryOnly,
    /// Every frame checks the bound (branch-and-bound).
    Recursive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Frames that got past the bound check, including the start frame.
    pub nodes_expanded: u64,
    /// Complete permutations that had an arc back to vertex 1.
    pub tours_completed: u64,
    /// Frames abandoned by the bound check.
    pub pruned: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Still equal to the caller's upper bound when nothing beat it.
    pub best_cost: f64,
    /// Empty when no tour was found.
    pub best_order: Vec<Vertex>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.best_order.is_empty()
    }

    pub fn tour(&self) -> Option<Tour> {
        self.found()
            .then(|| Tour::new(self.best_cost, self.best_order.clone()))
    }
}
