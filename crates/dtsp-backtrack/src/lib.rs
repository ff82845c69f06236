#![deny(clippy::all)]

mod context;
mod search;
mod types;

use dtsp_core::{DiGraph, Result, Tour, Vertex};

pub use search::Backtracker;
pub use types::{Pruning, SearchOutcome, SearchStats};

/// Exhaustive search from `start`. `None` when no ordering closes back on
/// vertex 1.
pub fn tsp_backtracking(graph: &DiGraph, start: Vertex) -> Result<Option<Tour>> {
    Ok(Backtracker::new(graph).start(start).solve()?.tour())
}

/// Branch-and-bound search from `start`, pruning in every frame. Same answer
/// as [`tsp_backtracking`], fewer frames.
pub fn tsp_bounded(graph: &DiGraph, start: Vertex) -> Result<Option<Tour>> {
    Ok(Backtracker::new(graph)
        .start(start)
        .pruning(Some(Pruning::Recursive))
        .solve()?
        .tour())
}
