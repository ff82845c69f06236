use dtsp_core::{DiGraph, Vertex};

use super::types::SearchStats;

/// Mutable state threaded through one search. Never shared between calls.
pub(crate) struct SearchContext<'a> {
    pub(crate) graph: &'a DiGraph,

    // Indexed by label; slot 0 unused
    pub(crate) visited: Vec<bool>,
    pub(crate) visited_count: usize,
    pub(crate) path: Vec<Vertex>,

    // Best tour found so far
    pub(crate) best_cost: f64,
    pub(crate) best_path: Vec<Vertex>,

    pub(crate) stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(graph: &'a DiGraph, upper_bound: f64) -> Self {
        let n = graph.num_vertices();
        SearchContext {
            graph,
            visited: vec![false; n + 1],
            visited_count: 0,
            path: Vec::with_capacity(n),
            best_cost: upper_bound,
            best_path: Vec::with_capacity(n),
            stats: SearchStats::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn all_visited(&self) -> bool {
        self.visited_count == self.graph.num_vertices()
    }

    #[inline(always)]
    pub(crate) fn mark(&mut self, vertex: Vertex) {
        if !self.visited[vertex] {
            self.visited[vertex] = true;
            self.visited_count += 1;
        }
    }

    #[inline(always)]
    pub(crate) fn unmark(&mut self, vertex: Vertex) {
        if self.visited[vertex] {
            self.visited[vertex] = false;
            self.visited_count -= 1;
        }
    }

    pub(crate) fn record(&mut self, cost: f64) {
        self.best_cost = cost;
        self.best_path.clear();
        self.best_path.extend_from_slice(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_twice_counts_once() {
        let g = DiGraph::new(3).unwrap();
        let mut ctx = SearchContext::new(&g, f64::MAX);
        ctx.mark(2);
        ctx.mark(2);
        assert_eq!(ctx.visited_count, 1);
        ctx.mark(1);
        ctx.mark(3);
        assert!(ctx.all_visited());
        ctx.unmark(3);
        ctx.unmark(3);
        assert_eq!(ctx.visited_count, 2);
        assert!(!ctx.all_visited());
    }

    #[test]
    fn record_copies_the_current_path() {
        let g = DiGraph::new(2).unwrap();
        let mut ctx = SearchContext::new(&g, f64::MAX);
        ctx.path.extend([1, 2]);
        ctx.record(5.0);
        ctx.path.pop();
        assert_eq!(ctx.best_path, vec![1, 2]);
        assert_eq!(ctx.best_cost, 5.0);
    }
}
