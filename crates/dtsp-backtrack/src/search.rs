use dtsp_core::{DiGraph, Result, Vertex, CLOSING_VERTEX};
use log::debug;

use super::context::SearchContext;
use super::types::{Pruning, SearchOutcome};

/// Configures and runs one depth-first search over a graph.
///
/// Without pruning this is the exhaustive search: every ordering reachable
/// through the arcs is tried, each parallel arc separately. With pruning a
/// frame whose running cost already exceeds the best tour returns at once.
/// Pruning is off unless [`Backtracker::pruning`] turns it on.
#[derive(Clone, Copy, Debug)]
pub struct Backtracker<'a> {
    graph: &'a DiGraph,
    start: Vertex,
    upper_bound: f64,
    pruning: Option<Pruning>,
}

impl<'a> Backtracker<'a> {
    pub fn new(graph: &'a DiGraph) -> Self {
        Self {
            graph,
            start: CLOSING_VERTEX,
            upper_bound: f64::MAX,
            pruning: None,
        }
    }

    pub fn start(mut self, start: Vertex) -> Self {
        self.start = start;
        self
    }

    /// Only tours strictly cheaper than `bound` are recorded. When none is,
    /// the outcome's `best_cost` comes back as `bound`.
    pub fn upper_bound(mut self, bound: f64) -> Self {
        self.upper_bound = bound;
        self
    }

    pub fn pruning(mut self, pruning: Option<Pruning>) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn solve(&self) -> Result<SearchOutcome> {
        self.graph.check_vertex(self.start)?;

        let (prune_here, prune_below) = match self.pruning {
            None => (false, false),
            Some(Pruning::EntryOnly) => (true, false),
            Some(Pruning::Recursive) => (true, true),
        };

        let mut ctx = SearchContext::new(self.graph, self.upper_bound);
        ctx.path.push(self.start);
        explore(&mut ctx, self.start, 0.0, prune_here, prune_below);

        debug!(
            "search from {} ({:?}): best={} expanded={} completed={} pruned={}",
            self.start,
            self.pruning,
            ctx.best_cost,
            ctx.stats.nodes_expanded,
            ctx.stats.tours_completed,
            ctx.stats.pruned
        );

        Ok(SearchOutcome {
            best_cost: ctx.best_cost,
            best_order: ctx.best_path,
            stats: ctx.stats,
        })
    }
}

fn explore(
    ctx: &mut SearchContext,
    vertex: Vertex,
    current_cost: f64,
    prune_here: bool,
    prune_below: bool,
) {
    ctx.mark(vertex);

    if prune_here && current_cost > ctx.best_cost {
        ctx.stats.pruned += 1;
        return;
    }
    ctx.stats.nodes_expanded += 1;

    let graph = ctx.graph;

    // Base case: only the first closing arc counts, even if a parallel one is cheaper
    if ctx.all_visited() {
        if let Some(closing) = graph.first_arc_to(vertex, CLOSING_VERTEX) {
            ctx.stats.tours_completed += 1;
            let total = current_cost + closing.weight;
            if total < ctx.best_cost {
                ctx.record(total);
            }
        }
        return;
    }

    for arc in graph.outgoing_arcs(vertex) {
        if ctx.visited[arc.to] {
            continue;
        }

        ctx.path.push(arc.to);
        explore(
            ctx,
            arc.to,
            current_cost + arc.weight,
            prune_below,
            prune_below,
        );
        ctx.path.pop();
        ctx.unmark(arc.to);
    }
}
