#![deny(clippy::all)]

//! Ground truth for the solvers: a permutation brute force small enough to
//! trust by inspection, seeded random instances, and a per-instance record
//! comparing every solver against it.

use dtsp_backtrack::{Backtracker, Pruning};
use dtsp_core::{DiGraph, Error, Result, Tour, Vertex, CLOSING_VERTEX};
use dtsp_heuristic::nearest_neighbor;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

/// Tries every ordering of the vertices other than `start`, in lexicographic
/// order. Hops use their cheapest parallel arc, the closing hop uses the first
/// arc back to vertex 1, matching what the backtracking search can reach.
pub fn brute_force(graph: &DiGraph, start: Vertex) -> Result<Option<Tour>> {
    graph.check_vertex(start)?;

    let mut rest: Vec<Vertex> = graph.vertices().filter(|&v| v != start).collect();
    let mut order = Vec::with_capacity(graph.num_vertices());
    let mut best: Option<Tour> = None;

    loop {
        order.clear();
        order.push(start);
        order.extend_from_slice(&rest);

        if let Some(cost) = graph.tour_cost(&order) {
            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Tour::new(cost, order.clone()));
            }
        }

        if !next_permutation(&mut rest) {
            break;
        }
    }

    Ok(best)
}

fn next_permutation(items: &mut [Vertex]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };
    let successor = (pivot + 1..items.len())
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Random directed graph on `n` vertices. Each ordered pair (self-loops
/// included) gets an arc with probability `density`; weights are in
/// `[1, 100]` after rounding to one decimal. Same seed, same graph.
pub fn random_graph(n: usize, density: f64, seed: u64) -> Result<DiGraph> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::invalid_input(format!(
            "density {density} is outside [0, 1]"
        )));
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut graph = DiGraph::new(n)?;
    for from in 1..=n {
        for to in 1..=n {
            if rng.gen_bool(density) {
                let weight = (rng.gen_range(1.0..100.0_f64) * 10.0).round() / 10.0;
                graph.add_arc(from, to, weight)?;
            }
        }
    }
    Ok(graph)
}

/// Every solver's answer on one instance. Costs are `None` where no tour
/// was found.
#[derive(Clone, Debug, Serialize)]
pub struct CrossCheck {
    pub num_vertices: usize,
    pub num_arcs: usize,
    pub heuristic: Option<f64>,
    pub backtracking: Option<f64>,
    pub bounded_entry_only: Option<f64>,
    pub bounded_recursive: Option<f64>,
    pub brute_force: Option<f64>,
    pub backtracking_nodes: u64,
    pub bounded_nodes: u64,
    pub bounded_pruned: u64,
}

impl CrossCheck {
    /// The exact solvers agree with the oracle and the greedy walk, when it
    /// closes, is never cheaper than the optimum.
    pub fn agrees(&self) -> bool {
        let exact_agree = self.backtracking == self.brute_force
            && self.bounded_entry_only == self.brute_force
            && self.bounded_recursive == self.brute_force;
        let greedy_dominated = match (self.heuristic, self.brute_force) {
            (Some(h), Some(opt)) => opt <= h,
            (Some(_), None) => false,
            (None, _) => true,
        };
        exact_agree && greedy_dominated
    }
}

/// Runs every solver from vertex 1.
pub fn cross_check(graph: &DiGraph) -> Result<CrossCheck> {
    let start = CLOSING_VERTEX;

    let greedy = nearest_neighbor(graph, start)?;
    let plain = Backtracker::new(graph).start(start).solve()?;
    let entry_only = Backtracker::new(graph)
        .start(start)
        .pruning(Some(Pruning::EntryOnly))
        .solve()?;
    let recursive = Backtracker::new(graph)
        .start(start)
        .pruning(Some(Pruning::Recursive))
        .solve()?;
    let oracle = brute_force(graph, start)?;

    Ok(CrossCheck {
        num_vertices: graph.num_vertices(),
        num_arcs: graph.num_arcs(),
        heuristic: greedy.closed.then_some(greedy.tour.cost),
        backtracking: plain.tour().map(|t| t.cost),
        bounded_entry_only: entry_only.tour().map(|t| t.cost),
        bounded_recursive: recursive.tour().map(|t| t.cost),
        brute_force: oracle.map(|t| t.cost),
        backtracking_nodes: plain.stats.nodes_expanded,
        bounded_nodes: recursive.stats.nodes_expanded,
        bounded_pruned: recursive.stats.pruned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_permutation_walks_lexicographically() {
        let mut items = vec![2, 3, 4];
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![2, 3, 4],
                vec![2, 4, 3],
                vec![3, 2, 4],
                vec![3, 4, 2],
                vec![4, 2, 3],
                vec![4, 3, 2],
            ]
        );
    }

    #[test]
    fn next_permutation_on_short_slices() {
        assert!(!next_permutation(&mut []));
        assert!(!next_permutation(&mut [7]));
    }

    #[test]
    fn random_graph_is_reproducible() {
        let a = random_graph(5, 0.6, 42).unwrap();
        let b = random_graph(5, 0.6, 42).unwrap();
        for v in a.vertices() {
            assert_eq!(a.outgoing_arcs(v), b.outgoing_arcs(v));
        }
    }

    #[test]
    fn full_density_is_complete() {
        let g = random_graph(4, 1.0, 7).unwrap();
        assert_eq!(g.num_arcs(), 16);
        for v in g.vertices() {
            for arc in g.outgoing_arcs(v) {
                assert!((1.0..=100.0).contains(&arc.weight));
            }
        }
    }

    #[test]
    fn density_out_of_range_is_rejected() {
        assert!(matches!(
            random_graph(3, 1.5, 0),
            Err(Error::InvalidInput(_))
        ));
    }
}
