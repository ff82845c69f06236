#![deny(clippy::all)]

//! Nearest-neighbor tour construction.

use dtsp_core::{DiGraph, Result, Tour, Vertex, CLOSING_VERTEX};
use log::debug;
use serde::Serialize;

/// Result of a greedy walk. `closed` is false when the walk hit a dead end
/// before visiting every vertex, or finished without an arc back to vertex 1;
/// `tour.cost` then only covers the arcs actually taken.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeuristicTour {
    pub tour: Tour,
    pub closed: bool,
}

/// Walks from `start`, always taking the cheapest arc to a vertex not yet on
/// the path. Ties go to the arc inserted first. Once the path holds every
/// vertex, each arc from the current vertex back to vertex 1 is added to the
/// cost on that same scan.
pub fn nearest_neighbor(graph: &DiGraph, start: Vertex) -> Result<HeuristicTour> {
    graph.check_vertex(start)?;

    let n = graph.num_vertices();
    let mut on_path = vec![false; n + 1];
    let mut order = Vec::with_capacity(n);
    let mut cost = 0.0;
    let mut closing_arcs = 0usize;
    let mut current = Some(start);

    while let Some(u) = current.take() {
        on_path[u] = true;
        order.push(u);

        let full = order.len() == n;
        let mut best: Option<(Vertex, f64)> = None;
        let mut best_weight = f64::MAX;

        for arc in graph.outgoing_arcs(u) {
            if arc.weight < best_weight && !on_path[arc.to] {
                best_weight = arc.weight;
                best = Some((arc.to, arc.weight));
            }
            if full && arc.to == CLOSING_VERTEX {
                cost += arc.weight;
                closing_arcs += 1;
            }
        }

        if let Some((next, weight)) = best {
            cost += weight;
            current = Some(next);
        }
    }

    let closed = order.len() == n && closing_arcs > 0;
    if !closed {
        debug!(
            "greedy walk from {start} stopped after {} of {n} vertices",
            order.len()
        );
    }

    Ok(HeuristicTour {
        tour: Tour::new(cost, order),
        closed,
    })
}
