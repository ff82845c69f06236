use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 1-based vertex label.
pub type Vertex = usize;

/// Every tour closes on vertex 1, whatever vertex the search started from.
pub const CLOSING_VERTEX: Vertex = 1;

/// Largest vertex count [`DiGraph::new`] accepts. The exact searches are
/// factorial long before this; the cap keeps a bad header from exhausting
/// memory.
pub const MAX_VERTICES: usize = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub to: Vertex,
    pub weight: f64,
}

/// Directed multigraph over the vertices `1..=num_vertices`.
///
/// Outgoing arcs are kept per source vertex in insertion order. That order is
/// the iteration and tie-break order of every solver, so it must never be
/// re-sorted or deduplicated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct DiGraph {
    num_vertices: usize,
    // Slot 0 is reserved and stays empty so labels index directly.
    adjacency: Vec<Vec<Arc>>,
}

impl DiGraph {
    pub fn new(num_vertices: usize) -> Result<Self> {
        if num_vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        let too_many = Error::TooManyVertices {
            requested: num_vertices,
            limit: MAX_VERTICES,
        };
        if num_vertices > MAX_VERTICES {
            return Err(too_many);
        }

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(num_vertices + 1)
            .map_err(|_| too_many)?;
        adjacency.resize_with(num_vertices + 1, Vec::new);
        Ok(Self {
            num_vertices,
            adjacency,
        })
    }

    /// Appends `from -> to` after any arcs already leaving `from`. Parallel
    /// arcs are kept.
    pub fn add_arc(&mut self, from: Vertex, to: Vertex, weight: f64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight < 0.0 {
            warn!("negative weight {weight} on arc {from} -> {to}");
        }
        self.adjacency[from].push(Arc { to, weight });
        Ok(())
    }

    #[inline(always)]
    pub fn outgoing_arcs(&self, vertex: Vertex) -> &[Arc] {
        &self.adjacency[vertex]
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_arcs(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        (1..=self.num_vertices).contains(&vertex)
    }

    pub fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        1..=self.num_vertices
    }

    /// First arc `from -> to` in insertion order, which is not necessarily the
    /// cheapest of a parallel group.
    pub fn first_arc_to(&self, from: Vertex, to: Vertex) -> Option<&Arc> {
        self.outgoing_arcs(from).iter().find(|arc| arc.to == to)
    }

    /// Cheapest arc `from -> to`; the earliest one wins a tie.
    pub fn cheapest_arc(&self, from: Vertex, to: Vertex) -> Option<&Arc> {
        self.outgoing_arcs(from)
            .iter()
            .filter(|arc| arc.to == to)
            .fold(None, |best: Option<&Arc>, arc| match best {
                Some(b) if b.weight <= arc.weight => Some(b),
                _ => Some(arc),
            })
    }

    /// Prices a closed visiting order: cheapest arc per hop, then the first
    /// arc from the last vertex back to vertex 1. `None` if a hop is missing.
    pub fn tour_cost(&self, order: &[Vertex]) -> Option<f64> {
        let last = *order.last()?;
        let mut cost = 0.0;
        for hop in order.windows(2) {
            cost += self.cheapest_arc(hop[0], hop[1])?.weight;
        }
        Some(cost + self.first_arc_to(last, CLOSING_VERTEX)?.weight)
    }
}

/// Wire shape of [`DiGraph`]; deserialization replays it through
/// [`DiGraph::new`] and [`DiGraph::add_arc`].
#[derive(Deserialize)]
struct RawGraph {
    num_vertices: usize,
    adjacency: Vec<Vec<Arc>>,
}

impl TryFrom<RawGraph> for DiGraph {
    type Error = Error;

    fn try_from(raw: RawGraph) -> Result<Self> {
        let mut graph = DiGraph::new(raw.num_vertices)?;
        if raw.adjacency.len() != raw.num_vertices + 1 {
            return Err(Error::invalid_input(format!(
                "{} adjacency slots for {} vertices",
                raw.adjacency.len(),
                raw.num_vertices
            )));
        }
        if !raw.adjacency[0].is_empty() {
            return Err(Error::invalid_input("adjacency slot 0 must be empty"));
        }
        for (from, arcs) in raw.adjacency.into_iter().enumerate().skip(1) {
            for arc in arcs {
                graph.add_arc(from, arc.to, arc.weight)?;
            }
        }
        Ok(graph)
    }
}
