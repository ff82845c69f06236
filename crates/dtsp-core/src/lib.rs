#![deny(clippy::all)]

mod error;
mod graph;
mod parse;
mod tour;

pub use error::{Error, Result};
pub use graph::{Arc, DiGraph, Vertex, CLOSING_VERTEX, MAX_VERTICES};
pub use parse::{parse_graph, read_graph};
pub use tour::{format_order, Tour};
