use std::{fs, path::Path};

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{DiGraph, Vertex};

/// Reads a graph file from disk. See [`parse_graph`] for the format.
pub fn read_graph(path: impl AsRef<Path>) -> Result<DiGraph> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    debug!(
        "loaded {}: {} vertices, {} arcs",
        path.display(),
        graph.num_vertices(),
        graph.num_arcs()
    );
    Ok(graph)
}

/// Parses the matrix-market style graph description:
///
/// ```text
/// %%MatrixMarket matrix coordinate real general
/// % leading '%' lines are skipped
/// 4 4 8
/// 1 2 10.0
/// 2 3 10.0
/// ```
///
/// Only the first token of the header counts. Each later line is
/// `from to weight`; trailing tokens are ignored and blank lines skipped.
pub fn parse_graph(text: &str) -> Result<DiGraph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()));

    let (header_line, header) = lines
        .by_ref()
        .find(|(_, line)| !line.is_empty() && !line.starts_with('%'))
        .ok_or(Error::MissingHeader)?;

    let count = header.split_whitespace().next().unwrap_or_default();
    let num_vertices: usize = count
        .parse()
        .map_err(|e| Error::parse(header_line, format!("bad vertex count {count:?}: {e}")))?;
    let mut graph = DiGraph::new(num_vertices).map_err(|e| match e {
        Error::TooManyVertices { .. } => Error::parse(header_line, e.to_string()),
        other => other,
    })?;

    for (line_no, line) in lines {
        if line.is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let (Some(from), Some(to), Some(weight)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(Error::parse(line_no, format!("expected `from to weight`, got {line:?}")));
        };

        let from = parse_vertex(line_no, from)?;
        let to = parse_vertex(line_no, to)?;
        let weight: f64 = weight
            .parse()
            .map_err(|e| Error::parse(line_no, format!("bad weight {weight:?}: {e}")))?;

        graph.add_arc(from, to, weight).map_err(|e| match e {
            Error::VertexOutOfRange { .. } => Error::parse(line_no, e.to_string()),
            other => other,
        })?;
    }

    Ok(graph)
}

fn parse_vertex(line: usize, token: &str) -> Result<Vertex> {
    token
        .parse()
        .map_err(|e| Error::parse(line, format!("bad vertex {token:?}: {e}")))
}
