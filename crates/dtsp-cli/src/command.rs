use std::time::Instant;

use anyhow::Result;
use log::{info, warn};

use dtsp_backtrack::{tsp_backtracking, tsp_bounded};
use dtsp_core::{DiGraph, Tour, Vertex};
use dtsp_heuristic::nearest_neighbor;

use crate::report::{Algorithm, Report};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Heuristic,
    Backtrack,
    Time,
    /// Any unrecognised word; the word is kept for logging only.
    Bounded(String),
}

impl Command {
    pub fn parse(token: &str) -> Self {
        match token {
            "HEURISTIC" => Command::Heuristic,
            "BACKTRACK" => Command::Backtrack,
            "TIME" => Command::Time,
            other => Command::Bounded(other.to_string()),
        }
    }

    pub fn execute(&self, graph: &DiGraph, start: Vertex) -> Result<Vec<Report>> {
        let reports = match self {
            Command::Heuristic => vec![run(graph, Algorithm::Heuristic, start)?],
            Command::Backtrack => vec![run(graph, Algorithm::Backtrack, start)?],
            Command::Bounded(word) => {
                info!("{word:?} runs the bounded search");
                vec![run(graph, Algorithm::Bounded, start)?]
            }
            Command::Time => [Algorithm::Heuristic, Algorithm::Backtrack, Algorithm::Bounded]
                .into_iter()
                .map(|algorithm| timed(graph, algorithm, start))
                .collect::<Result<Vec<_>>>()?,
        };
        Ok(reports)
    }
}

fn run(graph: &DiGraph, algorithm: Algorithm, start: Vertex) -> Result<Report> {
    let (tour, closed) = match algorithm {
        Algorithm::Heuristic => {
            let greedy = nearest_neighbor(graph, start)?;
            if !greedy.closed {
                warn!(
                    "greedy walk did not close a tour; cost covers {} vertices",
                    greedy.tour.len()
                );
            }
            (Some(greedy.tour), greedy.closed)
        }
        Algorithm::Backtrack => with_found(tsp_backtracking(graph, start)?),
        Algorithm::Bounded => with_found(tsp_bounded(graph, start)?),
    };

    Ok(Report {
        algorithm,
        tour,
        closed,
        elapsed_ms: None,
    })
}

fn with_found(tour: Option<Tour>) -> (Option<Tour>, bool) {
    let found = tour.is_some();
    (tour, found)
}

fn timed(graph: &DiGraph, algorithm: Algorithm, start: Vertex) -> Result<Report> {
    let now = Instant::now();
    let mut report = run(graph, algorithm, start)?;
    report.elapsed_ms = Some(now.elapsed().as_secs_f64() * 1000.0);
    Ok(report)
}
