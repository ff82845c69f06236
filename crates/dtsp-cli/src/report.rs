use std::fmt;

use serde::Serialize;

use dtsp_core::Tour;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Heuristic,
    Backtrack,
    Bounded,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Heuristic => "heuristic",
            Algorithm::Backtrack => "backtrack",
            Algorithm::Bounded => "bounded",
        }
    }
}

/// One algorithm run as printed to stdout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub algorithm: Algorithm,
    /// Greedy walks always carry their (possibly partial) tour; exact searches
    /// carry `None` when nothing closes.
    pub tour: Option<Tour>,
    pub closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.elapsed_ms, &self.tour) {
            (None, Some(tour)) => write!(f, "{tour}"),
            (None, None) => write!(f, "no tour found"),
            (Some(ms), Some(tour)) => {
                write!(f, "{}: cost = {:.1}, {ms:.3}", self.algorithm.label(), tour.cost)
            }
            (Some(ms), None) => write!(f, "{}: no tour found, {ms:.3}", self.algorithm.label()),
        }
    }
}
