use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use dtsp_core::{Vertex, CLOSING_VERTEX};

/// Solves the travelling salesman problem on a small directed graph.
#[derive(Debug, Parser)]
#[command(name = "dtsp", version)]
pub struct Args {
    /// Graph file: '%' comment lines, a vertex count, then `from to weight` lines
    pub file: PathBuf,

    /// HEURISTIC, BACKTRACK or TIME; any other word runs the bounded search
    pub commands: Vec<String>,

    /// Vertex every search starts from
    #[arg(long, default_value_t = CLOSING_VERTEX)]
    pub start: Vertex,

    /// Print one JSON object per result instead of text
    #[arg(long)]
    pub json: bool,

    /// Log verbosity on stderr; RUST_LOG overrides it
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["dtsp", "graph.mtx"]).unwrap();
        assert_eq!(args.file, PathBuf::from("graph.mtx"));
        assert!(args.commands.is_empty());
        assert_eq!(args.start, 1);
        assert!(!args.json);
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn commands_and_flags() {
        let args = Args::try_parse_from([
            "dtsp",
            "graph.mtx",
            "HEURISTIC",
            "TIME",
            "--json",
            "--start",
            "3",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.commands, vec!["HEURISTIC", "TIME"]);
        assert_eq!(args.start, 3);
        assert!(args.json);
        assert_eq!(args.log_level.to_filter(), LevelFilter::Debug);
    }

    #[test]
    fn file_is_required() {
        assert!(Args::try_parse_from(["dtsp"]).is_err());
    }
}
