mod cli;
mod command;
mod logging;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::Args;
use command::Command;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.log_level)?;

    let graph = dtsp_core::read_graph(&args.file)
        .with_context(|| format!("failed to load graph from {}", args.file.display()))?;
    info!(
        "graph {}: {} vertices, {} arcs",
        args.file.display(),
        graph.num_vertices(),
        graph.num_arcs()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in &args.commands {
        let command = Command::parse(token);
        let reports = command
            .execute(&graph, args.start)
            .with_context(|| format!("command {token} failed"))?;
        for report in reports {
            if args.json {
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(out, "{report}")?;
            }
        }
    }

    Ok(())
}
