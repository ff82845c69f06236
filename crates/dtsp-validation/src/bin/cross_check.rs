//! Sweeps seeded random graphs and prints one JSON record per instance.
//! Exits with an error if any instance disagrees with the brute force.

use anyhow::{bail, Result};
use clap::Parser;
use log::{error, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use dtsp_validation::{cross_check, random_graph};

const DENSITIES: [f64; 4] = [0.3, 0.5, 0.8, 1.0];

/// Cross-checks every solver against the permutation brute force.
#[derive(Debug, Parser)]
#[command(name = "cross-check", version)]
struct Args {
    /// Number of random graphs to generate
    #[arg(long, default_value_t = 200)]
    instances: usize,

    /// Largest vertex count drawn per graph
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..=10))]
    max_vertices: u16,

    /// Seed for the instance generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);
    let mut failures = 0usize;

    for idx in 0..args.instances {
        let n = rng.gen_range(1..=usize::from(args.max_vertices));
        let density = DENSITIES[rng.gen_range(0..DENSITIES.len())];
        let instance_seed: u64 = rng.gen();

        let check = random_graph(n, density, instance_seed).and_then(|g| cross_check(&g))?;
        println!("{}", serde_json::to_string(&check)?);
        if !check.agrees() {
            error!("instance {idx} (seed {instance_seed}) disagrees");
            failures += 1;
        }
    }

    info!("{} instances, {failures} failures", args.instances);
    if failures > 0 {
        bail!("{failures} of {} instances disagree", args.instances);
    }
    Ok(())
}
