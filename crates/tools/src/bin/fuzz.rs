use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{
    DungeonGenerator, GenerationError, GeneratorConfig, check_invariants, mapgen::runtime_seed,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;

/// Sweep generator seeds and configurations, checking every dungeon's structure.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the sweep itself; each case draws its own dungeon seed from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    cases: u32,
    /// Largest number of normal rooms to try
    #[arg(long, default_value_t = 20)]
    max_normal_rooms: usize,
    /// Largest grid side to try
    #[arg(long, default_value_t = 8)]
    max_grid: usize,
    /// Use a fresh sweep seed instead of --seed
    #[arg(long)]
    random: bool,
}

fn pick(rng: &mut ChaCha8Rng, max_inclusive: usize) -> usize {
    (rng.next_u64() % (max_inclusive as u64 + 1)) as usize
}

#[derive(Default)]
struct Tally {
    generated: u32,
    rejected_config: u32,
    exhausted: u32,
    violations: u32,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let sweep_seed = if args.random { runtime_seed() } else { args.seed };
    println!("Fuzzing {} cases from sweep seed {sweep_seed}...", args.cases);

    let mut rng = ChaCha8Rng::seed_from_u64(sweep_seed);
    let mut tally = Tally::default();

    for case in 0..args.cases {
        let config = GeneratorConfig {
            seed: Some(rng.next_u64()),
            num_normal_rooms: pick(&mut rng, args.max_normal_rooms),
            grid_cols: 1 + pick(&mut rng, args.max_grid.saturating_sub(1)),
            grid_rows: 1 + pick(&mut rng, args.max_grid.saturating_sub(1)),
            ..GeneratorConfig::default()
        };

        match DungeonGenerator::new(config).generate() {
            Ok(dungeon) => {
                tally.generated += 1;
                if let Err(violation) = check_invariants(&dungeon) {
                    tally.violations += 1;
                    eprintln!("case {case}: {violation} ({config:?})");
                }
            }
            Err(GenerationError::TooManyRooms { .. }) => tally.rejected_config += 1,
            Err(GenerationError::Exhausted { .. }) => {
                tally.exhausted += 1;
                eprintln!("case {case}: exhausted ({config:?})");
            }
            Err(other) => {
                tally.violations += 1;
                eprintln!("case {case}: unexpected error {other} ({config:?})");
            }
        }
    }

    println!(
        "generated={} rejected_config={} exhausted={} violations={}",
        tally.generated, tally.rejected_config, tally.exhausted, tally.violations
    );
    if tally.violations > 0 {
        bail!("{} case(s) broke a dungeon invariant", tally.violations);
    }
    Ok(())
}
