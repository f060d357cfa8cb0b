mod report;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{DungeonGenerator, GeneratorConfig, ScreenSize};
use report::{DungeonReport, ascii_map};
use tracing_subscriber::EnvFilter;

/// Generate a dungeon and print it.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file holding a generator config; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the random stream; drawn from runtime entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Rooms besides START, BOSS, and MINI_GAME
    #[arg(short, long)]
    normal_rooms: Option<usize>,
    #[arg(long)]
    grid_cols: Option<usize>,
    #[arg(long)]
    grid_rows: Option<usize>,
    /// Room width in pixels
    #[arg(long)]
    width: Option<i32>,
    /// Room height in pixels
    #[arg(long)]
    height: Option<i32>,
    /// Leave normal rooms without walls, hazards, or enemies
    #[arg(long)]
    bare: bool,
    /// Print a JSON report instead of the text summary
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(normal_rooms) = self.normal_rooms {
            config.num_normal_rooms = normal_rooms;
        }
        if let Some(cols) = self.grid_cols {
            config.grid_cols = cols;
        }
        if let Some(rows) = self.grid_rows {
            config.grid_rows = rows;
        }
        let ScreenSize { width, height } = config.screen_size;
        config.screen_size = ScreenSize {
            width: self.width.unwrap_or(width),
            height: self.height.unwrap_or(height),
        };
        config
    }
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Failed to parse config TOML: {}", path.display()))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    let config = args.apply_overrides(base);

    let mut generator = DungeonGenerator::new(config);
    if args.bare {
        generator = generator.with_layouts(&[]);
    }
    let dungeon = generator.generate().context("Dungeon generation failed")?;

    if args.json {
        let report = DungeonReport::new(&dungeon);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{dungeon}");
        println!();
        println!("{}", ascii_map(&dungeon));
        println!("Fingerprint: 0x{:016x}", dungeon.fingerprint());
    }

    Ok(())
}
