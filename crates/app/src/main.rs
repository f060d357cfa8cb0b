mod frame_input;
mod render;
mod window_config;

use std::env;
use std::process;

use anyhow::{Context, Result};
use app::app_loop::AppState;
use app::seed::resolve_seed_from_args;
use dungeon_core::GeneratorConfig;
use dungeon_core::mapgen::runtime_seed;
use frame_input::capture_frame_input;
use macroquad::prelude::{get_frame_time, next_frame};
use macroquad::window::Conf;
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(error) = run().await {
        tracing::error!("{error:#}");
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let seed = resolve_seed_from_args(&args, runtime_seed)?;
    tracing::info!("starting with {} seed {}", seed.label(), seed.value());

    let mut app = AppState::new(GeneratorConfig::default(), seed.value())
        .context("failed to generate the first dungeon")?;

    loop {
        let input = capture_frame_input();
        app.tick(&input, get_frame_time(), runtime_seed)?;

        render::draw_frame(&app);
        next_frame().await;
    }
}
