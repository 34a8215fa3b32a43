//! Terminal frontend.
//!
//! Seeds a field, then repeatedly advances it and prints each generation as
//! text.

#![warn(rust_2018_idioms)]

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};
use std::io::Write;
use std::thread;

use cellgrid_core::prelude::*;

mod cli;
mod config;
mod patterns;
mod render;

use cli::{Cli, RuleKind};
use config::{Config, DisplayConfig};
use render::{render_generation, Glyph};

fn main() {
    let cli = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(cli.log_level())
        .init()
        .unwrap();
    info!("Starting cellgrid v{} ...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    debug!("{:?}", config);
    let sim = &config.sim;

    match sim.rule {
        RuleKind::Life => {
            let game = Game::new(sim.size, false, sim.life_rule)?;
            let seeded = sim.pattern.seed(&game);
            info!(
                "Running {} on a {} field with {} live cells",
                sim.life_rule, sim.size, seeded,
            );
            run_game(&game, &config)
        }
        RuleKind::Matrix => {
            let rule = MatrixRain::default();
            let game = Game::new(sim.size, rule.initial_cell(), rule)?;
            info!("Running matrix rain on a {} field", sim.size);
            run_game(&game, &config)
        }
    }
}

fn run_game<T: CellType + Glyph>(game: &Game<T>, config: &Config) -> Result<()> {
    game.set_parallelism(config.sim.parallelism);
    print_generation(game, &config.display)?;
    for _ in 0..config.sim.generations {
        thread::sleep(config.display.frame_delay);
        game.advance();
        print_generation(game, &config.display)?;
    }
    info!("Finished after {} generations", game.generation_count());
    Ok(())
}

fn print_generation<T: CellType + Glyph>(game: &Game<T>, display: &DisplayConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(render_generation(&game.generation(), display).as_bytes())?;
    out.flush()?;
    Ok(())
}
