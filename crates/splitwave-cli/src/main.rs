use anyhow::{Context, Result};
use clap::Parser;
use splitwave_core::{Engine, EngineConfig};
use splitwave_tracing::{init_global_tracing, TracingConfig};

mod cli;
mod commands;
mod render;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tracing_config = TracingConfig::with_env_overrides(TracingConfig::for_cli(cli.verbose));
    init_global_tracing(&tracing_config).context("failed to initialise tracing")?;

    let config = EngineConfig { max_n: cli.max_n };
    let engine = Engine::with_config(&config).with_context(|| format!("cannot build engine for --max-n {}", cli.max_n))?;

    match cli.command {
        Commands::Classify { n, dimension, json } => commands::classify::run(&engine, n, dimension, json),
        Commands::Range {
            range,
            colors,
            transparent,
            opaque,
            primes,
            anchors,
            page,
            page_size,
            json,
        } => {
            let filter = commands::range::build_filter(colors, transparent, opaque, primes, anchors);
            commands::range::run(&engine, &range, &filter, page, page_size, json)
        }
        Commands::Summary { range, json } => commands::summary::run(&engine, &range, json),
        Commands::Bending => commands::bending::run(&engine),
    }
}
