//! chronosync library root.
//! Exposes the CLI parser, the high-level run() function, and the timetable
//! engine (resolver, grid layout, exporters) for programmatic use.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Build { .. } => cli::commands::build::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honouring --config
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
