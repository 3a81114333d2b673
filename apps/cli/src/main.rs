mod cli;
mod commands;
mod config;
mod main_lib;
mod render;

use clap::Parser;

use cli::Cli;
use config::Config;
use main_lib::{build_context, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    config.apply_overrides(&cli.global)?;
    init_tracing(config.log_format);

    let mut ctx = build_context(config)?;
    commands::run(cli.command, &mut ctx).await
}
