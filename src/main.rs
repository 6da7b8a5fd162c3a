mod bootstrap;
mod cli;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    bootstrap::init_tracing_subscriber(&config.log_level)?;

    cli::run(cli.command, &config)
}
