use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::handle_report_commands;
use services::config::{load_config_file, resolve};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = load_config_file(cli.config.as_deref())?;
    let settings = resolve(cli.root.clone(), cli.partitions.clone(), file)?;
    tracing::debug!(
        "root={} partitions={:?} bins={}",
        settings.root.display(),
        settings.partitions,
        settings.bins
    );
    handle_report_commands(&cli, &settings)
}
