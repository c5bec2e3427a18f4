mod cli;
mod commands;
mod domain;
mod error;
mod services;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let (cli, ignored) = cli::parse();
    services::logging::init_logging(cli.verbose);
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "ignoring unknown arguments");
    }

    let home = services::config::home_dir();
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("cannot read current directory: {e}");
            home.clone().unwrap_or_else(|| PathBuf::from("/"))
        }
    };
    let config = services::config::load_config(home.as_deref());

    commands::handle_report(&cli, home.as_deref(), &cwd, &config)
}
