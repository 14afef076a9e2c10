mod app;
mod cli;
mod commands;
mod desktop;
mod error;
mod exec;
mod icon;
mod models;
mod output;
mod version;
mod xdg;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let code = app::run(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
