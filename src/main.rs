// src/main.rs — WellMate entry point

use clap::Parser;

use wellmate::cli::app::{self, Entry};
use wellmate::cli::{status, Cli};
use wellmate::infra::config::Config;
use wellmate::infra::{logger, paths};

#[tokio::main]
async fn main() {
    // Initialize logging (respects WELLMATE_LOG / RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = match cli.config {
        Some(ref path) => Config::load_from(std::path::Path::new(path))?.with_env_overrides()?,
        None => Config::load()?,
    };
    if !cli.ephemeral {
        paths::ensure_dirs()?;
    }

    let ctx = app::build_context(&config, cli.ephemeral)?;

    match app::entry(&ctx, cli.command)? {
        Entry::Route(start, opts) => app::run(&ctx, start, opts).await,
        Entry::Status => status::show_status(&ctx, &config, cli.ephemeral).await,
        Entry::Done => Ok(()),
    }
}
