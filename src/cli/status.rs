// src/cli/status.rs — Backend and session status display

use crate::core::context::ClientContext;
use crate::infra::config::Config;
use crate::infra::paths;

pub async fn show_status(ctx: &ClientContext, config: &Config, ephemeral: bool) -> anyhow::Result<()> {
    println!("wellmate v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let config_path = paths::config_file_path();
    if config_path.exists() {
        println!("  Config:   {} (loaded)", config_path.display());
    } else {
        println!("  Config:   (using defaults)");
    }

    if ephemeral {
        println!("  Store:    (in memory)");
    } else {
        println!("  Store:    {}", config.store_path().display());
    }

    match ctx.store.session()? {
        Some(s) if s.is_guest => println!("  Session:  {} (guest)", s.session_id),
        Some(s) => println!("  Session:  {}", s.session_id),
        None => println!("  Session:  none"),
    }
    let intake = if ctx.store.patient_info()?.is_some() {
        "saved"
    } else {
        "not filled"
    };
    println!("  Intake:   {intake}");

    println!("  Server:   {}", config.server.base_url);
    let health = ctx.backend.health().await?;
    println!("            {} ({})", health.status, health.message);
    Ok(())
}
