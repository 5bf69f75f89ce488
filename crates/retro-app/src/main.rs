//! Retro desktop headless driver.
//!
//! Applies a command script to a fresh desktop and prints the final
//! snapshot as JSON. With no script argument a built-in demo session runs:
//! open a few windows, drag and resize one, then play a few ticks of snake.
//! Set `RETRO_CONFIG` to a TOML file to override the defaults.

mod demo;

use anyhow::{Context, Result};

use retro_core::config::DesktopConfig;
use retro_core::wm::Catalog;
use retro_core::{Desktop, Script};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var("RETRO_CONFIG") {
        Ok(path) => DesktopConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        Err(_) => DesktopConfig::default(),
    };

    let script = match std::env::args().nth(1) {
        Some(path) => Script::load(&path).with_context(|| format!("loading script {path}"))?,
        None => demo::demo_script(),
    };
    log::info!("Running {} commands", script.len());

    let mut desktop = Desktop::new(config, Catalog::classic())?;
    for cmd in script.commands {
        desktop.push(cmd);
    }
    let applied = desktop.run_pending();

    let snapshot = desktop.snapshot();
    log::info!(
        "Applied {applied} commands; {} windows open, active {:?}",
        snapshot.windows.len(),
        snapshot.active,
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
