use bridgelearn::core::catalog::{Catalog, load_catalog};
use bridgelearn::core::config::{self, LoadedConfig, ResolvedConfig};
use bridgelearn::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bridgelearn", about = "Interactive learning dashboard")]
struct Args {
    /// Subject catalog (JSON). Defaults to the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Config file. Defaults to ~/.bridgelearn/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors fall back to defaults. Nothing is logged until the logger
    // is up, so loading and resolving hand back notes to replay.
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let (loaded, config_error) = match loaded {
        Ok(l) => (l, None),
        Err(e) => (LoadedConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&loaded.config, args.catalog.as_deref());

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("BridgeLearn starting up");
    if let Some(e) = config_error {
        log::warn!("Failed to load config, using defaults: {}", e);
    }
    for note in loaded.notes.iter().chain(&resolved.notes) {
        note.log();
    }

    let catalog = load_startup_catalog(&resolved);
    tui::run(catalog, resolved)
}

fn load_startup_catalog(config: &ResolvedConfig) -> Catalog {
    match &config.catalog_path {
        Some(path) => load_catalog(path).unwrap_or_else(|e| {
            log::warn!("{}; falling back to built-in catalog", e);
            Catalog::builtin()
        }),
        None => {
            log::info!("No catalog configured, using built-in catalog");
            Catalog::builtin()
        }
    }
}
