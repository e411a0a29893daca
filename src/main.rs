// src/main.rs
mod config;
mod extractors;
mod pot;
mod storage;
mod utils;

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use config::load_config;
use extractors::StringExtractor;
use pot::PotWriter;
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the config string extractor
#[derive(Parser, Debug)]
#[command(name = "config_to_pot", about = "Create a .pot file for an os-installer config", long_about = None)]
struct Args {
    /// Path to the installer config file
    config_path: Option<PathBuf>,
}

fn main() {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    let Some(config_path) = args.config_path else {
        println!("{}", Args::command().render_usage());
        std::process::exit(1);
    };

    // 3. Run the whole load/extract/write sequence. All failures collapse
    //    into one fixed diagnostic; the cause is only visible at debug level.
    if let Err(err) = run(&config_path) {
        tracing::debug!("Run failed: {}", err);
        println!("Could not find or parse provided config");
        std::process::exit(1);
    }
}

fn run(config_path: &Path) -> Result<(), AppError> {
    tracing::info!("Extracting strings from {}", config_path.display());

    // Read and parse the whole document before touching the output tree.
    let config = load_config(config_path)?;

    let storage = StorageManager::new(config_path)?;
    let template = storage.create_template()?;

    let mut pot = PotWriter::new(BufWriter::new(template));
    pot.write_header()?;

    let extractor = StringExtractor::new();
    let summary = extractor.extract(&config, &mut pot)?;
    pot.flush()?;

    tracing::info!(
        "Wrote {} entries to {} ({} invalid entries reported)",
        summary.entries,
        storage.template_path().display(),
        summary.invalid
    );
    Ok(())
}
