//! Address Book - Main entry point
//!
//! Loads the persisted book, runs the console loop over stdin/stdout,
//! and flushes the book back to storage on every exit path.

use address_book::{repl, Config, FileStorage};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout belongs to the REPL)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let storage = match &config.storage_path {
        Some(path) => FileStorage::new(path),
        None => FileStorage::at_default_location()?,
    };
    info!("Using storage at {}", storage.path().display());

    let mut book = storage
        .load()
        .context("failed to read the stored address book")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let repl_result = repl::run(stdin.lock(), stdout.lock(), &mut book, config.page_size);

    // The book is flushed even when the loop bailed out with an error.
    if let Err(e) = storage.save(&book) {
        error!("Failed to save the address book: {}", e);
        println!("{}", e);
    }

    repl_result?;
    info!("Address book shutdown complete");
    Ok(())
}
