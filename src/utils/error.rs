// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // File missing or unreadable

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yml::Error),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to write template entry: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Top-level error type. Every variant collapses to the same fixed
// diagnostic and exit code at the CLI surface; the taxonomy exists for
// internal propagation and debug logging.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config loading failed: {0}")]
    Config(#[from] ConfigError), // Automatically convert loader errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors
}
