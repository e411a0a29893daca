// src/storage/mod.rs
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::utils::error::StorageError;

const PO_DIR_NAME: &str = "po";
const TEMPLATE_FILE_NAME: &str = "config.pot";

/// Places the generated template next to the config it came from:
/// `<config dir>/po/config.pot`.
pub struct StorageManager {
    po_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager for the config at `config_path`,
    /// creating the `po` directory beside the config if needed.
    pub fn new(config_path: &Path) -> Result<Self, StorageError> {
        let po_dir = match config_path.parent() {
            Some(parent) => parent.join(PO_DIR_NAME),
            // The config path has no parent (filesystem root); fall back to
            // a po directory under the working directory.
            None => PathBuf::from(PO_DIR_NAME),
        };

        // Create the directory if it doesn't exist
        if !po_dir.exists() {
            fs::create_dir_all(&po_dir)?;
        }

        Ok(Self { po_dir })
    }

    /// Creates the template file, truncating any previous run's output, and
    /// hands the open handle to the caller.
    pub fn create_template(&self) -> Result<File, StorageError> {
        let path = self.template_path();
        let file = File::create(&path)?;
        tracing::info!("Writing template to {}", path.display());
        Ok(file)
    }

    /// Full path of the template file this manager writes.
    pub fn template_path(&self) -> PathBuf {
        self.po_dir.join(TEMPLATE_FILE_NAME)
    }
}
