// src/config/mod.rs
pub mod loader;
pub mod models;

pub use loader::load_config;

// Re-export the document model for convenience
#[allow(unused_imports)]
pub use models::{ChoiceEntry, DesktopEntry, InstallerConfig, OptionEntry, WelcomePage};
