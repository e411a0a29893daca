// src/config/models.rs
use serde::Deserialize;

/// Top-level os-installer configuration document.
///
/// Every section is optional; an absent (or null) section is simply skipped
/// during extraction. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub struct InstallerConfig {
    pub welcome_page: Option<WelcomePage>,
    pub desktop: Option<Vec<DesktopEntry>>,
    pub additional_software: Option<Vec<ChoiceEntry>>,
    pub additional_features: Option<Vec<ChoiceEntry>>,
}

/// The `welcome_page` section; only its text is translatable.
#[derive(Debug, Deserialize)]
pub struct WelcomePage {
    pub text: Option<String>,
}

/// One desktop environment the installer offers. `name` is semantically
/// required; an entry without one is reported as invalid during extraction
/// but does not stop the run.
#[derive(Debug, Deserialize)]
pub struct DesktopEntry {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One selectable software or feature choice, shared by the
/// `additional_software` and `additional_features` sections.
#[derive(Debug, Deserialize)]
pub struct ChoiceEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<OptionEntry>>,
}

/// A sub-option of a choice. Only `name` is ever emitted; an entry counts as
/// invalid only when both `name` and `option` are absent.
// TODO: ask the schema owner whether bare `option:` entries still exist in
// shipped configs; nothing reads that key beyond the presence check.
#[derive(Debug, Deserialize)]
pub struct OptionEntry {
    pub name: Option<String>,
    pub option: Option<serde_yml::Value>,
}
