// src/extractors/strings.rs

use std::io::Write;

use crate::config::models::{ChoiceEntry, DesktopEntry, InstallerConfig};
use crate::pot::PotWriter;
use crate::utils::error::ExtractError;

/// Counters for one extraction pass, logged once at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Template entries written.
    pub entries: usize,
    /// Entries reported as invalid (missing their required name).
    pub invalid: usize,
}

/// Walks a parsed installer config and emits every translatable string as a
/// template entry.
///
/// Sections are visited in a fixed order: welcome text, desktops,
/// additional software, additional features. Within a choice, sub-option
/// names follow immediately after the choice's own name and description.
/// Entries missing their semantically required `name` are reported on
/// stdout and skipped; this never affects control flow or the exit status.
pub struct StringExtractor;

impl StringExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts all translatable strings from `config` into `pot`.
    pub fn extract<W: Write>(
        &self,
        config: &InstallerConfig,
        pot: &mut PotWriter<W>,
    ) -> Result<ExtractionSummary, ExtractError> {
        let mut summary = ExtractionSummary::default();

        if let Some(welcome_page) = &config.welcome_page {
            if let Some(text) = &welcome_page.text {
                pot.write_entry(text)?;
                summary.entries += 1;
            }
        }

        if let Some(desktops) = &config.desktop {
            self.handle_desktops(desktops, pot, &mut summary)?;
        }

        if let Some(choices) = &config.additional_software {
            self.handle_choices(choices, pot, &mut summary)?;
        }

        if let Some(choices) = &config.additional_features {
            self.handle_choices(choices, pot, &mut summary)?;
        }

        tracing::debug!(
            "Extraction pass finished: {} entries, {} invalid",
            summary.entries,
            summary.invalid
        );
        Ok(summary)
    }

    fn handle_desktops<W: Write>(
        &self,
        desktops: &[DesktopEntry],
        pot: &mut PotWriter<W>,
        summary: &mut ExtractionSummary,
    ) -> Result<(), ExtractError> {
        for desktop in desktops {
            match &desktop.name {
                Some(name) => {
                    pot.write_entry(name)?;
                    summary.entries += 1;
                }
                None => {
                    println!("Invalid desktop: {:?}", desktop);
                    summary.invalid += 1;
                }
            }
            if let Some(description) = &desktop.description {
                pot.write_entry(description)?;
                summary.entries += 1;
            }
        }
        Ok(())
    }

    // Shared by the additional_software and additional_features sections;
    // both carry the same choice shape.
    fn handle_choices<W: Write>(
        &self,
        choices: &[ChoiceEntry],
        pot: &mut PotWriter<W>,
        summary: &mut ExtractionSummary,
    ) -> Result<(), ExtractError> {
        for choice in choices {
            match &choice.name {
                Some(name) => {
                    pot.write_entry(name)?;
                    summary.entries += 1;
                }
                None => {
                    println!("Invalid choice: {:?}", choice);
                    summary.invalid += 1;
                }
            }
            if let Some(description) = &choice.description {
                pot.write_entry(description)?;
                summary.entries += 1;
            }
            if let Some(options) = &choice.options {
                for option in options {
                    if let Some(name) = &option.name {
                        pot.write_entry(name)?;
                        summary.entries += 1;
                    } else if option.option.is_none() {
                        // Only flagged when the vestigial `option` key is
                        // absent as well; the key itself is never emitted.
                        println!("Invalid option: {:?}", option);
                        summary.invalid += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;

    fn extract(yaml: &str) -> (String, ExtractionSummary) {
        let config = parse_config(yaml).unwrap();
        let mut pot = PotWriter::new(Vec::new());
        let summary = StringExtractor::new().extract(&config, &mut pot).unwrap();
        (String::from_utf8(pot.into_inner()).unwrap(), summary)
    }

    fn entry(text: &str) -> String {
        format!("msgid \"{}\"\nmsgstr \"\"\n\n", text)
    }

    #[test]
    fn welcome_text_becomes_one_entry() {
        let (out, summary) = extract("welcome_page:\n  text: Welcome\n");
        assert_eq!(out, entry("Welcome"));
        assert_eq!(summary.entries, 1);
        assert_eq!(summary.invalid, 0);
    }

    #[test]
    fn welcome_page_without_text_emits_nothing() {
        let (out, summary) = extract("welcome_page:\n  logo: distro.svg\n");
        assert!(out.is_empty());
        assert_eq!(summary, ExtractionSummary::default());
    }

    #[test]
    fn desktop_name_precedes_its_description() {
        let (out, summary) = extract(
            "desktop:\n  - name: GNOME\n    description: A desktop\n",
        );
        assert_eq!(out, entry("GNOME") + &entry("A desktop"));
        assert_eq!(summary.entries, 2);
    }

    #[test]
    fn desktops_are_emitted_in_sequence_order() {
        let (out, _) = extract(
            "desktop:\n  - name: GNOME\n  - name: KDE Plasma\n  - name: Sway\n",
        );
        assert_eq!(out, entry("GNOME") + &entry("KDE Plasma") + &entry("Sway"));
    }

    #[test]
    fn nameless_desktop_still_yields_its_description() {
        let (out, summary) = extract("desktop:\n  - description: Orphaned\n");
        assert_eq!(out, entry("Orphaned"));
        assert_eq!(summary.entries, 1);
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn option_names_nest_under_their_parent_choice() {
        let yaml = r#"
additional_software:
  - name: Office
    description: Productivity tools
    options:
      - name: LibreOffice
      - name: OnlyOffice
  - name: Browsers
"#;
        let (out, summary) = extract(yaml);
        assert_eq!(
            out,
            entry("Office")
                + &entry("Productivity tools")
                + &entry("LibreOffice")
                + &entry("OnlyOffice")
                + &entry("Browsers")
        );
        assert_eq!(summary.entries, 5);
    }

    #[test]
    fn sections_are_visited_in_fixed_order() {
        let yaml = r#"
additional_features:
  - name: Feature
desktop:
  - name: GNOME
additional_software:
  - name: Software
welcome_page:
  text: Welcome
"#;
        let (out, _) = extract(yaml);
        assert_eq!(
            out,
            entry("Welcome") + &entry("GNOME") + &entry("Software") + &entry("Feature")
        );
    }

    #[test]
    fn nameless_choice_still_yields_description_and_options() {
        let yaml = r#"
additional_features:
  - description: Still described
    options:
      - name: Sub-option
"#;
        let (out, summary) = extract(yaml);
        assert_eq!(out, entry("Still described") + &entry("Sub-option"));
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn option_with_only_the_vestigial_key_is_not_flagged() {
        let yaml = r#"
additional_software:
  - name: Choice
    options:
      - option: legacy-value
"#;
        let (out, summary) = extract(yaml);
        assert_eq!(out, entry("Choice"));
        assert_eq!(summary.entries, 1);
        assert_eq!(summary.invalid, 0);
    }

    #[test]
    fn option_with_neither_key_is_flagged() {
        let yaml = r#"
additional_software:
  - name: Choice
    options:
      - package: some-pkg
"#;
        let (_, summary) = extract(yaml);
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn empty_sequences_emit_nothing() {
        let (out, summary) = extract("desktop: []\nadditional_software: []\n");
        assert!(out.is_empty());
        assert_eq!(summary, ExtractionSummary::default());
    }
}
