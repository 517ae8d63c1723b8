//! Turns a YAML sheet definition into a [`Document`].
//!
//! ```yaml
//! title: "Editor"
//! config:
//!   columns: 4
//! sections:
//!   Edit:
//!     Clipboard:          # a named subsection
//!       "Ctrl+C": "Copy"
//!     "Ctrl+Z": "Undo"    # a direct entry, filed under "General"
//! ```

use crate::error::SheetError;
use crate::yaml::scalar_text;
use cheatsheet_types::{DEFAULT_TITLE, Document, Entry, LayoutConfig};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn parse_file(path: &Path) -> Result<Document, SheetError> {
    let source = read_source(path)?;
    parse_str(&source)
}

pub fn parse_str(source: &str) -> Result<Document, SheetError> {
    let value: Value = serde_yaml::from_str(source)?;
    parse_value(&value)
}

/// Builds a document from an already-parsed YAML tree.
///
/// Sections that are not mappings are skipped; run the validator first to
/// report them.
pub fn parse_value(value: &Value) -> Result<Document, SheetError> {
    let root = value
        .as_mapping()
        .ok_or_else(|| SheetError::Invalid("YAML data must be a dictionary".to_string()))?;

    let title = root
        .get("title")
        .and_then(scalar_text)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let config = LayoutConfig::from_yaml(root.get("config").unwrap_or(&Value::Null))?;

    let mut entries = Vec::new();
    if let Some(Value::Mapping(sections)) = root.get("sections") {
        for (section_key, section_value) in sections {
            let Value::Mapping(section) = section_value else {
                log::debug!("Skipping non-mapping section {:?}", section_key);
                continue;
            };
            let section_name = scalar_text(section_key).unwrap_or_default();
            parse_section(&section_name, section, &mut entries)?;
        }
    }

    log::debug!("Parsed {} entries for sheet '{}'", entries.len(), title);
    Ok(Document::new(title, entries, config))
}

fn parse_section(name: &str, section: &Mapping, entries: &mut Vec<Entry>) -> Result<(), SheetError> {
    for (key, value) in section {
        let key_text = scalar_text(key).unwrap_or_default();
        match value {
            Value::Mapping(items) => {
                for (item_key, description) in items {
                    entries.push(Entry::new(
                        scalar_text(item_key).unwrap_or_default(),
                        scalar_text(description).unwrap_or_default(),
                        name,
                        key_text.as_str(),
                    )?);
                }
            }
            description => {
                entries.push(Entry::ungrouped(
                    key_text,
                    scalar_text(description).unwrap_or_default(),
                    name,
                )?);
            }
        }
    }
    Ok(())
}

pub(crate) fn read_source(path: &Path) -> Result<String, SheetError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SheetError::NotFound(path.to_path_buf()),
        _ => SheetError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_types::ModelError;

    #[test]
    fn test_parse_simple_sheet() {
        let doc = parse_str(
            r#"
title: "Test Cheat Sheet"
sections:
  Edit:
    "Ctrl+C": "Copy"
    "Ctrl+V": "Paste"
  File:
    "Ctrl+S": "Save"
"#,
        )
        .unwrap();

        assert_eq!(doc.title(), "Test Cheat Sheet");
        assert_eq!(doc.entries().len(), 3);
        let copy = &doc.entries()[0];
        assert_eq!((copy.key(), copy.description(), copy.section()), ("Ctrl+C", "Copy", "Edit"));
        assert_eq!(copy.subsection(), "");
    }

    #[test]
    fn test_parse_subsections_in_order() {
        let doc = parse_str(
            r#"
sections:
  Edit:
    Clipboard:
      "Ctrl+C": "Copy"
      "Ctrl+V": "Paste"
    "Ctrl+Z": "Undo"
"#,
        )
        .unwrap();

        let clipboard: Vec<&str> = doc
            .entries()
            .iter()
            .filter(|e| e.subsection() == "Clipboard")
            .map(Entry::key)
            .collect();
        assert_eq!(clipboard, vec!["Ctrl+C", "Ctrl+V"]);
        assert_eq!(doc.entries()[2].key(), "Ctrl+Z");
        assert_eq!(doc.entries()[2].subsection(), "");
        assert_eq!(doc.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_parse_config_and_title() {
        let doc = parse_str(
            r#"
title: "Custom Sheet"
config:
  font_size: 12
  columns: 2
  title: "Ignored"
sections:
  Test:
    "key": "description"
"#,
        )
        .unwrap();

        assert_eq!(doc.config().font_size, 12);
        assert_eq!(doc.config().columns, 2);
        assert_eq!(doc.config().title, "Custom Sheet");
    }

    #[test]
    fn test_numeric_keys_are_stringified() {
        let doc = parse_str("sections:\n  Tabs:\n    1: \"First tab\"\n").unwrap();
        assert_eq!(doc.entries()[0].key(), "1");
    }

    #[test]
    fn test_missing_description_is_a_model_error() {
        let err = parse_str("sections:\n  Edit:\n    \"Ctrl+C\":\n").unwrap_err();
        assert!(matches!(err, SheetError::Model(ModelError::MissingField)));
    }

    #[test]
    fn test_non_mapping_root() {
        let err = parse_value(&Value::String("invalid".into())).unwrap_err();
        assert_eq!(err.to_string(), "YAML data must be a dictionary");
    }

    #[test]
    fn test_non_mapping_sections_are_skipped() {
        let doc = parse_str("sections:\n  Bad: 3\n  Good:\n    k: v\n").unwrap();
        assert_eq!(doc.entries().len(), 1);
        assert_eq!(doc.entries()[0].section(), "Good");
    }
}
