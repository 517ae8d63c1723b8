//! Structural checks on a sheet definition, reported as a list of
//! human-readable messages. An empty list means the definition is valid.

use crate::error::SheetError;
use crate::parser::read_source;
use crate::yaml::{label, scalar_text};
use cheatsheet_types::LayoutConfig;
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub fn validate_file(path: &Path) -> Vec<String> {
    match read_source(path) {
        Ok(source) => validate_str(&source),
        Err(SheetError::NotFound(path)) => vec![format!("File not found: {}", path.display())],
        Err(e) => vec![e.to_string()],
    }
}

pub fn validate_str(source: &str) -> Vec<String> {
    match serde_yaml::from_str::<Value>(source) {
        Ok(value) => validate_value(&value),
        Err(e) => vec![format!("Invalid YAML syntax: {}", e)],
    }
}

/// Checks the root, `config` and `sections` structure. Problems with the
/// root, `config` or `sections` node end the check; problems inside
/// individual sections are all collected.
pub fn validate_value(value: &Value) -> Vec<String> {
    let Some(root) = value.as_mapping() else {
        return vec!["Root element must be a dictionary".to_string()];
    };

    if let Some(config) = root.get("config") {
        if !config.is_mapping() && !config.is_null() {
            return vec!["'config' must be a dictionary".to_string()];
        }
        if let Err(e) = LayoutConfig::from_yaml(config) {
            return vec![e.to_string()];
        }
    }

    let Some(sections) = root.get("sections") else {
        return vec!["Missing 'sections' key".to_string()];
    };
    let Some(sections) = sections.as_mapping() else {
        return vec!["'sections' must be a dictionary".to_string()];
    };

    let mut errors = Vec::new();
    for (name, section) in sections {
        let Some(name) = scalar_text(name).filter(|n| !n.is_empty()) else {
            errors.push("Section '' has no name".to_string());
            continue;
        };
        match section.as_mapping() {
            Some(section) if section.is_empty() => {
                errors.push(format!("Section '{}' is empty", name));
            }
            Some(section) => check_section(&name, section, &mut errors),
            None => errors.push(format!("Section '{}' must be a dictionary", name)),
        }
    }
    errors
}

fn check_section(section: &str, entries: &Mapping, errors: &mut Vec<String>) {
    for (key, value) in entries {
        match value {
            Value::Mapping(items) if items.is_empty() => {
                errors.push(format!(
                    "Subsection '{}' in section '{}' is empty",
                    label(key),
                    section
                ));
            }
            Value::Mapping(items) => {
                for (item_key, description) in items {
                    check_entry(item_key, description, section, errors);
                }
            }
            description => check_entry(key, description, section, errors),
        }
    }
}

fn check_entry(key: &Value, description: &Value, section: &str, errors: &mut Vec<String>) {
    let key = label(key);
    if key.is_empty() || key == "~" {
        errors.push(format!("Entry in section '{}' has an empty key", section));
        return;
    }
    let has_description = scalar_text(description).is_some_and(|d| !d.is_empty());
    if !has_description {
        errors.push(format!(
            "Entry '{}' in section '{}' has no description",
            key, section
        ));
    }
}
