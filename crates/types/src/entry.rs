use crate::error::ModelError;

/// Bucket name for entries that were declared directly under a section.
pub const GENERAL_SUBSECTION: &str = "General";

/// A single key/description pair, filed under a section and optional subsection.
///
/// Entries are immutable once built; construction fails when the key,
/// description or section is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    key: String,
    description: String,
    section: String,
    subsection: String,
}

impl Entry {
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        section: impl Into<String>,
        subsection: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let entry = Self {
            key: key.into(),
            description: description.into(),
            section: section.into(),
            subsection: subsection.into(),
        };
        if entry.key.is_empty() || entry.description.is_empty() || entry.section.is_empty() {
            return Err(ModelError::MissingField);
        }
        Ok(entry)
    }

    /// Builds an entry that belongs to no named subsection.
    pub fn ungrouped(
        key: impl Into<String>,
        description: impl Into<String>,
        section: impl Into<String>,
    ) -> Result<Self, ModelError> {
        Self::new(key, description, section, "")
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    /// The subsection as declared; empty when the entry is ungrouped.
    pub fn subsection(&self) -> &str {
        &self.subsection
    }

    /// The bucket this entry is grouped under.
    pub fn subsection_bucket(&self) -> &str {
        if self.subsection.is_empty() {
            GENERAL_SUBSECTION
        } else {
            &self.subsection
        }
    }
}
