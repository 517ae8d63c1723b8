use crate::config::LayoutConfig;
use crate::entry::Entry;
use crate::grouping::{SectionMap, group};

/// A parsed cheat sheet: its title, entries in declaration order, and layout config.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    entries: Vec<Entry>,
    config: LayoutConfig,
}

impl Document {
    /// Creates a document. The document title always wins over `config.title`.
    pub fn new(title: impl Into<String>, entries: Vec<Entry>, mut config: LayoutConfig) -> Self {
        let title = title.into();
        config.title = title.clone();
        Self { title, entries, config }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Groups the entries by section and subsection. Computed on every call.
    pub fn sections(&self) -> SectionMap {
        group(&self.entries)
    }
}
