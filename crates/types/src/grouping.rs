//! Groups a flat entry list into the section/subsection hierarchy.

use crate::entry::Entry;
use indexmap::IndexMap;

/// Entries of one section keyed by subsection, in first-seen order.
pub type SubsectionMap = IndexMap<String, Vec<Entry>>;

/// Sections keyed by name, in first-seen order.
pub type SectionMap = IndexMap<String, SubsectionMap>;

/// Groups entries by section and subsection.
///
/// Sections, and subsections within each section, appear in the order they
/// are first encountered. Entries without a subsection land in the
/// `"General"` bucket.
pub fn group(entries: &[Entry]) -> SectionMap {
    let mut sections = SectionMap::new();
    for entry in entries {
        sections
            .entry(entry.section().to_string())
            .or_default()
            .entry(entry.subsection_bucket().to_string())
            .or_default()
            .push(entry.clone());
    }
    sections
}
