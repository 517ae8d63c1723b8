//! Decides how each section may flow across columns and pages, and assembles
//! the ordered content stream.

use crate::blocks::{ContentBlock, TableBlock};
use crate::height::estimate_section_height;
use cheatsheet_types::{Entry, GENERAL_SUBSECTION, LayoutConfig, PageGeometry, SectionMap, SubsectionMap};

/// Sections estimated below this height are kept together as one unit.
pub const SMALL_SECTION_LIMIT: f64 = 100.0;
/// Sections estimated above this height are split into per-subsection units.
pub const LARGE_SECTION_LIMIT: f64 = 200.0;

/// Space between the title and the first section.
const TITLE_GAP: f32 = 12.0;
/// Space between a section header and its first subsection.
const SECTION_HEADER_GAP: f32 = 3.0;

const KEY_COLUMN_SHARE: f32 = 0.35;
const DESCRIPTION_COLUMN_SHARE: f32 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPolicy {
    /// The whole section is one atomic block.
    Small,
    /// Headers and tables flow freely.
    Medium,
    /// Every subsection is its own atomic block; the first carries the section header.
    Large,
}

impl FlowPolicy {
    pub fn for_height(height: f64) -> Self {
        if height > LARGE_SECTION_LIMIT {
            FlowPolicy::Large
        } else if height < SMALL_SECTION_LIMIT {
            FlowPolicy::Small
        } else {
            FlowPolicy::Medium
        }
    }
}

pub struct FlowPlanner<'a> {
    config: &'a LayoutConfig,
    column_widths: [f32; 2],
}

impl<'a> FlowPlanner<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        let column_width = PageGeometry::landscape_a4(config).column_width();
        Self {
            config,
            column_widths: [
                column_width * KEY_COLUMN_SHARE,
                column_width * DESCRIPTION_COLUMN_SHARE,
            ],
        }
    }

    pub fn column_widths(&self) -> [f32; 2] {
        self.column_widths
    }

    /// Builds the full content stream: the title followed by every section.
    pub fn plan(&self, title: &str, sections: &SectionMap) -> Vec<ContentBlock> {
        let mut blocks = vec![
            ContentBlock::Title(title.to_string()),
            ContentBlock::Spacer(TITLE_GAP),
        ];
        for (name, subsections) in sections {
            self.plan_section(name, subsections, &mut blocks);
        }
        blocks
    }

    /// Appends the blocks of one section to `out` and returns the policy used.
    pub fn plan_section(
        &self,
        name: &str,
        subsections: &SubsectionMap,
        out: &mut Vec<ContentBlock>,
    ) -> FlowPolicy {
        let height = estimate_section_height(subsections, self.config);
        let policy = FlowPolicy::for_height(height);
        log::debug!(
            "Section '{}' estimated at {:.2} units, using {:?} flow",
            name,
            height,
            policy
        );

        match policy {
            FlowPolicy::Large => {
                for (index, (subsection, entries)) in subsections.iter().enumerate() {
                    let mut unit = if index == 0 {
                        self.section_heading(name)
                    } else {
                        Vec::new()
                    };
                    self.push_subsection(subsection, entries, &mut unit);
                    if !unit.is_empty() {
                        out.push(ContentBlock::Atomic(unit));
                    }
                }
            }
            FlowPolicy::Small => {
                let mut unit = self.section_heading(name);
                for (subsection, entries) in subsections {
                    self.push_subsection(subsection, entries, &mut unit);
                }
                out.push(ContentBlock::Atomic(unit));
            }
            FlowPolicy::Medium => {
                out.extend(self.section_heading(name));
                for (subsection, entries) in subsections {
                    self.push_subsection(subsection, entries, out);
                }
            }
        }

        out.push(ContentBlock::Spacer(self.config.section_spacing as f32));
        policy
    }

    fn section_heading(&self, name: &str) -> Vec<ContentBlock> {
        vec![
            ContentBlock::SectionHeader(name.to_uppercase()),
            ContentBlock::Spacer(SECTION_HEADER_GAP),
        ]
    }

    // Empty subsections produce nothing, not even their header.
    fn push_subsection(&self, name: &str, entries: &[Entry], out: &mut Vec<ContentBlock>) {
        if entries.is_empty() {
            return;
        }
        if name != GENERAL_SUBSECTION {
            out.push(ContentBlock::SubsectionHeader(name.to_string()));
        }
        out.push(ContentBlock::Table(self.table(entries)));
        out.push(ContentBlock::Spacer(self.config.subsection_spacing as f32));
    }

    fn table(&self, entries: &[Entry]) -> TableBlock {
        TableBlock {
            rows: entries
                .iter()
                .map(|e| (e.key().to_string(), e.description().to_string()))
                .collect(),
            column_widths: self.column_widths,
        }
    }
}
