use cheatsheet_types::{GENERAL_SUBSECTION, LayoutConfig, SubsectionMap};

/// Extra space below the section header text.
const SECTION_HEADER_EXTRA: f64 = 15.0;
/// Extra space around a subsection header's text.
const SUBSECTION_HEADER_EXTRA: f64 = 8.0;

/// Rough vertical footprint of one section, in abstract layout units.
///
/// This is an additive model used only to classify sections by size for
/// flow decisions; it does not predict rendered height. Sums are taken in
/// `f64` so sections land on the same side of the flow thresholds every time.
pub fn estimate_section_height(subsections: &SubsectionMap, config: &LayoutConfig) -> f64 {
    let mut height = f64::from(config.header_font_size) + SECTION_HEADER_EXTRA;

    for (name, entries) in subsections {
        if name != GENERAL_SUBSECTION {
            height += f64::from(config.font_size) + SUBSECTION_HEADER_EXTRA;
        }
        height += entries.len() as f64 * config.row_height;
        height += config.subsection_spacing;
    }

    height + config.section_spacing
}
