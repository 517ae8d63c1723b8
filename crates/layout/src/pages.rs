//! Fast global page-count approximation.
//!
//! This estimate is deliberately coarser than the per-section height model
//! used for flow decisions, and the two will disagree for the same document.

use cheatsheet_types::{Document, PageGeometry};

const TITLE_HEIGHT: f64 = 30.0;
const SECTION_HEADER_HEIGHT: f64 = 15.0;
const SUBSECTION_HEADER_HEIGHT: f64 = 12.0;

/// Total single-column content height of a document, in layout units.
pub fn estimate_content_height(document: &Document) -> f64 {
    let config = document.config();
    let sections = document.sections();

    let section_headers = sections.len() as f64 * SECTION_HEADER_HEIGHT;
    let subsection_count: usize = sections.values().map(|subsections| subsections.len()).sum();
    let subsection_headers = subsection_count as f64 * SUBSECTION_HEADER_HEIGHT;
    let entry_rows = document.entries().len() as f64 * config.row_height;
    let spacing = sections.len() as f64 * config.section_spacing;

    TITLE_HEIGHT + section_headers + subsection_headers + entry_rows + spacing
}

/// Estimates the number of pages without laying anything out. Always at least 1.
pub fn estimate_pages(document: &Document) -> usize {
    let config = document.config();
    let usable_height = PageGeometry::landscape_content_height(config.margin);
    if usable_height <= 0.0 {
        log::warn!("Margins leave no usable page height; estimating a single page");
        return 1;
    }

    let effective_height = estimate_content_height(document) / f64::from(config.columns.max(1));
    let pages = (effective_height / usable_height).ceil() as usize;
    pages.max(1)
}
