use crate::error::SheetError;
use cheatsheet_layout::{ContentBlock, FlowPlanner, Page, Paginator, estimate_pages};
use cheatsheet_render_lopdf::LopdfRenderer;
use cheatsheet_types::Document;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Drives a document through flow planning, pagination and PDF rendering.
pub struct SheetGenerator {
    document: Document,
}

impl SheetGenerator {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The ordered content blocks for the whole sheet, title first.
    pub fn content(&self) -> Vec<ContentBlock> {
        let planner = FlowPlanner::new(self.document.config());
        planner.plan(self.document.title(), &self.document.sections())
    }

    pub fn paginate(&self) -> Result<Vec<Page>, SheetError> {
        let paginator = Paginator::new(self.document.config())?;
        Ok(paginator.paginate(&self.content()))
    }

    /// The heuristic page count. This does not run the paginator and may
    /// differ from the number of pages actually produced.
    pub fn estimate_pages(&self) -> usize {
        estimate_pages(&self.document)
    }

    /// Writes the PDF to `writer` and returns the number of pages written.
    pub fn render_to<W: Write>(&self, writer: &mut W) -> Result<usize, SheetError> {
        let paginator = Paginator::new(self.document.config())?;
        let pages = paginator.paginate(&self.content());
        let renderer = LopdfRenderer::new(self.document.title(), paginator.geometry());
        renderer.render(&pages, writer)?;
        Ok(pages.len())
    }

    /// Writes the PDF to a file at `path`, replacing any existing file.
    /// Nothing is written when layout or rendering fails.
    pub fn generate(&self, path: &Path) -> Result<usize, SheetError> {
        let mut buffer = Vec::new();
        let page_count = self.render_to(&mut buffer)?;
        fs::write(path, &buffer)?;
        log::info!(
            "Wrote '{}' ({} entries, {} pages) to {}",
            self.document.title(),
            self.document.entries().len(),
            page_count,
            path.display()
        );
        Ok(page_count)
    }
}
