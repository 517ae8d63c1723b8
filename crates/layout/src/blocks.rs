//! Abstract content blocks produced by the flow planner.

/// A two-column table of key/description rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub rows: Vec<(String, String)>,
    /// Widths of the key and description columns.
    pub column_widths: [f32; 2],
}

impl TableBlock {
    pub fn width(&self) -> f32 {
        self.column_widths[0] + self.column_widths[1]
    }
}

/// One unit of the ordered content stream handed to the paginator.
///
/// Everything except [`ContentBlock::Atomic`] may land on a column or page
/// boundary independently; an atomic block keeps its children together.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Title(String),
    SectionHeader(String),
    SubsectionHeader(String),
    Table(TableBlock),
    Spacer(f32),
    Atomic(Vec<ContentBlock>),
}

impl ContentBlock {
    pub fn is_atomic(&self) -> bool {
        matches!(self, ContentBlock::Atomic(_))
    }

    /// Number of table rows in this block, including nested blocks.
    pub fn row_count(&self) -> usize {
        match self {
            ContentBlock::Table(table) => table.rows.len(),
            ContentBlock::Atomic(children) => children.iter().map(ContentBlock::row_count).sum(),
            _ => 0,
        }
    }
}
