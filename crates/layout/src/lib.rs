use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Page geometry leaves no room for content: frame width {0:.2}, frame height {1:.2}.")]
    InvalidGeometry(f32, f32),
}

pub mod blocks;
pub mod elements;
pub mod encoding;
pub mod flow;
pub mod height;
pub mod pages;
pub mod paginator;
pub mod style;
pub mod text;

pub use self::blocks::{ContentBlock, TableBlock};
pub use self::encoding::{is_win_ansi, win_ansi_byte};
pub use self::elements::{LayoutElement, PositionedElement, RectElement, RuleElement, TextElement};
pub use self::flow::{FlowPlanner, FlowPolicy, LARGE_SECTION_LIMIT, SMALL_SECTION_LIMIT};
pub use self::height::estimate_section_height;
pub use self::pages::{estimate_content_height, estimate_pages};
pub use self::paginator::{Page, Paginator};
pub use self::style::{SheetStyles, StandardFont, TextAlign, TextStyle};
pub use self::text::fit_text;
