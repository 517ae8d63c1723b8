//! PDF writer for paginated cheat sheets.
//!
//! Takes the pages produced by the layout crate's paginator and writes them
//! with `lopdf`. Latin text uses the PDF base-14 fonts and Japanese text the
//! HeiseiKakuGo-W5 CID font, so no font files are embedded.

mod content;
mod error;
mod renderer;

pub use content::{encode_text, font_resource_name, to_ucs2, to_win_ansi};
pub use error::RenderError;
pub use renderer::LopdfRenderer;
