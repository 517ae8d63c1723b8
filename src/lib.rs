//! Generates printable keyboard-shortcut cheat sheets from YAML definitions.
//!
//! ```no_run
//! use cheatsheet::{SheetGenerator, parser};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), cheatsheet::SheetError> {
//! let document = parser::parse_file(Path::new("vim.yaml"))?;
//! SheetGenerator::new(document).generate(Path::new("vim.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod parser;
pub mod validation;
mod yaml;

pub use error::SheetError;
pub use generator::SheetGenerator;

pub use cheatsheet_layout as layout;
pub use cheatsheet_render_lopdf as render;
pub use cheatsheet_types as types;
pub use cheatsheet_types::{Document, Entry, LayoutConfig};

use std::path::Path;

/// Validates and parses a definition file in one step.
pub fn load(path: &Path) -> Result<Document, SheetError> {
    let errors = validation::validate_file(path);
    if !errors.is_empty() {
        return Err(SheetError::Validation(errors));
    }
    parser::parse_file(path)
}
