//! The unified error type for loading, laying out and rendering a sheet.

use cheatsheet_layout::LayoutError;
use cheatsheet_render_lopdf::RenderError;
use cheatsheet_types::ModelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid YAML syntax: {0}")]
    Syntax(#[from] serde_yaml::Error),
    #[error("{0}")]
    Invalid(String),
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
