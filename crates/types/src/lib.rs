pub mod color;
pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod geometry;
pub mod grouping;

pub use color::Color;
pub use config::{DEFAULT_TITLE, LayoutConfig};
pub use document::Document;
pub use entry::{Entry, GENERAL_SUBSECTION};
pub use error::ModelError;
pub use geometry::{COLUMN_GUTTER, PageGeometry, Rect, Size};
pub use grouping::{SectionMap, SubsectionMap, group};
