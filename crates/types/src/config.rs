use crate::error::ModelError;
use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Hotkey Cheat Sheet";

/// Layout options recognised in the `config` mapping of a sheet definition.
///
/// Every field falls back to its default when absent, and keys that are not
/// listed here are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Font size of entry rows.
    pub font_size: u32,
    /// Base font size of the title and section headers.
    pub header_font_size: u32,
    /// Number of equal-width columns on each page.
    pub columns: u32,
    /// Uniform page margin on all four sides.
    pub margin: f64,
    /// Height of a single entry row.
    pub row_height: f64,
    pub section_spacing: f64,
    pub subsection_spacing: f64,
    pub title: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 7,
            header_font_size: 12,
            columns: 5,
            margin: 20.0,
            row_height: 10.0,
            section_spacing: 8.0,
            subsection_spacing: 4.0,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Builds a config from the optional `config` mapping of a definition.
    ///
    /// A missing (null) mapping yields the defaults.
    pub fn from_yaml(value: &serde_yaml::Value) -> Result<Self, ModelError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_value(value.clone())
            .map_err(|e| ModelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.columns == 0 {
            return Err(ModelError::InvalidConfig("columns must be at least 1".into()));
        }
        if self.font_size == 0 || self.header_font_size == 0 {
            return Err(ModelError::InvalidConfig("font sizes must be positive".into()));
        }
        let lengths = [
            ("margin", self.margin),
            ("row_height", self.row_height),
            ("section_spacing", self.section_spacing),
            ("subsection_spacing", self.subsection_spacing),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
