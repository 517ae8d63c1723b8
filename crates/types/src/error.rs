use thiserror::Error;

/// Errors raised while constructing model values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Key, description, and section are required")]
    MissingField,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
