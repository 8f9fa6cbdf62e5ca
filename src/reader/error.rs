use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config document root is not a mapping")]
    NotAMapping,

    #[error("section not found: {0}")]
    SectionNotFound(String),

    #[error("field not found: {section}.{field}")]
    FieldNotFound { section: String, field: String },

    #[error("wrong shape for '{section}.{field}': expected {expected}, found {found}")]
    ShapeMismatch {
        section: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("cannot convert '{section}.{field}' to {expected}: found {found}")]
    TypeMismatch {
        section: String,
        field: String,
        expected: &'static str,
        found: String,
    },
}
