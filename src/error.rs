use crate::reader::ReadError;
use thiserror::Error;

/// Top-level error type for the config-yaml library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Read(#[from] ReadError),

    #[error("application context requires a configuration reader")]
    MissingReader,
}
