//! Typed reading of YAML configuration documents.

mod accessor;
mod convert;
mod document;
mod error;

pub use accessor::ConfigReader;
pub use convert::{ConfigEnum, FromScalar};
pub use error::ReadError;
