pub mod context;
mod error;
pub mod matrix;
pub mod reader;

pub use context::AppContext;
pub use error::Error;
pub use matrix::Matrix;
pub use reader::{ConfigEnum, ConfigReader, FromScalar, ReadError};
