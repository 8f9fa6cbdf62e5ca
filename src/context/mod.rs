//! Application context for sharing one configuration reader.

use crate::reader::ConfigReader;
use crate::Error;

/// Central application context holding the configuration reader.
///
/// Components that read their own parameters borrow the reader via
/// [`reader()`](Self::reader); since every read takes `&self`, any number
/// of components can initialize from the same parsed document.
///
/// ## Example
///
/// ```no_run
/// use config_yaml::{AppContext, ConfigReader};
///
/// let ctx = AppContext::builder()
///     .with_reader(ConfigReader::from_file("config.yaml")?)
///     .build()?;
///
/// let port: u16 = ctx.reader().read_scalar("server", "port")?;
/// # Ok::<(), config_yaml::Error>(())
/// ```
#[derive(Debug)]
pub struct AppContext {
    reader: ConfigReader,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder { reader: None }
    }

    /// Returns the shared configuration reader.
    pub fn reader(&self) -> &ConfigReader {
        &self.reader
    }
}

/// Builder for constructing an [`AppContext`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    reader: Option<ConfigReader>,
}

impl AppContextBuilder {
    /// Attaches the configuration reader the context will hand out.
    pub fn with_reader(mut self, reader: ConfigReader) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Builds the `AppContext`.
    ///
    /// Returns an error if no reader was provided.
    pub fn build(self) -> Result<AppContext, Error> {
        Ok(AppContext {
            reader: self.reader.ok_or(Error::MissingReader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_shares_reader() {
        let ctx = AppContext::builder()
            .with_reader(ConfigReader::from_str("app:\n  name: demo\n").unwrap())
            .build()
            .unwrap();

        let name: String = ctx.reader().read_scalar("app", "name").unwrap();
        assert_eq!(name, "demo");
    }

    #[test]
    fn test_context_requires_reader() {
        let result = AppContext::builder().build();
        assert!(matches!(result, Err(Error::MissingReader)));
    }
}
