use std::path::Path;

use serde_yaml::Value;

use crate::matrix::Matrix;

use super::convert::{describe, kind_name, ConfigEnum, FromScalar};
use super::document;
use super::ReadError;

/// Typed reader over a parsed YAML configuration document.
///
/// The document is parsed once at construction and is immutable afterwards.
/// Every value is addressed by a `(section, field)` pair: `section` names a
/// top-level mapping, `field` names an entry inside it. Each read resolves
/// the path, validates the node's shape against the destination type,
/// converts, and returns the value; on failure it returns a precise error
/// and nothing else. Reads are independent and idempotent, so a shared
/// `&ConfigReader` can serve any number of callers, including concurrently.
///
/// ## Example
///
/// ```
/// use config_yaml::ConfigReader;
///
/// let reader = ConfigReader::from_str(
///     "server:\n  port: 8080\n  weights: [0.5, 0.25, 0.25]\n",
/// )?;
///
/// let port: u16 = reader.read_scalar("server", "port")?;
/// let weights: Vec<f64> = reader.read_vector("server", "weights")?;
/// assert_eq!(port, 8080);
/// assert_eq!(weights.len(), 3);
/// # Ok::<(), config_yaml::ReadError>(())
/// ```
#[derive(Debug)]
pub struct ConfigReader {
    root: Option<Value>,
}

impl ConfigReader {
    /// Loads and parses a YAML config file.
    ///
    /// A missing file fails with [`ReadError::FileNotFound`] and any other
    /// I/O failure with [`ReadError::Io`]; parse errors are only reported
    /// once the text has actually been obtained.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReadError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ReadError::FileNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(ReadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        Self::from_str(&text)
    }

    /// Parses a YAML document held in memory.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, ReadError> {
        Ok(Self {
            root: Some(document::parse(text)?),
        })
    }

    /// A reader with no document.
    ///
    /// Every read against it fails with [`ReadError::SectionNotFound`]
    /// rather than touching uninitialized state.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Resolves `section` against the root mapping, then `field` against
    /// the section node. The single addressing primitive behind every read.
    fn node(&self, section: &str, field: &str) -> Result<&Value, ReadError> {
        let section_node = self
            .root
            .as_ref()
            .and_then(|root| document::lookup(root, section))
            .ok_or_else(|| ReadError::SectionNotFound(section.to_string()))?;

        document::lookup(section_node, field).ok_or_else(|| ReadError::FieldNotFound {
            section: section.to_string(),
            field: field.to_string(),
        })
    }

    /// Reads a single scalar value.
    ///
    /// The destination type picks the parse rule: integer, float, boolean,
    /// or string. Fails with [`ReadError::TypeMismatch`] if the node is not
    /// a scalar or its token does not parse.
    pub fn read_scalar<T: FromScalar>(&self, section: &str, field: &str) -> Result<T, ReadError> {
        let node = self.node(section, field)?;
        convert_element(node, section, field)
    }

    /// Reads a sequence into a `Vec` sized exactly to the node's length.
    ///
    /// Element conversion is fail-fast: the first token that does not parse
    /// as `T` fails the whole read and nothing is returned.
    pub fn read_vector<T: FromScalar>(
        &self,
        section: &str,
        field: &str,
    ) -> Result<Vec<T>, ReadError> {
        let seq = self.sequence(section, field)?;
        seq.iter()
            .map(|element| convert_element(element, section, field))
            .collect()
    }

    /// Reads a sequence of exactly `N` elements into a fixed-size array.
    ///
    /// The usual destination for small numeric vectors (2-D points and the
    /// like). A sequence of any other length fails with
    /// [`ReadError::ShapeMismatch`]; [`read_vector`](Self::read_vector) is
    /// the variant for lengths discovered from the document.
    pub fn read_array<T: FromScalar, const N: usize>(
        &self,
        section: &str,
        field: &str,
    ) -> Result<[T; N], ReadError> {
        let seq = self.sequence(section, field)?;
        if seq.len() != N {
            return Err(ReadError::ShapeMismatch {
                section: section.to_string(),
                field: field.to_string(),
                expected: format!("a sequence of length {N}"),
                found: format!("length {}", seq.len()),
            });
        }

        let elements = seq
            .iter()
            .map(|element| convert_element(element, section, field))
            .collect::<Result<Vec<T>, _>>()?;

        // Length was checked above, so the conversion cannot fail.
        Ok(elements
            .try_into()
            .unwrap_or_else(|_| unreachable!("sequence length equals N")))
    }

    /// Reads a matrix encoded as a nested mapping with `rows`, `cols`, and
    /// a flat row-major `data` sequence.
    ///
    /// The element count is validated against `rows * cols` before any
    /// conversion; a mismatched `data` fails with
    /// [`ReadError::ShapeMismatch`] and produces nothing.
    pub fn read_matrix<T: FromScalar>(
        &self,
        section: &str,
        field: &str,
    ) -> Result<Matrix<T>, ReadError> {
        let node = self.node(section, field)?;

        let rows_field = format!("{field}.rows");
        let cols_field = format!("{field}.cols");
        let data_field = format!("{field}.data");

        let rows_node = matrix_child(node, section, &rows_field, "rows")?;
        let cols_node = matrix_child(node, section, &cols_field, "cols")?;
        let data_node = matrix_child(node, section, &data_field, "data")?;

        let rows: usize = convert_element(rows_node, section, &rows_field)?;
        let cols: usize = convert_element(cols_node, section, &cols_field)?;

        let seq = data_node.as_sequence().ok_or_else(|| ReadError::ShapeMismatch {
            section: section.to_string(),
            field: data_field.clone(),
            expected: "a sequence".to_string(),
            found: kind_name(data_node).to_string(),
        })?;

        // checked_mul: declared dimensions come straight from the document,
        // so their product can exceed usize::MAX.
        let expected = rows.checked_mul(cols).ok_or_else(|| ReadError::ShapeMismatch {
            section: section.to_string(),
            field: data_field.clone(),
            expected: format!("a shape no larger than {} elements", usize::MAX),
            found: format!("{rows}x{cols}"),
        })?;

        if seq.len() != expected {
            return Err(ReadError::ShapeMismatch {
                section: section.to_string(),
                field: data_field,
                expected: format!("{rows}x{cols} = {expected} elements"),
                found: format!("{} elements", seq.len()),
            });
        }

        let data = seq
            .iter()
            .map(|element| convert_element(element, section, &data_field))
            .collect::<Result<Vec<T>, _>>()?;

        Matrix::from_row_major(rows, cols, data).map_err(|e| ReadError::ShapeMismatch {
            section: section.to_string(),
            field: data_field,
            expected: format!("{expected} elements"),
            found: format!("{} elements", e.len),
        })
    }

    /// Reads an integer-backed enumeration.
    ///
    /// The node is read as a plain integer and handed to
    /// [`ConfigEnum::from_repr`] unchanged; no validation against the
    /// enumeration's declared members takes place. Fails with
    /// [`ReadError::TypeMismatch`] only when the token is not an integer.
    pub fn read_enum<T: ConfigEnum>(&self, section: &str, field: &str) -> Result<T, ReadError> {
        let raw: i64 = self.read_scalar(section, field)?;
        Ok(T::from_repr(raw))
    }

    /// Resolves a field that must be a sequence.
    fn sequence(&self, section: &str, field: &str) -> Result<&[Value], ReadError> {
        let node = self.node(section, field)?;
        node.as_sequence()
            .map(Vec::as_slice)
            .ok_or_else(|| ReadError::ShapeMismatch {
                section: section.to_string(),
                field: field.to_string(),
                expected: "a sequence".to_string(),
                found: kind_name(node).to_string(),
            })
    }
}

fn convert_element<T: FromScalar>(
    node: &Value,
    section: &str,
    field: &str,
) -> Result<T, ReadError> {
    T::from_scalar(node).ok_or_else(|| ReadError::TypeMismatch {
        section: section.to_string(),
        field: field.to_string(),
        expected: T::TYPE_NAME,
        found: describe(node),
    })
}

fn matrix_child<'a>(
    node: &'a Value,
    section: &str,
    qualified: &str,
    name: &str,
) -> Result<&'a Value, ReadError> {
    document::lookup(node, name).ok_or_else(|| ReadError::FieldNotFound {
        section: section.to_string(),
        field: qualified.to_string(),
    })
}
