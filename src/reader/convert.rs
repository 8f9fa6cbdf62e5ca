//! Scalar conversion rules shared by every typed read.
//!
//! Each destination element type has one canonical parse rule. A quoted
//! token converts the same way an unquoted one does, so `port: "8080"` and
//! `port: 8080` both read as an integer.

use serde_yaml::Value;

/// Conversion from a scalar node to a destination element type.
///
/// Returns `None` when the node's kind or token does not match the
/// destination's parse rule; the reader turns that into a `TypeMismatch`
/// carrying the offending path.
pub trait FromScalar: Sized {
    /// Destination type name, used in error messages.
    const TYPE_NAME: &'static str;

    fn from_scalar(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_scalar_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FromScalar for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn from_scalar(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => {
                        if let Some(signed) = n.as_i64() {
                            Self::try_from(signed).ok()
                        } else if let Some(unsigned) = n.as_u64() {
                            Self::try_from(unsigned).ok()
                        } else {
                            None
                        }
                    }
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_from_scalar_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

macro_rules! impl_from_scalar_for_float {
    ($($ty:ty),* $(,)?) => {$(
        impl FromScalar for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn from_scalar(value: &Value) -> Option<Self> {
                match value {
                    Value::Number(n) => n.as_f64().map(|f| f as $ty),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_from_scalar_for_float!(f32, f64);

impl FromScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl FromScalar for String {
    const TYPE_NAME: &'static str = "string";

    fn from_scalar(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Integer-backed enumerations readable from configuration.
///
/// Decoding is deliberately permissive: the raw integer from the document is
/// handed to [`from_repr`](Self::from_repr) unchanged, with no validation
/// against the declared members. Implementors that want to survive
/// out-of-range values should carry a catch-all variant.
pub trait ConfigEnum: Sized {
    fn from_repr(repr: i64) -> Self;

    fn repr(&self) -> i64;
}

/// Structural kind of a node, for error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Short description of a node for error messages: the scalar token if it
/// has one, otherwise its structural kind.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Bool(b) => format!("'{b}'"),
        Value::Number(n) => format!("'{n}'"),
        Value::String(s) => format!("'{s}'"),
        other => kind_name(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_integer_from_number_token() {
        assert_eq!(u32::from_scalar(&scalar("8080")), Some(8080));
        assert_eq!(i32::from_scalar(&scalar("-5")), Some(-5));
    }

    #[test]
    fn test_integer_from_quoted_token() {
        assert_eq!(u16::from_scalar(&scalar("\"8080\"")), Some(8080));
    }

    #[test]
    fn test_integer_out_of_range() {
        assert_eq!(u8::from_scalar(&scalar("300")), None);
        assert_eq!(u32::from_scalar(&scalar("-1")), None);
    }

    #[test]
    fn test_integer_from_non_numeric_token() {
        assert_eq!(u32::from_scalar(&scalar("plenty")), None);
        assert_eq!(i64::from_scalar(&scalar("3.5")), None);
    }

    #[test]
    fn test_float_from_tokens() {
        assert_eq!(f64::from_scalar(&scalar("2.5")), Some(2.5));
        assert_eq!(f64::from_scalar(&scalar("3")), Some(3.0));
        assert_eq!(f32::from_scalar(&scalar("\"1.25\"")), Some(1.25));
        assert_eq!(f64::from_scalar(&scalar("wide")), None);
    }

    #[test]
    fn test_bool_from_tokens() {
        assert_eq!(bool::from_scalar(&scalar("true")), Some(true));
        assert_eq!(bool::from_scalar(&scalar("\"false\"")), Some(false));
        assert_eq!(bool::from_scalar(&scalar("yes")), None);
        assert_eq!(bool::from_scalar(&scalar("1")), None);
    }

    #[test]
    fn test_string_preserves_canonical_token() {
        assert_eq!(String::from_scalar(&scalar("hello")), Some("hello".into()));
        assert_eq!(String::from_scalar(&scalar("42")), Some("42".into()));
        assert_eq!(String::from_scalar(&scalar("true")), Some("true".into()));
    }

    #[test]
    fn test_non_scalar_nodes_never_convert() {
        let seq = scalar("[1, 2]");
        assert_eq!(u32::from_scalar(&seq), None);
        assert_eq!(String::from_scalar(&seq), None);
        let null = scalar("~");
        assert_eq!(String::from_scalar(&null), None);
        assert_eq!(f64::from_scalar(&null), None);
    }
}
