//! Document model: the parsed YAML tree and name-based child lookup.
//!
//! The tree is built once at load time and never mutated afterwards. Lookup
//! returns an `Option` so every caller branches explicitly on absence.

use serde_yaml::Value;

use super::ReadError;

/// Parses a YAML document into its root node.
///
/// The root must be a mapping: a document whose top level is a bare scalar
/// or a sequence cannot hold named sections.
pub(crate) fn parse(text: &str) -> Result<Value, ReadError> {
    let root: Value = serde_yaml::from_str(text)?;
    if !root.is_mapping() {
        return Err(ReadError::NotAMapping);
    }
    Ok(root)
}

/// Returns the unique child of a mapping node keyed by `name`.
///
/// Returns `None` if `node` is not a mapping or has no such key. Mapping
/// keys are unique within a node (duplicates are rejected at parse time),
/// so at most one child can match.
pub(crate) fn lookup<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    node.as_mapping().and_then(|mapping| mapping.get(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_document() {
        let root = parse("server:\n  port: 8080\n").unwrap();
        assert!(root.is_mapping());
    }

    #[test]
    fn test_parse_malformed_document() {
        let result = parse("server:\n  port: [unclosed\n");
        assert!(matches!(result, Err(ReadError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_mapping_root() {
        let result = parse("- just\n- a\n- sequence\n");
        assert!(matches!(result, Err(ReadError::NotAMapping)));
    }

    #[test]
    fn test_lookup_present_key() {
        let root = parse("server:\n  port: 8080\n").unwrap();
        let server = lookup(&root, "server").unwrap();
        assert!(lookup(server, "port").is_some());
    }

    #[test]
    fn test_lookup_absent_key() {
        let root = parse("server:\n  port: 8080\n").unwrap();
        assert!(lookup(&root, "client").is_none());
    }

    #[test]
    fn test_lookup_on_non_mapping_node() {
        let root = parse("server:\n  port: 8080\n").unwrap();
        let server = lookup(&root, "server").unwrap();
        let port = lookup(server, "port").unwrap();
        assert!(lookup(port, "anything").is_none());
    }
}
