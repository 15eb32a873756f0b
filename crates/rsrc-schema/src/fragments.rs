//! # Schema Fragments
//!
//! Shared pieces of the resource envelope schema, and the function that
//! composes them with a resource's spec fragment.
//!
//! All objects are closed (`additionalProperties: false`) so that unknown
//! fields are rejected at every level of the envelope.

use serde_json::{json, Value};

/// Pattern every label key must match.
pub const LABEL_KEY_PATTERN: &str = "^[a-zA-Z/.0-9_*-]+$";

/// Schema fragment for the shared `metadata` block.
pub fn metadata_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "default": {},
        "required": ["name"],
        "properties": {
            "name": { "type": "string" },
            "namespace": { "type": "string", "default": "default" },
            "description": { "type": "string" },
            "expires": { "type": "string" },
            "labels": {
                "type": "object",
                "additionalProperties": false,
                "patternProperties": {
                    LABEL_KEY_PATTERN: { "type": "string" }
                }
            }
        }
    })
}

/// Shared definitions available to every spec fragment. Empty today.
pub fn default_definitions() -> Value {
    json!({})
}

/// Compose the full envelope schema from its three fragments.
///
/// The result is a closed object requiring `kind`, `version`, `metadata`,
/// and `spec`, with `metadata` and `spec` validated by the given fragments
/// and `definitions` available for `#/definitions/...` references.
pub fn compose_envelope_schema(metadata: &Value, spec: &Value, definitions: &Value) -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["kind", "spec", "metadata", "version"],
        "properties": {
            "kind": { "type": "string" },
            "version": { "type": "string" },
            "metadata": metadata,
            "spec": spec
        },
        "definitions": definitions
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_schema_embeds_fragments() {
        let spec = json!({ "type": "object", "additionalProperties": false });
        let defs = json!({ "label": { "type": "string" } });
        let schema = compose_envelope_schema(&metadata_schema(), &spec, &defs);

        assert_eq!(schema["properties"]["spec"], spec);
        assert_eq!(schema["properties"]["metadata"], metadata_schema());
        assert_eq!(schema["definitions"], defs);
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_composed_schema_requires_envelope_fields() {
        let schema =
            compose_envelope_schema(&metadata_schema(), &json!({}), &default_definitions());
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        for field in ["kind", "version", "metadata", "spec"] {
            assert!(required.contains(&field), "missing {field}");
        }
    }

    #[test]
    fn test_metadata_schema_label_pattern() {
        let md = metadata_schema();
        assert!(md["properties"]["labels"]["patternProperties"]
            .get(LABEL_KEY_PATTERN)
            .is_some());
    }
}
