//! # Schema Validation
//!
//! Runtime validation of resource documents against a composed JSON
//! Schema (Draft 7).
//!
//! ## Security Invariant
//!
//! Schema validation is a trust boundary. Documents that fail validation
//! must be rejected with structured error information including the
//! instance path, the schema path, and a message naming expected vs
//! actual types.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

/// Error during document loading or schema validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The document could not be decoded as JSON or YAML.
    #[error("document load error for '{origin}': {reason}")]
    DocumentLoadError {
        /// Where the document came from (`<input>` for raw bytes).
        origin: String,
        /// Reason the document could not be decoded.
        reason: String,
    },

    /// The compiled validator could not be built (e.g., invalid schema).
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A compiled resource schema.
///
/// `ResourceSchema` is `Send + Sync`; compile once and share.
pub struct ResourceSchema {
    name: String,
    validator: Validator,
}

impl fmt::Debug for ResourceSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ResourceSchema {
    /// Compile `schema` under the identifier `name`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidatorBuildError` if `schema` is
    /// not a valid Draft 7 schema.
    pub fn compile(name: impl Into<String>, schema: &Value) -> Result<Self, SchemaValidationError> {
        let name = name.into();
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft7);
        let validator = opts
            .build(schema)
            .map_err(|e| SchemaValidationError::ValidatorBuildError {
                schema_name: name.clone(),
                reason: e.to_string(),
            })?;
        tracing::debug!(schema = %name, "compiled resource schema");
        Ok(Self { name, validator })
    }

    /// The identifier this schema was compiled under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` with every
    /// violation found, not just the first.
    pub fn validate(&self, instance: &Value) -> Result<(), SchemaValidationError> {
        let errors: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: self.name.clone(),
                violations: ValidationViolations { violations: errors },
            })
        }
    }
}

/// Decode raw bytes as JSON, falling back to YAML.
///
/// # Errors
///
/// Returns `SchemaValidationError::DocumentLoadError` if the bytes are
/// neither valid JSON nor valid YAML.
pub fn parse_document(bytes: &[u8]) -> Result<Value, SchemaValidationError> {
    const ORIGIN: &str = "<input>";
    let json_err = match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let yaml_value: serde_yaml::Value = serde_yaml::from_slice(bytes).map_err(|yaml_err| {
        SchemaValidationError::DocumentLoadError {
            origin: ORIGIN.to_string(),
            reason: format!("not valid JSON ({json_err}) or YAML ({yaml_err})"),
        }
    })?;

    yaml_to_json_value(&yaml_value).map_err(|reason| SchemaValidationError::DocumentLoadError {
        origin: ORIGIN.to_string(),
        reason: format!("YAML-to-JSON conversion failed: {reason}"),
    })
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Resource documents use only the JSON-compatible subset of YAML. Tags
/// are dropped; non-string map keys are stringified.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
