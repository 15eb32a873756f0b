//! # License Info Codec
//!
//! [`unmarshal_license_info`] is the only way to turn untrusted bytes into
//! a [`LicenseInfo`]. It runs, in order:
//!
//! 1. reject empty input;
//! 2. decode JSON, or YAML as a fallback;
//! 3. validate against the composed closed schema;
//! 4. typed deserialization, which resolves tri-state booleans;
//! 5. the version gate;
//! 6. [`LicenseInfo::check_and_set_defaults`].
//!
//! Every failure is `BadParameter`, except a built-in schema that fails
//! to compile, which is `Internal`.
//!
//! [`marshal_license_info`] performs no validation.

use std::sync::OnceLock;

use rsrc_core::{ResourceError, V3};
use rsrc_schema::{
    compose_envelope_schema, default_definitions, metadata_schema, parse_document,
    ResourceSchema, SchemaValidationError,
};

use crate::license::LicenseInfo;
use crate::spec::license_info_spec_schema;

const SCHEMA_NAME: &str = "license_info/v3";

/// Output encoding for [`marshal_license_info`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// JSON. The canonical form.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Options for [`marshal_license_info`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarshalOptions {
    /// Output encoding.
    pub format: Format,
    /// Indent JSON output. Ignored for YAML.
    pub pretty: bool,
}

impl MarshalOptions {
    /// Compact JSON.
    pub fn json() -> Self {
        Self::default()
    }

    /// YAML.
    pub fn yaml() -> Self {
        Self {
            format: Format::Yaml,
            pretty: false,
        }
    }
}

fn license_info_schema() -> Result<&'static ResourceSchema, ResourceError> {
    static SCHEMA: OnceLock<Result<ResourceSchema, String>> = OnceLock::new();
    SCHEMA
        .get_or_init(|| {
            let schema = compose_envelope_schema(
                &metadata_schema(),
                &license_info_spec_schema(),
                &default_definitions(),
            );
            ResourceSchema::compile(SCHEMA_NAME, &schema).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| ResourceError::Internal(e.clone()))
}

fn schema_error(err: SchemaValidationError) -> ResourceError {
    match err {
        SchemaValidationError::ValidationFailed { .. }
        | SchemaValidationError::DocumentLoadError { .. } => {
            ResourceError::bad_parameter(err.to_string())
        }
        SchemaValidationError::ValidatorBuildError { .. } => {
            ResourceError::Internal(err.to_string())
        }
    }
}

/// Parse and validate a `license_info` resource from JSON or YAML bytes.
///
/// # Errors
///
/// Returns `BadParameter` for empty input, undecodable input, schema
/// violations, unrecognized tri-state tokens, an unsupported version, or a
/// failed default check. Messages name the offending field, or the actual
/// and expected version.
pub fn unmarshal_license_info(bytes: &[u8]) -> Result<LicenseInfo, ResourceError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ResourceError::bad_parameter("missing resource data"));
    }

    let document = parse_document(bytes).map_err(schema_error)?;

    if let Err(err) = license_info_schema()?.validate(&document) {
        tracing::debug!(error = %err, "license info rejected by schema");
        return Err(schema_error(err));
    }

    let mut license: LicenseInfo = serde_json::from_value(document)
        .map_err(|e| ResourceError::bad_parameter(format!("invalid license info: {e}")))?;

    if license.version != V3 {
        return Err(ResourceError::bad_parameter(format!(
            "unsupported version {}, expected version {V3}",
            license.version
        )));
    }

    license
        .check_and_set_defaults()
        .map_err(|e| e.context("license info defaults"))?;

    tracing::debug!(name = %license.metadata.name, "unmarshaled license info");
    Ok(license)
}

/// Serialize a `license_info` resource.
///
/// JSON output keeps the declared field order, omits unset optional
/// fields, and writes tri-state booleans as booleans.
///
/// # Errors
///
/// Returns `Serialization` if the encoder fails.
pub fn marshal_license_info(
    license: &LicenseInfo,
    options: &MarshalOptions,
) -> Result<Vec<u8>, ResourceError> {
    let encoded = match (options.format, options.pretty) {
        (Format::Json, false) => serde_json::to_vec(license).map_err(|e| e.to_string()),
        (Format::Json, true) => serde_json::to_vec_pretty(license).map_err(|e| e.to_string()),
        (Format::Yaml, _) => serde_yaml::to_string(license)
            .map(String::into_bytes)
            .map_err(|e| e.to_string()),
    };
    encoded.map_err(ResourceError::Serialization)
}
