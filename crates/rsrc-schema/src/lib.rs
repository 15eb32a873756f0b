//! # rsrc-schema: Resource Schema Composition & Validation
//!
//! Every resource document is checked against a closed JSON Schema before
//! any typed deserialization runs. The schema for a resource is assembled
//! from three fragments:
//!
//! - the shared metadata fragment ([`metadata_schema`]);
//! - the resource-specific spec fragment (owned by the resource crate);
//! - shared definitions ([`default_definitions`]).
//!
//! [`compose_envelope_schema`] takes all three explicitly and returns the
//! composed schema. There is no global registry: whoever needs a schema
//! composes it and compiles it with [`ResourceSchema::compile`].
//!
//! ## Document Loading
//!
//! [`parse_document`] accepts JSON, and falls back to YAML for documents
//! that are not valid JSON. YAML is converted to the equivalent JSON value
//! tree before validation.
//!
//! ## Crate Policy
//!
//! - No dependency on other `rsrc-*` crates.
//! - Schema validation is a trust boundary: invalid documents are rejected
//!   with structured errors including instance path, schema path, and message.

pub mod fragments;
pub mod validate;

pub use fragments::{compose_envelope_schema, default_definitions, metadata_schema};
pub use validate::{
    parse_document, ResourceSchema, SchemaValidationError, ValidationViolations, Violation,
};
