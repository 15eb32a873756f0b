//! Resource kinds, schema revisions, and defaults shared across crates.

/// Kind tag of the license information resource.
pub const KIND_LICENSE_INFO: &str = "license_info";

/// Schema revision `v3`.
pub const V3: &str = "v3";

/// Namespace applied to resources that do not name one.
pub const DEFAULT_NAMESPACE: &str = "default";
