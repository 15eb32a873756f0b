//! The `spec` payload of a `license_info` resource and its schema fragment.

use rsrc_core::Bool;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// License settings carried in the `spec` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseInfoSpec {
    /// Customer account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Plan ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Whether the cluster reports usage to the control plane.
    #[serde(rename = "usage", default, skip_serializing_if = "Bool::is_false")]
    pub reports_usage: Bool,

    /// Restricts use to AWS instances with this product ID.
    #[serde(rename = "aws_pid", default, skip_serializing_if = "Option::is_none")]
    pub aws_product_id: Option<String>,

    /// Restricts use to AWS instances within this account.
    #[serde(rename = "aws_account", default, skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,

    /// Whether Kubernetes support is enabled. Always serialized.
    #[serde(rename = "k8s", default)]
    pub supports_kubernetes: Bool,
}

/// Closed schema fragment for [`LicenseInfoSpec`].
///
/// Tri-state fields accept a string or a boolean here; which strings are
/// acceptable is decided by [`Bool`] during deserialization.
pub fn license_info_spec_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "account_id": { "type": ["string"] },
            "plan_id": { "type": ["string"] },
            "usage": { "type": ["string", "boolean"] },
            "aws_pid": { "type": ["string"] },
            "aws_account": { "type": ["string"] },
            "k8s": { "type": ["string", "boolean"] }
        }
    })
}
