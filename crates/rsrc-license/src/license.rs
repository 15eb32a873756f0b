//! The `license_info` v3 envelope.

use std::collections::BTreeMap;
use std::fmt;

use rsrc_core::{Bool, Metadata, Resource, ResourceError, KIND_LICENSE_INFO, V3};
use serde::{Deserialize, Serialize};

use crate::spec::LicenseInfoSpec;

/// License information resource, version `v3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseInfo {
    /// Resource kind, always `license_info`.
    pub kind: String,

    /// Resource version.
    pub version: String,

    /// Metadata about the resource.
    pub metadata: Metadata,

    /// License settings.
    pub spec: LicenseInfoSpec,
}

impl LicenseInfo {
    /// Build a `license_info` v3 resource named `name` in the default
    /// namespace.
    ///
    /// The name is not checked here; [`LicenseInfo::check_and_set_defaults`]
    /// rejects an empty one.
    pub fn new(name: impl Into<String>, spec: LicenseInfoSpec) -> Result<Self, ResourceError> {
        Ok(Self {
            kind: KIND_LICENSE_INFO.to_string(),
            version: V3.to_string(),
            metadata: Metadata::new(name),
            spec,
        })
    }

    /// Apply metadata defaults and verify constraints. Idempotent.
    pub fn check_and_set_defaults(&mut self) -> Result<(), ResourceError> {
        self.metadata.check_and_set_defaults()
    }

    /// Metadata labels.
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.metadata.labels
    }

    /// Replace the metadata labels.
    pub fn set_labels(&mut self, labels: BTreeMap<String, String>) {
        self.metadata.labels = labels;
    }

    /// Customer account ID.
    pub fn account_id(&self) -> Option<&str> {
        self.spec.account_id.as_deref()
    }

    /// Set the customer account ID.
    pub fn set_account_id(&mut self, account_id: Option<String>) {
        self.spec.account_id = account_id;
    }

    /// Plan ID.
    pub fn plan_id(&self) -> Option<&str> {
        self.spec.plan_id.as_deref()
    }

    /// Set the plan ID.
    pub fn set_plan_id(&mut self, plan_id: Option<String>) {
        self.spec.plan_id = plan_id;
    }

    /// Whether the cluster reports usage to the control plane.
    pub fn reports_usage(&self) -> Bool {
        self.spec.reports_usage
    }

    pub fn set_reports_usage(&mut self, reports: Bool) {
        self.spec.reports_usage = reports;
    }

    /// AWS product ID that use is restricted to.
    pub fn aws_product_id(&self) -> Option<&str> {
        self.spec.aws_product_id.as_deref()
    }

    pub fn set_aws_product_id(&mut self, pid: Option<String>) {
        self.spec.aws_product_id = pid;
    }

    /// AWS account ID that use is restricted to.
    pub fn aws_account_id(&self) -> Option<&str> {
        self.spec.aws_account_id.as_deref()
    }

    pub fn set_aws_account_id(&mut self, account_id: Option<String>) {
        self.spec.aws_account_id = account_id;
    }

    /// Whether Kubernetes support is enabled.
    pub fn supports_kubernetes(&self) -> Bool {
        self.spec.supports_kubernetes
    }

    pub fn set_supports_kubernetes(&mut self, supports: Bool) {
        self.spec.supports_kubernetes = supports;
    }
}

impl Resource for LicenseInfo {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn check_and_set_defaults(&mut self) -> Result<(), ResourceError> {
        LicenseInfo::check_and_set_defaults(self)
    }
}

/// Comma-separated list of the settings that differ from the defaults,
/// in a fixed order. Empty when nothing is set.
impl fmt::Display for LicenseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut features = Vec::new();
        if let Some(expires) = self.metadata.expiry() {
            features.push(format!("expires at {expires}"));
        }
        if self.spec.reports_usage.value() {
            features.push("reports usage".to_string());
        }
        if self.spec.supports_kubernetes.value() {
            features.push("supports kubernetes".to_string());
        }
        if let Some(pid) = self.aws_product_id().filter(|p| !p.is_empty()) {
            features.push(format!("is limited to AWS product ID {pid:?}"));
        }
        if let Some(account) = self.aws_account_id().filter(|a| !a.is_empty()) {
            features.push(format!("is limited to AWS account ID {account:?}"));
        }
        f.write_str(&features.join(","))
    }
}
