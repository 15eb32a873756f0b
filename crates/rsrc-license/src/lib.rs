//! # rsrc-license: License Information Resource
//!
//! The `license_info` resource describes what a cluster's license permits:
//! which customer account and plan it belongs to, whether the cluster
//! reports usage, whether Kubernetes support is enabled, and whether use is
//! restricted to a particular AWS product or account.
//!
//! ## Lifecycle
//!
//! ```text
//! LicenseInfo::new ──┐
//!                    ├──▶ check_and_set_defaults ──▶ validated
//! unmarshal ─────────┘        (unmarshal runs it itself)
//! ```
//!
//! Setters mutate fields without re-validating.
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "kind": "license_info",
//!   "version": "v3",
//!   "metadata": { "name": "Commercial", "expires": "2027-01-01T00:00:00Z" },
//!   "spec": { "account_id": "a", "plan_id": "p", "usage": true, "k8s": "yes",
//!             "aws_pid": "4", "aws_account": "123" }
//! }
//! ```

pub mod codec;
pub mod license;
pub mod spec;

pub use codec::{marshal_license_info, unmarshal_license_info, Format, MarshalOptions};
pub use license::LicenseInfo;
pub use rsrc_core::Resource;
pub use spec::{license_info_spec_schema, LicenseInfoSpec};
