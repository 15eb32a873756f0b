//! # Resource Metadata
//!
//! The `metadata` block shared by every resource envelope: name,
//! namespace, optional description, labels, and expiry.
//!
//! Validation happens only in [`Metadata::check_and_set_defaults`].
//! Setters never validate.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::constants::DEFAULT_NAMESPACE;
use crate::error::ResourceError;
use crate::temporal::Timestamp;

/// Metadata common to all resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    /// Resource name. Required and non-empty once defaults are applied.
    pub name: String,

    /// Namespace. Defaults to [`DEFAULT_NAMESPACE`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Labels, kept sorted by key so serialization is deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// When the resource expires, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<Timestamp>,
}

impl Metadata {
    /// Metadata with `name` in the default namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            ..Self::default()
        }
    }

    /// The expiry instant, if set.
    pub fn expiry(&self) -> Option<Timestamp> {
        self.expires
    }

    /// Set or clear the expiry instant.
    pub fn set_expiry(&mut self, expires: Option<Timestamp>) {
        self.expires = expires;
    }

    /// Set the expiry to `ttl` after the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` if the expiry would fall after
    /// `9999-12-31T23:59:59Z`. The previous expiry is left untouched.
    pub fn set_ttl(&mut self, clock: &dyn Clock, ttl: Duration) -> Result<(), ResourceError> {
        let now = clock.now();
        let expires = now.checked_add(ttl).ok_or_else(|| {
            ResourceError::bad_parameter(format!(
                "ttl of {}s from {now} overflows the expiry range",
                ttl.as_secs()
            ))
        })?;
        self.expires = Some(expires);
        Ok(())
    }

    /// Apply defaults, then verify constraints.
    ///
    /// - empty `name` is rejected;
    /// - empty `namespace` becomes [`DEFAULT_NAMESPACE`];
    /// - every label key must match `^[a-zA-Z/.0-9_*-]+$`.
    ///
    /// Calling this twice yields the same state as calling it once.
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` naming the first violated constraint.
    pub fn check_and_set_defaults(&mut self) -> Result<(), ResourceError> {
        if self.name.is_empty() {
            return Err(ResourceError::bad_parameter("missing parameter name"));
        }
        if self.namespace.is_empty() {
            self.namespace = DEFAULT_NAMESPACE.to_string();
        }
        if let Some(key) = self.labels.keys().find(|k| !is_valid_label_key(k)) {
            return Err(ResourceError::bad_parameter(format!(
                "invalid label key: {key:?}"
            )));
        }
        Ok(())
    }
}

/// Whether `key` is a valid label key: non-empty, and made only of ASCII
/// letters, digits, and `/ . _ * -`.
pub fn is_valid_label_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '*' | '-'))
}
