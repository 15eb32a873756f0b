//! The contract a resource registry relies on.

use std::time::Duration;

use crate::clock::Clock;
use crate::error::ResourceError;
use crate::metadata::Metadata;
use crate::temporal::Timestamp;

/// Common operations over any kind-tagged, versioned resource.
///
/// Registries hold resources through this trait without knowing their
/// spec type. Implementations forward the metadata operations to
/// [`Metadata`].
pub trait Resource {
    /// The resource kind tag, e.g. `license_info`.
    fn kind(&self) -> &str;

    /// The schema revision tag, e.g. `v3`.
    fn version(&self) -> &str;

    /// The shared metadata block.
    fn metadata(&self) -> &Metadata;

    /// Mutable access to the shared metadata block.
    fn metadata_mut(&mut self) -> &mut Metadata;

    /// Apply defaults and verify constraints.
    fn check_and_set_defaults(&mut self) -> Result<(), ResourceError>;

    /// The resource name.
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Rename the resource.
    fn set_name(&mut self, name: String) {
        self.metadata_mut().name = name;
    }

    /// The expiry instant, if set.
    fn expiry(&self) -> Option<Timestamp> {
        self.metadata().expiry()
    }

    /// Set or clear the expiry instant.
    fn set_expiry(&mut self, expires: Option<Timestamp>) {
        self.metadata_mut().set_expiry(expires);
    }

    /// Set the expiry to `ttl` from the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` if the resulting expiry is out of range.
    fn set_ttl(&mut self, clock: &dyn Clock, ttl: Duration) -> Result<(), ResourceError> {
        self.metadata_mut().set_ttl(clock, ttl)
    }
}
