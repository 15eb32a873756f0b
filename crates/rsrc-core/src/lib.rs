//! # rsrc-core: Foundational Types for Versioned Resources
//!
//! Every resource handled by this workspace is carried in the same
//! envelope: a `kind` tag, a `version` tag, shared [`Metadata`], and a
//! resource-specific `spec`. This crate defines the pieces that are
//! common to all of them.
//!
//! ## Key Design Principles
//!
//! 1. **One error taxonomy.** [`ResourceError`] classifies every failure
//!    by [`ErrorKind`]. Context wrapping never changes the kind.
//!
//! 2. **UTC-only timestamps.** [`Timestamp`] normalizes any RFC 3339 input
//!    to UTC at seconds precision, so serialized expiry values round-trip.
//!
//! 3. **Explicit coercion for string-or-boolean fields.** [`Bool`] owns the
//!    token table that maps `"yes"`, `"off"` and friends to booleans.
//!    Nothing else in the workspace interprets these strings.
//!
//! 4. **Injected time.** TTL arithmetic takes a [`Clock`] so tests can fix
//!    the current instant.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rsrc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod clock;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod resource;
pub mod temporal;
pub mod tristate;

// Re-export primary types for ergonomic imports.
pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::{DEFAULT_NAMESPACE, KIND_LICENSE_INFO, V3};
pub use error::{ErrorKind, ResourceError};
pub use metadata::{is_valid_label_key, Metadata};
pub use resource::Resource;
pub use temporal::Timestamp;
pub use tristate::Bool;
