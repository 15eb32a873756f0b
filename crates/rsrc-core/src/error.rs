//! # Error Types: Resource Error Taxonomy
//!
//! Every failure in the workspace is a [`ResourceError`]. Callers branch on
//! [`ResourceError::kind`] rather than on the variant, because context
//! wrapping (see [`ResourceError::context`]) nests the original error
//! without changing what kind of failure it was.
//!
//! ## Design
//!
//! - Malformed input, schema violations, unsupported versions, and empty
//!   required fields are all `BadParameter`.
//! - Messages carry expected vs actual values and the offending field so
//!   they are actionable without reading the source.

use thiserror::Error;

/// Classification of a [`ResourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied malformed or unacceptable input.
    BadParameter,
    /// A value could not be serialized.
    Serialization,
    /// A failure inside the library, such as a built-in schema that does
    /// not compile.
    Internal,
}

/// Top-level error type for resource handling.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Malformed input, schema violation, unsupported version, or an empty
    /// required field.
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// Serialization of an otherwise valid value failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A failure not caused by the caller's input.
    #[error("internal error: {0}")]
    Internal(String),

    /// An error annotated with the operation that surfaced it.
    #[error("{context}: {source}")]
    Context {
        /// What was being done when the error occurred.
        context: String,
        /// The wrapped error. Its kind is the kind of the whole chain.
        #[source]
        source: Box<ResourceError>,
    },
}

impl ResourceError {
    /// Shorthand for [`ResourceError::BadParameter`].
    pub fn bad_parameter(message: impl Into<String>) -> Self {
        Self::BadParameter(message.into())
    }

    /// Wrap `self` with a description of the failing operation.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The kind of the innermost error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadParameter(_) => ErrorKind::BadParameter,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Context { source, .. } => source.kind(),
        }
    }

    /// Whether this is (or wraps) a `BadParameter` error.
    pub fn is_bad_parameter(&self) -> bool {
        self.kind() == ErrorKind::BadParameter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_preserves_kind() {
        let err = ResourceError::bad_parameter("missing parameter name")
            .context("check license info defaults")
            .context("unmarshal license info");
        assert_eq!(err.kind(), ErrorKind::BadParameter);
        assert!(err.is_bad_parameter());
    }

    #[test]
    fn test_context_display_chains_messages() {
        let err = ResourceError::bad_parameter("missing parameter name")
            .context("check license info defaults");
        assert_eq!(
            err.to_string(),
            "check license info defaults: bad parameter: missing parameter name"
        );
    }

    #[test]
    fn test_serialization_kind() {
        let err = ResourceError::Serialization("boom".into());
        assert_eq!(err.kind(), ErrorKind::Serialization);
        assert!(!err.is_bad_parameter());
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error as _;
        let err = ResourceError::bad_parameter("x").context("outer");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("bad parameter: x"));
    }
}
