//! # Tri-state Booleans
//!
//! Some resource fields were historically written by hand in YAML, where
//! `usage: yes` and `usage: true` mean the same thing. [`Bool`] accepts a
//! native boolean or one of a fixed set of string tokens on input, and
//! always writes a native boolean on output.
//!
//! ## Token Table
//!
//! Matching is case-insensitive.
//!
//! | Resolves to | Tokens                                   |
//! |-------------|------------------------------------------|
//! | `true`      | `yes`, `yeah`, `y`, `true`, `1`, `on`    |
//! | `false`     | `no`, `nope`, `n`, `false`, `0`, `off`   |
//!
//! Any other string, including the empty string, is rejected. Any other
//! JSON type (numbers, null, arrays, objects) is rejected.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResourceError;

const TRUE_TOKENS: &[&str] = &["yes", "yeah", "y", "true", "1", "on"];
const FALSE_TOKENS: &[&str] = &["no", "nope", "n", "false", "0", "off"];

/// A boolean that deserializes from either a JSON boolean or a recognized
/// string token. Absent fields default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool(bool);

impl Bool {
    /// Wrap a native boolean.
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// The resolved value.
    pub const fn value(&self) -> bool {
        self.0
    }

    /// Whether the resolved value is `false`. Used as a serde skip predicate.
    pub fn is_false(&self) -> bool {
        !self.0
    }

    /// Resolve a string token against the token table.
    ///
    /// # Errors
    ///
    /// Returns `BadParameter` for any token not in the table.
    pub fn parse_token(token: &str) -> Result<bool, ResourceError> {
        let lowered = token.to_ascii_lowercase();
        if TRUE_TOKENS.contains(&lowered.as_str()) {
            Ok(true)
        } else if FALSE_TOKENS.contains(&lowered.as_str()) {
            Ok(false)
        } else {
            Err(ResourceError::bad_parameter(format!(
                "unsupported value: {token:?}"
            )))
        }
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.0
    }
}

impl FromStr for Bool {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s).map(Self)
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = Bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or one of the strings yes/no/true/false/on/off")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Bool, E> {
        Ok(Bool(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Bool, E> {
        Bool::parse_token(v).map(Bool).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoolVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json(value: serde_json::Value) -> Result<Bool, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_native_booleans() {
        assert_eq!(from_json(json!(true)).unwrap(), Bool::new(true));
        assert_eq!(from_json(json!(false)).unwrap(), Bool::new(false));
    }

    #[test]
    fn test_true_tokens() {
        for token in ["yes", "YES", "Yeah", "y", "true", "True", "1", "on", "ON"] {
            assert!(from_json(json!(token)).unwrap().value(), "{token}");
        }
    }

    #[test]
    fn test_false_tokens() {
        for token in ["no", "No", "nope", "n", "false", "FALSE", "0", "off"] {
            assert!(!from_json(json!(token)).unwrap().value(), "{token}");
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        for token in ["maybe", "", " yes", "2"] {
            let err = from_json(json!(token)).unwrap_err();
            assert!(err.to_string().contains("unsupported value"), "{token:?}: {err}");
        }
    }

    #[test]
    fn test_other_json_types_rejected() {
        assert!(from_json(json!(1)).is_err());
        assert!(from_json(json!(0.5)).is_err());
        assert!(from_json(json!(null)).is_err());
        assert!(from_json(json!([true])).is_err());
        assert!(from_json(json!({"value": true})).is_err());
    }

    #[test]
    fn test_serializes_as_native_boolean() {
        let yes: Bool = "yes".parse().unwrap();
        assert_eq!(serde_json::to_value(yes).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(Bool::default()).unwrap(), json!(false));
    }

    #[test]
    fn test_parse_token_is_bad_parameter() {
        let err = Bool::parse_token("perhaps").unwrap_err();
        assert!(err.is_bad_parameter());
        assert!(err.to_string().contains("\"perhaps\""));
    }

    proptest::proptest! {
        #[test]
        fn prop_tokens_are_case_insensitive(
            idx in 0usize..TRUE_TOKENS.len(),
            mask in proptest::collection::vec(proptest::bool::ANY, 8),
        ) {
            let mixed: String = TRUE_TOKENS[idx]
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
                .collect();
            proptest::prop_assert_eq!(Bool::parse_token(&mixed).unwrap(), true);
            let negated = FALSE_TOKENS[idx].to_ascii_uppercase();
            proptest::prop_assert_eq!(Bool::parse_token(&negated).unwrap(), false);
        }
    }

    #[test]
    fn test_default_is_false() {
        assert!(Bool::default().is_false());
        assert!(!bool::from(Bool::default()));
    }
}
