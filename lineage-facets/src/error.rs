//! Error types.
//!
//! - [`ValidationError`]: a constructor rejected a field value.
//! - [`DefinitionError`]: a hand-written `Redactable` impl declares an
//!   exemption set that does not match its fields. Derived impls report this
//!   as a compile error instead.
//! - [`FacetError`]: emitting a facet failed.

use thiserror::Error;

/// A field value was rejected at construction time. No instance was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value {value:?} for field `{field}`: {reason}")]
pub struct ValidationError {
    field: &'static str,
    value: String,
    reason: String,
}

impl ValidationError {
    /// Creates an error for `field` holding `value`.
    pub fn new(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Wire name of the rejected field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The rejected value, exactly as supplied.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Why the value was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The exemption set of a type does not match its declared fields.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionError {
    /// An exempt name is not a declared field.
    #[error("`{type_name}` exempts `{field}` from redaction but declares no such field")]
    UnknownField {
        /// The offending type.
        type_name: &'static str,
        /// The unknown field name.
        field: &'static str,
    },

    /// An exempt name appears more than once.
    #[error("`{type_name}` lists `{field}` more than once in its exemption set")]
    DuplicateField {
        /// The offending type.
        type_name: &'static str,
        /// The repeated field name.
        field: &'static str,
    },
}

/// Failure while producing the emitted form of a facet.
#[derive(Error, Debug)]
pub enum FacetError {
    /// A field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
