//! The per-type redaction capability.

use std::any::type_name;

use super::{
    policy::TextRedactionPolicy,
    redact::{redact, redact_with_policy},
    walk::Walk,
};
use crate::error::DefinitionError;

/// An entity with a declared field list and a type-level exemption set.
///
/// Normally implemented with `#[derive(Redactable)]`, which checks the
/// exemption set against the declared fields at compile time. Hand-written
/// impls should be checked once at startup with [`check_definition`].
pub trait Redactable: Walk {
    /// Names of the declared fields, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Names of the fields that pass through redaction unchanged.
    const SKIP_REDACT: &'static [&'static str];

    /// Returns true if `field` is exempt from redaction.
    fn is_exempt(field: &str) -> bool {
        Self::SKIP_REDACT.contains(&field)
    }

    /// Consumes `self` and returns its redacted form.
    #[must_use]
    fn redact(self) -> Self {
        redact(self)
    }

    /// Returns a redacted copy, leaving `self` untouched.
    #[must_use]
    fn redacted(&self) -> Self
    where
        Self: Clone,
    {
        redact(self.clone())
    }

    /// Consumes `self` and redacts text leaves with `policy`.
    #[must_use]
    fn redact_with_policy(self, policy: TextRedactionPolicy) -> Self {
        redact_with_policy(self, policy)
    }
}

/// Verifies that every exempt name of `T` is a declared field, listed once.
pub fn check_definition<T: Redactable>() -> Result<(), DefinitionError> {
    for (index, &field) in T::SKIP_REDACT.iter().enumerate() {
        if !T::FIELDS.contains(&field) {
            return Err(DefinitionError::UnknownField {
                type_name: type_name::<T>(),
                field,
            });
        }
        if T::SKIP_REDACT[..index].contains(&field) {
            return Err(DefinitionError::DuplicateField {
                type_name: type_name::<T>(),
                field,
            });
        }
    }
    Ok(())
}
