//! Leaf mapping and redaction entrypoints.
//!
//! A [`RedactionMapper`] decides what a redacted leaf looks like. [`Walk`]
//! implementations decide where the leaves are.

use super::{policy::TextRedactionPolicy, walk::Walk};

/// Redaction for non-text scalars.
///
/// A typed field cannot hold a placeholder string, so scalars are reset to a
/// neutral value instead: `0` for numbers, `false` for `bool`, `'X'` for `char`.
pub trait ScalarRedaction: Sized {
    /// Returns the redacted form of `self`.
    #[must_use]
    fn redact_scalar(self) -> Self;
}

macro_rules! impl_scalar_redaction_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScalarRedaction for $ty {
                fn redact_scalar(self) -> Self {
                    Self::default()
                }
            }
        )*
    };
}

impl_scalar_redaction_default!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl ScalarRedaction for char {
    fn redact_scalar(self) -> Self {
        'X'
    }
}

/// Maps sensitive leaves to their redacted form.
pub trait RedactionMapper {
    /// Redacts a text leaf.
    fn map_text(&self, value: &str) -> String;

    /// Redacts a non-text scalar leaf.
    fn map_scalar<T: ScalarRedaction>(&self, value: T) -> T {
        value.redact_scalar()
    }
}

/// Mapper applying a [`TextRedactionPolicy`] to every text leaf.
#[derive(Clone, Debug, Default)]
pub struct PolicyMapper {
    policy: TextRedactionPolicy,
}

impl PolicyMapper {
    /// Creates a mapper for `policy`.
    #[must_use]
    pub fn new(policy: TextRedactionPolicy) -> Self {
        Self { policy }
    }

    /// The policy applied to text leaves.
    pub fn policy(&self) -> &TextRedactionPolicy {
        &self.policy
    }
}

impl RedactionMapper for PolicyMapper {
    fn map_text(&self, value: &str) -> String {
        self.policy.apply_to(value)
    }
}

/// Redacts `value` with the default full-placeholder policy.
#[must_use]
pub fn redact<T: Walk>(value: T) -> T {
    value.walk(&PolicyMapper::default())
}

/// Redacts `value`, applying `policy` to text leaves.
#[must_use]
pub fn redact_with_policy<T: Walk>(value: T, policy: TextRedactionPolicy) -> T {
    value.walk(&PolicyMapper::new(policy))
}
