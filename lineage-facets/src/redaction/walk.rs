//! Structural traversal for redaction.
//!
//! [`Walk`] is implemented for every type that can appear in a redacted field:
//!
//! | Type | Redacted form |
//! |------|---------------|
//! | `String`, `Cow<str>` | mapped through `RedactionMapper::map_text` |
//! | numbers, `bool`, `char` | mapped through `RedactionMapper::map_scalar` |
//! | `Option<T>` | `None` stays `None`, `Some` is walked |
//! | `Vec<T>`, `Box<T>`, sets | every element walked, order kept |
//! | `HashMap`, `BTreeMap` | keys kept, values walked |
//! | `()`, `PhantomData<T>` | unchanged |
//! | `#[derive(Redactable)]` types | walked with their own exemption set |
//!
//! Fields listed in a type's exemption set are never handed to `Walk`, so
//! exempt fields may have any type.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};

use super::redact::RedactionMapper;

/// A value that can be redacted by walking its structure.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be walked for redaction",
    label = "this field is not exempt, so its type must implement `Walk`",
    note = "derive `Redactable` on the type, or list the field in `#[redact(skip_redact(...))]`"
)]
pub trait Walk: Sized {
    /// Returns the redacted form of `self`.
    #[must_use]
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self;
}

impl Walk for String {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        mapper.map_text(&self)
    }
}

impl Walk for Cow<'_, str> {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        Cow::Owned(mapper.map_text(&self))
    }
}

macro_rules! impl_walk_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
                    mapper.map_scalar(self)
                }
            }
        )*
    };
}

impl_walk_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Walk for () {
    fn walk<M: RedactionMapper>(self, _mapper: &M) -> Self {}
}

impl<T: ?Sized> Walk for PhantomData<T> {
    fn walk<M: RedactionMapper>(self, _mapper: &M) -> Self {
        self
    }
}

impl<T: Walk> Walk for Option<T> {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        self.map(|value| value.walk(mapper))
    }
}

impl<T: Walk> Walk for Box<T> {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        Box::new((*self).walk(mapper))
    }
}

impl<T: Walk> Walk for Vec<T> {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        self.into_iter().map(|value| value.walk(mapper)).collect()
    }
}

impl<K: Ord, V: Walk> Walk for BTreeMap<K, V> {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        self.into_iter()
            .map(|(key, value)| (key, value.walk(mapper)))
            .collect()
    }
}

impl<K, V, S> Walk for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Walk,
    S: BuildHasher + Clone,
{
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.into_iter().map(|(key, value)| (key, value.walk(mapper))));
        result
    }
}

// Redacted elements may collide, so a redacted set can be smaller than the input.
impl<T: Walk + Ord> Walk for BTreeSet<T> {
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        self.into_iter().map(|value| value.walk(mapper)).collect()
    }
}

impl<T, S> Walk for HashSet<T, S>
where
    T: Walk + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn walk<M: RedactionMapper>(self, mapper: &M) -> Self {
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.into_iter().map(|value| value.walk(mapper)));
        result
    }
}
