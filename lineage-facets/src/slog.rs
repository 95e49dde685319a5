//! Adapters for logging redacted facets through `slog`.
//!
//! The logged representation is always derived from the redacted value; the
//! original is never serialized. Serialization failures are logged as a
//! placeholder string instead of being returned to `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{redact, Facet};

/// A `slog::Value` emitting an already-redacted payload as nested JSON.
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts a walkable value into a `slog::Value` carrying its redacted JSON.
///
/// ```ignore
/// use lineage_facets::slog::IntoRedactedJson;
///
/// info!(logger, "emitting facet"; "jobDependencies" => facet.into_redacted_json());
/// ```
pub trait IntoRedactedJson: crate::Walk + Serialize {
    /// Redacts `self` and wraps the JSON encoding of the result.
    ///
    /// If encoding fails, the logged value is the string
    /// `"Failed to serialize redacted value"`.
    fn into_redacted_json(self) -> RedactedJson {
        let value = serde_json::to_value(redact(self)).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize redacted value".to_string())
        });
        RedactedJson { value }
    }
}

impl<T> IntoRedactedJson for T where T: crate::Walk + Serialize {}

/// Pairs a facet's registry key (e.g. `jobDependencies`) with its redacted JSON.
pub fn facet_kv<F: Facet + Clone>(facet: &F) -> (&'static str, RedactedJson) {
    (F::KEY, facet.clone().into_redacted_json())
}
