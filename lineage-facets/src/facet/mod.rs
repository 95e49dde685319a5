//! Schema tagging and the facet envelope.
//!
//! Every entity names the JSON Schema definition it conforms to through
//! [`Schema`]. Facets additionally carry a [`BaseFacet`] envelope
//! (`_producer`, `_schemaURL`) which is stamped at construction and never
//! redacted.

use serde::Serialize;

use crate::{FacetError, Redactable};

pub mod job_dependencies;

/// Producer URI stamped into facets that do not specify one.
pub const DEFAULT_PRODUCER: &str = concat!("urn:lineage-facets:", env!("CARGO_PKG_VERSION"));

/// Type-level schema identification.
pub trait Schema {
    /// URI of the JSON Schema definition this type conforms to.
    const SCHEMA_URI: &'static str;
}

/// The kind of lineage object a facet attaches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacetKind {
    /// Attached to a run.
    Run,
    /// Attached to a job.
    Job,
    /// Attached to any dataset.
    Dataset,
    /// Attached to an input dataset only.
    InputDataset,
    /// Attached to an output dataset only.
    OutputDataset,
}

impl FacetKind {
    /// URI of the base definition every facet of this kind extends.
    pub const fn base_schema_uri(self) -> &'static str {
        match self {
            Self::Run => "https://openlineage.io/spec/2-0-2/OpenLineage.json#/$defs/RunFacet",
            Self::Job => "https://openlineage.io/spec/2-0-2/OpenLineage.json#/$defs/JobFacet",
            Self::Dataset => {
                "https://openlineage.io/spec/2-0-2/OpenLineage.json#/$defs/DatasetFacet"
            }
            Self::InputDataset => {
                "https://openlineage.io/spec/2-0-2/OpenLineage.json#/$defs/InputDatasetFacet"
            }
            Self::OutputDataset => {
                "https://openlineage.io/spec/2-0-2/OpenLineage.json#/$defs/OutputDatasetFacet"
            }
        }
    }
}

/// Envelope fields shared by every facet. Both are exempt from redaction.
///
/// Only built through [`BaseFacet::new`], so `_schemaURL` always names the
/// facet type's schema. Facets rebuild it when deserialized.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Redactable)]
#[redact(skip_redact(producer, schema_url))]
pub struct BaseFacet {
    #[serde(rename = "_producer")]
    producer: String,
    #[serde(rename = "_schemaURL")]
    schema_url: String,
}

impl BaseFacet {
    /// Envelope for facet type `F`, produced by `producer`.
    pub fn new<F: Schema>(producer: impl Into<String>) -> Self {
        Self {
            producer: producer.into(),
            schema_url: F::SCHEMA_URI.to_string(),
        }
    }

    /// URI of the library that produced the facet.
    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// URI of the schema the facet conforms to.
    pub fn schema_url(&self) -> &str {
        &self.schema_url
    }
}

/// One semantic unit of lineage metadata.
///
/// A facet adds nothing to redaction or validation; it only declares where it
/// attaches, the key it is stored under, and its schema.
pub trait Facet: Schema + Redactable + Serialize {
    /// What the facet attaches to.
    const KIND: FacetKind;

    /// Key under which the facet appears in the owning object's `facets` map.
    const KEY: &'static str;

    /// The `_producer`/`_schemaURL` envelope.
    fn base(&self) -> &BaseFacet;

    /// Redacts a copy of the facet and encodes it as JSON.
    fn to_redacted_json(&self) -> Result<serde_json::Value, FacetError>
    where
        Self: Clone,
    {
        Ok(serde_json::to_value(self.redacted())?)
    }
}
