//! Redaction-aware, schema-tagged lineage facets.
//!
//! A facet is a small metadata record attached to a lineage event. Every facet
//! type in this crate:
//! - carries the URI of the JSON Schema it conforms to as a type-level constant
//!   ([`Schema::SCHEMA_URI`]),
//! - declares which of its fields are safe to emit as-is
//!   ([`Redactable::SKIP_REDACT`]); everything else is redacted,
//! - validates constrained fields when it is constructed, so a malformed value
//!   never produces an instance.
//!
//! Redaction is deny-by-default. Calling [`Redactable::redact`] walks the value
//! and, for each field not in the exemption set:
//! - replaces text with [`REDACTED_PLACEHOLDER`],
//! - resets scalars to their neutral value,
//! - walks nested `Redactable` values (also inside `Option`, `Vec` and maps)
//!   using the nested type's own exemption set.
//!
//! ```rust
//! use lineage_facets::{
//!     JobDependenciesRunFacet, JobDependency, JobIdentifier, Redactable, REDACTED_PLACEHOLDER,
//! };
//!
//! let facet = JobDependenciesRunFacet::new(
//!     vec![JobDependency::new(JobIdentifier::new("airflow", "etl.extract"), None, None)],
//!     Vec::new(),
//!     Some("ALL_SUCCESS".to_string()),
//! );
//!
//! let redacted = facet.redacted();
//! assert_eq!(redacted.trigger_rule(), Some(REDACTED_PLACEHOLDER));
//! assert_eq!(redacted.upstream()[0].job().name(), "etl.extract");
//! ```
//!
//! The exemption set is checked against the declared fields when the derive
//! expands. A name that does not exist is a compile error:
//!
//! ```compile_fail
//! use lineage_facets::Redactable;
//!
//! #[derive(Clone, Redactable)]
//! #[redact(skip_redact(run_uuid))]
//! struct RunRef {
//!     run_id: String,
//! }
//! ```
//!
//! So is listing a field twice:
//!
//! ```compile_fail
//! use lineage_facets::Redactable;
//!
//! #[derive(Clone, Redactable)]
//! #[redact(skip_redact(name, name))]
//! struct JobRef {
//!     name: String,
//! }
//! ```
//!
//! Only structs have a fixed field list to exempt:
//!
//! ```compile_fail
//! use lineage_facets::Redactable;
//!
//! #[derive(Clone, Redactable)]
//! enum Trigger {
//!     Manual,
//!     Scheduled(String),
//! }
//! ```
//!
//! What this crate does not do:
//! - transport or batch lineage events
//! - validate documents against the referenced JSON Schema

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub use lineage_facets_derive::Redactable;

// Lets the derive refer to `lineage_facets::...` from inside this crate.
#[allow(unused_extern_crates)]
extern crate self as lineage_facets;

mod error;
mod facet;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
pub mod validation;

pub use error::{DefinitionError, FacetError, ValidationError};
pub use facet::{
    job_dependencies::{
        trigger_rule, JobDependenciesRunFacet, JobDependency, JobIdentifier, RootIdentifier,
        RunIdentifier,
    },
    BaseFacet, Facet, FacetKind, Schema, DEFAULT_PRODUCER,
};
pub use redaction::{
    check_definition, redact, redact_with_policy, KeepConfig, PolicyMapper, Redactable,
    RedactionMapper, ScalarRedaction, TextRedactionPolicy, Walk, REDACTED_PLACEHOLDER,
};
