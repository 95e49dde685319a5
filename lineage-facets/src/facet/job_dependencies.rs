//! Direct upstream and downstream relationships between job runs.
//!
//! Schema: `https://openlineage.io/spec/facets/1-0-0/JobDependenciesRunFacet.json`.
//! Identifiers (job namespace/name, run id) are exempt from redaction;
//! `triggerRule` is not.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::{BaseFacet, Facet, FacetKind, Schema, DEFAULT_PRODUCER};
use crate::{validation, Redactable, ValidationError};

macro_rules! def_uri {
    ($def:literal) => {
        concat!(
            "https://openlineage.io/spec/facets/1-0-0/JobDependenciesRunFacet.json#/$defs/",
            $def
        )
    };
}

/// Documented `triggerRule` values.
///
/// The field is not restricted to these. Unknown values are passed through.
pub mod trigger_rule {
    /// Run once every upstream run succeeded.
    pub const ALL_SUCCESS: &str = "ALL_SUCCESS";
    /// Run once every upstream run finished, whatever the outcome.
    pub const ALL_DONE: &str = "ALL_DONE";
    /// Run as soon as one upstream run succeeded.
    pub const ONE_SUCCESS: &str = "ONE_SUCCESS";
    /// Run once no upstream run failed.
    pub const NONE_FAILED: &str = "NONE_FAILED";
}

/// A job, identified by namespace and name.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Redactable)]
#[redact(skip_redact(namespace, name))]
pub struct JobIdentifier {
    namespace: String,
    name: String,
}

impl JobIdentifier {
    /// Identifies job `name` in `namespace`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The namespace containing the job.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The unique name of the job within its namespace.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Schema for JobIdentifier {
    const SCHEMA_URI: &'static str = def_uri!("JobIdentifier");
}

/// A run, identified by its globally unique id.
///
/// The id must be a UUID. It is stored exactly as supplied.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Redactable)]
#[serde(try_from = "RunIdentifierRepr")]
#[redact(skip_redact(run_id))]
pub struct RunIdentifier {
    #[serde(rename = "runId")]
    run_id: String,
}

#[derive(Deserialize)]
struct RunIdentifierRepr {
    #[serde(rename = "runId")]
    run_id: String,
}

impl TryFrom<RunIdentifierRepr> for RunIdentifier {
    type Error = ValidationError;

    fn try_from(repr: RunIdentifierRepr) -> Result<Self, Self::Error> {
        Self::new(repr.run_id)
    }
}

impl RunIdentifier {
    /// Validates `run_id` as a UUID.
    pub fn new(run_id: impl Into<String>) -> Result<Self, ValidationError> {
        let run_id = run_id.into();
        validation::uuid("runId", &run_id)?;
        Ok(Self { run_id })
    }

    /// Infallible construction from a parsed UUID, in hyphenated lowercase form.
    pub fn from_uuid(run_id: Uuid) -> Self {
        Self {
            run_id: run_id.hyphenated().to_string(),
        }
    }

    /// The run id, exactly as supplied.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

impl From<Uuid> for RunIdentifier {
    fn from(run_id: Uuid) -> Self {
        Self::from_uuid(run_id)
    }
}

impl Schema for RunIdentifier {
    const SCHEMA_URI: &'static str = def_uri!("RunIdentifier");
}

/// The root job and run of a dependency chain.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Redactable)]
pub struct RootIdentifier {
    run: RunIdentifier,
    job: JobIdentifier,
}

impl RootIdentifier {
    /// Root of a dependency chain: its `run` and `job`.
    pub fn new(run: RunIdentifier, job: JobIdentifier) -> Self {
        Self { run, job }
    }

    /// The root run.
    pub fn run(&self) -> &RunIdentifier {
        &self.run
    }

    /// The root job.
    pub fn job(&self) -> &JobIdentifier {
        &self.job
    }
}

impl Schema for RootIdentifier {
    const SCHEMA_URI: &'static str = def_uri!("RootIdentifier");
}

/// One dependency of a run: the job, and when known its run and root.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Redactable)]
pub struct JobDependency {
    job: JobIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    run: Option<RunIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root: Option<RootIdentifier>,
}

impl JobDependency {
    /// A dependency on `job`, optionally pinned to a run and a root.
    pub fn new(job: JobIdentifier, run: Option<RunIdentifier>, root: Option<RootIdentifier>) -> Self {
        Self { job, run, root }
    }

    /// The job depended upon.
    pub fn job(&self) -> &JobIdentifier {
        &self.job
    }

    /// `None` until the dependency's run is known.
    pub fn run(&self) -> Option<&RunIdentifier> {
        self.run.as_ref()
    }

    /// Root of the dependency's chain, when known.
    pub fn root(&self) -> Option<&RootIdentifier> {
        self.root.as_ref()
    }
}

impl Schema for JobDependency {
    const SCHEMA_URI: &'static str = def_uri!("JobDependency");
}

/// Direct upstream and downstream relationships of a run.
///
/// Deserialization rebuilds the envelope from the type: `_schemaURL` in the
/// input is ignored and a missing `_producer` becomes [`DEFAULT_PRODUCER`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Redactable)]
#[serde(from = "JobDependenciesRunFacetRepr")]
pub struct JobDependenciesRunFacet {
    #[serde(flatten)]
    base: BaseFacet,
    upstream: Vec<JobDependency>,
    downstream: Vec<JobDependency>,
    #[serde(rename = "triggerRule", skip_serializing_if = "Option::is_none")]
    trigger_rule: Option<String>,
}

#[derive(Deserialize)]
struct JobDependenciesRunFacetRepr {
    #[serde(rename = "_producer", default)]
    producer: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    upstream: Vec<JobDependency>,
    #[serde(default, deserialize_with = "null_as_empty")]
    downstream: Vec<JobDependency>,
    #[serde(rename = "triggerRule", default)]
    trigger_rule: Option<String>,
}

impl From<JobDependenciesRunFacetRepr> for JobDependenciesRunFacet {
    fn from(repr: JobDependenciesRunFacetRepr) -> Self {
        Self::with_producer(
            repr.producer.unwrap_or_else(|| DEFAULT_PRODUCER.to_string()),
            repr.upstream,
            repr.downstream,
            repr.trigger_rule,
        )
    }
}

impl JobDependenciesRunFacet {
    /// Creates the facet with [`DEFAULT_PRODUCER`].
    pub fn new(
        upstream: Vec<JobDependency>,
        downstream: Vec<JobDependency>,
        trigger_rule: Option<String>,
    ) -> Self {
        Self::with_producer(DEFAULT_PRODUCER, upstream, downstream, trigger_rule)
    }

    /// Creates the facet stamped with `producer`.
    pub fn with_producer(
        producer: impl Into<String>,
        upstream: Vec<JobDependency>,
        downstream: Vec<JobDependency>,
        trigger_rule: Option<String>,
    ) -> Self {
        Self {
            base: BaseFacet::new::<Self>(producer),
            upstream,
            downstream,
            trigger_rule,
        }
    }

    /// Runs that must complete before this run can start.
    pub fn upstream(&self) -> &[JobDependency] {
        &self.upstream
    }

    /// Runs waiting for this run to complete successfully.
    pub fn downstream(&self) -> &[JobDependency] {
        &self.downstream
    }

    /// Condition on upstream outcomes under which this job runs, e.g.
    /// [`trigger_rule::ALL_SUCCESS`].
    pub fn trigger_rule(&self) -> Option<&str> {
        self.trigger_rule.as_deref()
    }
}

impl Default for JobDependenciesRunFacet {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), None)
    }
}

impl Schema for JobDependenciesRunFacet {
    const SCHEMA_URI: &'static str = def_uri!("JobDependenciesRunFacet");
}

impl Facet for JobDependenciesRunFacet {
    const KIND: FacetKind = FacetKind::Run;
    const KEY: &'static str = "jobDependencies";

    fn base(&self) -> &BaseFacet {
        &self.base
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
