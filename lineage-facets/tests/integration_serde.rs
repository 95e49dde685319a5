//! Wire format and construction-time validation.
//!
//! Covers wire names (`runId`, `triggerRule`, `_producer`, `_schemaURL`),
//! omission of absent optionals, and that deserialization runs the same
//! validators as the constructors.

use lineage_facets::{
    Facet, FacetError, DEFAULT_PRODUCER, JobDependenciesRunFacet, JobDependency, JobIdentifier, RootIdentifier,
    RunIdentifier, Schema, REDACTED_PLACEHOLDER,
};
use serde_json::json;

const RUN_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

#[test]
fn valid_run_id_is_preserved_exactly() {
    let run = RunIdentifier::new(RUN_ID).unwrap();
    assert_eq!(run.run_id(), RUN_ID);

    let braced = format!("{{{RUN_ID}}}");
    assert_eq!(RunIdentifier::new(braced.clone()).unwrap().run_id(), braced);
}

#[test]
fn malformed_run_id_is_rejected() {
    let err = RunIdentifier::new("not-a-uuid").unwrap_err();
    assert_eq!(err.field(), "runId");
    assert_eq!(err.value(), "not-a-uuid");
    assert!(err.to_string().contains("`runId`"));
}

#[test]
fn run_identifier_uses_camel_case() {
    let run = RunIdentifier::new(RUN_ID).unwrap();
    assert_eq!(serde_json::to_value(&run).unwrap(), json!({ "runId": RUN_ID }));
}

#[test]
fn deserialization_validates_run_id() {
    let run: RunIdentifier = serde_json::from_value(json!({ "runId": RUN_ID })).unwrap();
    assert_eq!(run.run_id(), RUN_ID);

    let err = serde_json::from_value::<RunIdentifier>(json!({ "runId": "42" })).unwrap_err();
    assert!(err.to_string().contains("invalid value \"42\" for field `runId`"));
}

#[test]
fn nested_malformed_run_id_fails_the_whole_facet() {
    let document = json!({
        "_producer": "p",
        "_schemaURL": JobDependenciesRunFacet::SCHEMA_URI,
        "upstream": [{ "job": { "namespace": "ns", "name": "a" }, "run": { "runId": "nope" } }],
    });
    assert!(serde_json::from_value::<JobDependenciesRunFacet>(document).is_err());
}

#[test]
fn facet_serializes_with_envelope_and_omits_absent_fields() {
    let facet = JobDependenciesRunFacet::with_producer(
        "https://example.com/producer",
        vec![JobDependency::new(JobIdentifier::new("ns", "a"), None, None)],
        Vec::new(),
        None,
    );
    assert_eq!(
        serde_json::to_value(&facet).unwrap(),
        json!({
            "_producer": "https://example.com/producer",
            "_schemaURL": "https://openlineage.io/spec/facets/1-0-0/JobDependenciesRunFacet.json#/$defs/JobDependenciesRunFacet",
            "upstream": [{ "job": { "namespace": "ns", "name": "a" } }],
            "downstream": [],
        })
    );
}

#[test]
fn facet_round_trips_through_json() {
    let run = RunIdentifier::new(RUN_ID).unwrap();
    let job = JobIdentifier::new("ns", "root");
    let facet = JobDependenciesRunFacet::new(
        vec![JobDependency::new(
            JobIdentifier::new("ns", "a"),
            Some(run.clone()),
            Some(RootIdentifier::new(run, job)),
        )],
        Vec::new(),
        Some("ONE_SUCCESS".to_string()),
    );
    let json = serde_json::to_string(&facet).unwrap();
    let parsed: JobDependenciesRunFacet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, facet);
}

#[test]
fn null_or_missing_sequences_read_as_empty() {
    let facet: JobDependenciesRunFacet = serde_json::from_value(json!({
        "_producer": "p",
        "_schemaURL": JobDependenciesRunFacet::SCHEMA_URI,
        "upstream": null,
        "triggerRule": "SOMETHING_NEW",
    }))
    .unwrap();
    assert!(facet.upstream().is_empty());
    assert!(facet.downstream().is_empty());
    assert_eq!(facet.trigger_rule(), Some("SOMETHING_NEW"));
}

#[test]
fn redacted_json_is_what_leaves_the_process() {
    let facet = JobDependenciesRunFacet::with_producer(
        "p",
        Vec::new(),
        vec![JobDependency::new(JobIdentifier::new("ns", "b"), None, None)],
        Some("ALL_DONE".to_string()),
    );
    let json = facet.to_redacted_json().unwrap();
    assert_eq!(json["triggerRule"], REDACTED_PLACEHOLDER);
    assert_eq!(json["downstream"][0]["job"]["name"], "b");
    assert_eq!(json["_producer"], "p");
}

#[test]
fn validation_errors_convert_into_facet_errors() {
    fn build(run_id: &str) -> Result<JobDependency, FacetError> {
        let run = RunIdentifier::new(run_id)?;
        Ok(JobDependency::new(JobIdentifier::new("ns", "a"), Some(run), None))
    }

    assert!(build(RUN_ID).is_ok());
    assert!(matches!(build("bad"), Err(FacetError::Validation(_))));
}

#[test]
fn deserialized_schema_url_comes_from_the_type() {
    let facet: JobDependenciesRunFacet = serde_json::from_value(json!({
        "_producer": "p",
        "_schemaURL": "https://example.com/Other.json",
        "upstream": [],
        "downstream": [],
    }))
    .unwrap();
    assert_eq!(facet.base().schema_url(), JobDependenciesRunFacet::SCHEMA_URI);
    assert_eq!(facet.base().producer(), "p");

    let json = facet.to_redacted_json().unwrap();
    assert_eq!(json["_schemaURL"], JobDependenciesRunFacet::SCHEMA_URI);
    assert_eq!(
        serde_json::to_value(&facet).unwrap()["_schemaURL"],
        JobDependenciesRunFacet::SCHEMA_URI
    );
}

#[test]
fn missing_envelope_uses_defaults() {
    let facet: JobDependenciesRunFacet =
        serde_json::from_value(json!({ "triggerRule": "ALL_DONE" })).unwrap();
    assert_eq!(facet.base().producer(), DEFAULT_PRODUCER);
    assert_eq!(facet.base().schema_url(), JobDependenciesRunFacet::SCHEMA_URI);
    assert_eq!(facet.trigger_rule(), Some("ALL_DONE"));

    let facet: JobDependenciesRunFacet =
        serde_json::from_value(json!({ "_producer": null })).unwrap();
    assert_eq!(facet, JobDependenciesRunFacet::default());
}
