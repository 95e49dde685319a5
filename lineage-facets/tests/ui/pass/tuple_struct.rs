use lineage_facets::{check_definition, Redactable, REDACTED_PLACEHOLDER};

#[derive(Clone, Redactable)]
#[redact(skip_redact(0))]
struct Pair(String, String);

fn main() {
    assert_eq!(Pair::FIELDS, ["0", "1"]);
    assert!(check_definition::<Pair>().is_ok());

    let redacted = Pair("id".to_string(), "token".to_string()).redact();
    assert_eq!(redacted.0, "id");
    assert_eq!(redacted.1, REDACTED_PLACEHOLDER);
    assert_eq!(format!("{redacted:?}"), "Pair(\"id\", \"[REDACTED]\")");
}
