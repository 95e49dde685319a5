use lineage_facets::Redactable;

#[derive(Clone, PartialEq, Redactable)]
struct Empty;

fn main() {
    assert!(Empty::FIELDS.is_empty());
    assert!(Empty.redact() == Empty);
    assert_eq!(format!("{Empty:?}"), "Empty");
}
