use lineage_facets::Redactable;

#[derive(Clone, Redactable)]
#[redact(skip_redact(r#type))]
struct Field {
    r#type: String,
    description: String,
}

fn main() {
    assert_eq!(Field::SKIP_REDACT, ["type"]);
    let field = Field {
        r#type: "VARCHAR".to_string(),
        description: "internal notes".to_string(),
    }
    .redact();
    assert_eq!(field.r#type, "VARCHAR");
    assert_eq!(field.description, "[REDACTED]");
}
