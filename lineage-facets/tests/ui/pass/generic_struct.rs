use std::marker::PhantomData;

use lineage_facets::{Redactable, REDACTED_PLACEHOLDER};

struct Marker;

#[derive(Clone, Redactable)]
#[redact(skip_redact(key))]
struct Tagged<T, K> {
    key: String,
    value: T,
    kind: PhantomData<K>,
}

fn main() {
    let tagged: Tagged<Vec<String>, Marker> = Tagged {
        key: "k".to_string(),
        value: vec!["secret".to_string()],
        kind: PhantomData,
    };
    let redacted = tagged.redact();
    assert_eq!(redacted.key, "k");
    assert_eq!(redacted.value, vec![REDACTED_PLACEHOLDER.to_string()]);
}
