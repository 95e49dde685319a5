use std::fmt;

use lineage_facets::Redactable;

#[derive(Redactable)]
#[redact(skip_debug)]
struct Credentials {
    user: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials { .. }")
    }
}

fn main() {
    let creds = Credentials {
        user: "u".to_string(),
        password: "p".to_string(),
    };
    assert_eq!(format!("{creds:?}"), "Credentials { .. }");
    let redacted = creds.redact();
    assert_eq!(redacted.user, "[REDACTED]");
    assert_eq!(redacted.password, "[REDACTED]");
}
