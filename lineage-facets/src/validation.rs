//! Field validators run by constructors.
//!
//! A validator takes the wire name of the field and the candidate value and
//! either accepts it or returns a [`ValidationError`]. Constructors call their
//! validators before building the value, so construction is all-or-nothing.

use uuid::Uuid;

use crate::ValidationError;

/// Accepts any textual UUID form: hyphenated, simple, braced or `urn:uuid:`.
///
/// Only the format is checked; any version and variant is accepted. The value
/// is not normalised, callers keep their original string.
pub fn uuid(field: &'static str, value: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(value)
        .map(|_| ())
        .map_err(|err| ValidationError::new(field, value, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::uuid;

    #[test]
    fn accepts_standard_forms() {
        for value in [
            "123e4567-e89b-12d3-a456-426614174000",
            "123E4567-E89B-12D3-A456-426614174000",
            "123e4567e89b12d3a456426614174000",
            "{123e4567-e89b-12d3-a456-426614174000}",
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            "00000000-0000-0000-0000-000000000000",
        ] {
            assert!(uuid("runId", value).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_values() {
        for value in [
            "",
            "not-a-uuid",
            "123e4567-e89b-12d3-a456-42661417400",
            "123e4567-e89b-12d3-a456-4266141740000",
            "g23e4567-e89b-12d3-a456-426614174000",
            " 123e4567-e89b-12d3-a456-426614174000",
        ] {
            let err = uuid("runId", value).unwrap_err();
            assert_eq!(err.field(), "runId");
            assert_eq!(err.value(), value);
        }
    }
}
