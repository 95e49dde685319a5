//! Redaction policies, traversal, and entrypoints.
//!
//! - **`policy`**: how text is redacted (`TextRedactionPolicy`)
//! - **`redact`**: the mapper that applies a policy to leaves, and the entrypoints
//! - **`walk`**: structural traversal (`Walk`) for std types
//! - **`redactable`**: the per-type capability (`Redactable`) and its definition check

mod policy;
mod redact;
mod redactable;
mod walk;

pub use policy::{KeepConfig, TextRedactionPolicy, REDACTED_PLACEHOLDER};
pub use redact::{redact, redact_with_policy, PolicyMapper, RedactionMapper, ScalarRedaction};
pub use redactable::{check_definition, Redactable};
pub use walk::Walk;
