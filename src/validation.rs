//! Field validation against a collection's declared schema.
//!
//! Checks a record's field names against the field descriptors declared in
//! `collection.schema` and reports the names found in neither the schema nor
//! the system-field allow-list. Malformed or absent schema data degrades to
//! "no fields recognized" — this module never fails.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Field names that are always permitted, regardless of schema content.
pub const SYSTEM_FIELDS: &[&str] = &["id"];

/// Result of validating a record's fields against a collection schema.
///
/// Both vectors are always present. `warnings` holds at most one entry: the
/// joined human-readable message for all unknown fields found in this call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    /// Field names present in the input but absent from both the schema and
    /// [`SYSTEM_FIELDS`], in input key order.
    pub unknown_fields: Vec<String>,
    /// Human-readable warnings; empty when every field was recognized.
    pub warnings: Vec<String>,
}

/// Validate `fields` against the schema declared on `collection`.
///
/// 1. Collects recognized names from `collection["schema"]` — each array
///    element contributes its string `"name"` member. A missing collection,
///    a missing or non-array `schema`, or a descriptor without a string
///    `name` contributes nothing rather than erroring.
/// 2. Every key of `fields` that is neither a system field nor a recognized
///    schema field is appended to `unknown_fields`.
/// 3. A non-empty result produces a single warning string and emits the same
///    message once at `warn` level under the `data_api` target.
pub fn validate_fields(
    collection: Option<&Value>,
    fields: &Map<String, Value>,
) -> FieldValidation {
    let schema_fields = schema_field_names(collection);

    let unknown_fields: Vec<String> = fields
        .keys()
        .filter(|key| !SYSTEM_FIELDS.contains(&key.as_str()))
        .filter(|key| !schema_fields.contains(key.as_str()))
        .cloned()
        .collect();

    let mut warnings = Vec::new();
    if !unknown_fields.is_empty() {
        let msg = format!(
            "Unknown field(s) not in schema: {}",
            unknown_fields.join(", ")
        );
        warn!(target: "data_api", "[Data API] {msg}");
        warnings.push(msg);
    }

    FieldValidation {
        unknown_fields,
        warnings,
    }
}

/// Extract the set of declared field names from a collection value.
///
/// Lenient by contract: anything that is not an array of objects carrying a
/// string `"name"` simply yields fewer (or no) recognized names.
fn schema_field_names(collection: Option<&Value>) -> HashSet<&str> {
    collection
        .and_then(|c| c.get("schema"))
        .and_then(Value::as_array)
        .map(|descriptors| {
            descriptors
                .iter()
                .filter_map(|d| d.get("name"))
                .filter_map(Value::as_str)
                .collect()
        })
        .unwrap_or_default()
}

// ===========================================================================
// Tests
// ===========================================================================
