//! # data-api-utils
//!
//! Shared helpers for JSON data API endpoints: validating a record's fields
//! against a collection's declared schema, and generating short random
//! identifiers for newly created records.
//!
//! Both entry points are stateless and total — [`validate_fields`] degrades
//! gracefully on malformed schema data instead of failing, and
//! [`generate_id`] always returns a well-formed token. The only side effect
//! is a `tracing` warning (target `data_api`) when unknown fields are found.
//!
//! ```
//! use data_api_utils::{generate_id, validate_fields};
//! use serde_json::json;
//!
//! let collection = json!({ "schema": [{ "name": "title" }] });
//! let fields = json!({ "id": generate_id(), "title": "hello", "extra": 1 });
//!
//! let result = validate_fields(Some(&collection), fields.as_object().unwrap());
//! assert_eq!(result.unknown_fields, vec!["extra"]);
//! ```

pub mod id;
pub mod validation;

pub use id::{generate_id, generate_id_with, ID_LENGTH};
pub use validation::{validate_fields, FieldValidation, SYSTEM_FIELDS};
