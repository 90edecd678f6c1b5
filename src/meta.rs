//! The packaged draft-07 meta-schema and a validator compiled over it.
//!
//! [`validator`] is used by [`crate::options::CompileOptions::compile`] to
//! pre-check user schemas when `check_schema` is on. It is itself compiled
//! with meta-validation turned off, or every process would recurse forever
//! compiling the thing that checks compilation.
use crate::compiler::{compile_root, Validator};
use crate::keywords::default_registry;
use lazy_static::lazy_static;
use serde_json::Value;
use std::collections::HashMap;

const DRAFT7_JSON: &str = include_str!("../meta_schemas/draft7.json");

lazy_static! {
    static ref DRAFT7: Value =
        serde_json::from_str(DRAFT7_JSON).expect("packaged meta-schema is valid JSON");
    static ref META_VALIDATOR: Validator =
        compile_root(&DRAFT7, &default_registry(), &HashMap::new())
            .expect("packaged meta-schema must compile against itself");
}

/// The compiled draft-07 meta-schema validator.
pub(crate) fn validator() -> &'static Validator {
    &META_VALIDATOR
}

/// The packaged draft-07 meta-schema document, keyed in `schema_by_uri` under
/// its own `$id` so a `$ref` to `http://json-schema.org/draft-07/schema`
/// always resolves without the caller needing to supply it as a remote
/// schema.
pub(crate) fn schema() -> &'static Value {
    &DRAFT7
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meta_schema_validates_itself() {
        assert!(validator().is_valid(&DRAFT7));
    }

    #[test]
    fn meta_schema_accepts_an_ordinary_schema() {
        assert!(validator().is_valid(&json!({"type": "string", "minLength": 1})));
    }

    #[test]
    fn meta_schema_rejects_a_negative_min_items() {
        assert!(!validator().is_valid(&json!({"minItems": -1})));
    }

    #[test]
    fn meta_schema_rejects_a_non_object_non_boolean_schema() {
        assert!(!validator().is_valid(&json!([1, 2, 3])));
    }
}
