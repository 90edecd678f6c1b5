//! # jsonschema_core
//!
//! A JSON Schema Draft-07 compiler and boolean validator. Schemas are
//! compiled once into a tree of evaluator closures, after which evaluating
//! an instance is a single synchronous tree walk with no further parsing or
//! allocation-heavy dispatch.
//!
//! Supports:
//!   - JSON Schema draft-07 (core applicator, validation and `$ref`/`$id`
//!     resolution keywords);
//!   - Verdicts only — no detailed error paths, no `format` assertions, no
//!     network I/O. Remote schemas are supplied by the caller.
//!
//! ## Example
//!
//! ```rust
//! use jsonschema_core::CompileOptions;
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! let instance = json!("foo");
//! let compiled = CompileOptions::new().compile(&schema).unwrap();
//! assert!(compiled.is_valid(&instance));
//! ```
#![warn(
    clippy::doc_markdown,
    clippy::redundant_closure,
    clippy::explicit_iter_loop,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::trivially_copy_pass_by_ref,
    clippy::needless_pass_by_value,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    variant_size_differences
)]
mod compiler;
mod error;
mod keywords;
mod meta;
mod options;
mod pointer;
mod uri;
mod value_type;

pub use compiler::Validator;
pub use error::{InvalidInstanceError, InvalidSchemaError, JsonSchemaError};
pub use options::CompileOptions;

use serde_json::Value;

/// Compile `schema` with the default options (meta-schema checking on, no
/// remote schemas, the Draft-07 keyword registry).
pub fn compile(schema: &Value) -> Result<Validator, JsonSchemaError> {
    CompileOptions::new().compile(schema)
}

/// A shortcut for validating `instance` against `schema` with default
/// options.
///
/// ```rust
/// use jsonschema_core::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if `schema` fails to compile.
#[must_use]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let compiled = compile(schema).expect("invalid schema");
    compiled.is_valid(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        assert!(is_valid(&schema, &json!("foobar")));
        assert!(!is_valid(&schema, &json!("foo")));
    }

    #[test]
    fn test_compile_returns_a_reusable_validator() {
        let schema = json!({"type": "integer", "minimum": 0});
        let compiled = compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!(1)));
        assert!(!compiled.is_valid(&json!(-1)));
        assert!(!compiled.is_valid(&json!(1.5)));
    }
}
