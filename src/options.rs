//! Fluent configuration surface for schema compilation.
use crate::{
    compiler::{compile_root, Validator},
    keywords::{default_registry, KeywordMap},
    meta,
    error::JsonSchemaError,
};
use serde_json::Value;
use std::collections::HashMap;

/// Configuration for compiling a schema into a [`Validator`].
///
/// Using a `CompileOptions` instance you can register remote schemas, skip
/// meta-schema validation, or swap in an extended keyword registry.
pub struct CompileOptions {
    keyword_map: KeywordMap,
    remote_schemas: HashMap<String, Value>,
    check_schema: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            keyword_map: default_registry(),
            remote_schemas: HashMap::new(),
            check_schema: true,
        }
    }
}

impl CompileOptions {
    /// Options with the default Draft-07 keyword registry, no remote
    /// schemas, and meta-schema checking turned on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn meta-schema validation of the input schema on or off. On by
    /// default; turning it off allows compiling schemas this core does not
    /// itself consider valid draft-07 (e.g. during testing of edge cases).
    pub fn with_check_schema(&mut self, check_schema: bool) -> &mut Self {
        self.check_schema = check_schema;
        self
    }

    /// Register a schema reachable by `$ref` under the given absolute URI.
    /// The compiler never performs network I/O; callers must supply every
    /// externally referenced schema this way.
    pub fn with_remote_schema(&mut self, uri: &str, schema: Value) -> &mut Self {
        self.remote_schemas.insert(uri.to_string(), schema);
        self
    }

    /// Register several remote schemas at once.
    pub fn with_remote_schemas<I>(&mut self, schemas: I) -> &mut Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.remote_schemas.extend(schemas);
        self
    }

    /// Replace the active keyword registry, e.g. to add a custom keyword or
    /// drop a Draft-07 one. Starts from [`default_registry`] unless the
    /// caller replaces it wholesale.
    pub fn with_keyword_map(&mut self, keyword_map: KeywordMap) -> &mut Self {
        self.keyword_map = keyword_map;
        self
    }

    /// Compile `schema` into a [`Validator`] using the configured options.
    pub fn compile(&self, schema: &Value) -> Result<Validator, JsonSchemaError> {
        if self.check_schema && !meta::validator().is_valid(schema) {
            return Err(crate::error::InvalidSchemaError::FailsMetaValidation.into());
        }
        compile_root(schema, &self.keyword_map, &self.remote_schemas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_validate_the_schema() {
        // draft-07 requires multipleOf to be strictly positive.
        let result = CompileOptions::new().compile(&json!({"multipleOf": 0}));
        assert!(result.is_err());
    }

    #[test]
    fn check_schema_can_be_disabled() {
        let compiled = CompileOptions::new()
            .with_check_schema(false)
            .compile(&json!({"multipleOf": 0}))
            .unwrap();
        assert!(compiled.is_valid(&json!("x")));
    }

    #[test]
    fn remote_schemas_are_resolvable_by_ref() {
        let compiled = CompileOptions::new()
            .with_remote_schema("https://example.com/positive.json", json!({"minimum": 0}))
            .compile(&json!({"$ref": "https://example.com/positive.json"}))
            .unwrap();
        assert!(compiled.is_valid(&json!(1)));
        assert!(!compiled.is_valid(&json!(-1)));
    }
}
