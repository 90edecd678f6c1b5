//! `additionalProperties` — a subschema (or a boolean gate) applied to
//! instance members not covered by sibling `properties` or
//! `patternProperties` keys.
use crate::compiler::{constant, eval_fn, Compiler, EvalRef};
use crate::error::JsonSchemaError;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use url::Url;

pub(crate) fn compile(
    value: &Value,
    schema: &Map<String, Value>,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    if !ref_list.is_empty() {
        return super::redispatch(value, uri, compiler, ref_list);
    }
    let named: BTreeSet<String> = schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();
    let patterns: Vec<Regex> = match schema.get("patternProperties").and_then(Value::as_object) {
        Some(map) => map.keys().map(|p| Regex::new(p)).collect::<Result<_, _>>()?,
        None => Vec::new(),
    };

    let is_covered = move |key: &str| named.contains(key) || patterns.iter().any(|p| p.is_match(key));

    if let Value::Bool(allowed) = value {
        if *allowed {
            return Ok(constant(true));
        }
        return Ok(eval_fn(move |instance| {
            instance
                .as_object()
                .map_or(true, |object| object.keys().all(|key| is_covered(key)))
        }));
    }

    let evaluator = compiler.compile_schema(value, uri, &[])?;
    Ok(eval_fn(move |instance| {
        instance.as_object().map_or(true, |object| {
            object
                .iter()
                .filter(|(key, _)| !is_covered(key))
                .all(|(_, member)| evaluator.evaluate(member))
        })
    }))
}

#[cfg(test)]
mod tests {
    use crate::options::CompileOptions;
    use serde_json::json;

    #[test]
    fn false_rejects_unlisted_properties() {
        let compiled = CompileOptions::new()
            .compile(&json!({"properties": {"a": true}, "additionalProperties": false}))
            .unwrap();
        assert!(compiled.is_valid(&json!({"a": 1})));
        assert!(!compiled.is_valid(&json!({"a": 1, "b": 2})));
    }

    #[test]
    fn pattern_properties_exempt_keys_from_additional_properties() {
        let compiled = CompileOptions::new()
            .compile(&json!({
                "patternProperties": {"^x_": {}},
                "additionalProperties": false
            }))
            .unwrap();
        assert!(compiled.is_valid(&json!({"x_a": 1})));
        assert!(!compiled.is_valid(&json!({"other": 1})));
    }

    #[test]
    fn schema_form_constrains_unlisted_properties() {
        let compiled = CompileOptions::new()
            .compile(&json!({
                "properties": {"a": true},
                "additionalProperties": {"type": "string"}
            }))
            .unwrap();
        assert!(compiled.is_valid(&json!({"a": 1, "b": "x"})));
        assert!(!compiled.is_valid(&json!({"a": 1, "b": 2})));
    }
}
