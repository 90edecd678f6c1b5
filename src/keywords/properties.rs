//! `properties` — per-key subschemas applied to matching instance members.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use serde_json::{Map, Value};
use url::Url;

pub(crate) fn compile(
    value: &Value,
    _schema: &Map<String, Value>,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    if !ref_list.is_empty() {
        return super::step_into_map(value, uri, compiler, ref_list);
    }
    let map = value
        .as_object()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    let mut entries = Vec::with_capacity(map.len());
    for (key, subschema) in map {
        entries.push((key.clone(), compiler.compile_schema(subschema, uri, &[])?));
    }
    Ok(eval_fn(move |instance| {
        let object = match instance.as_object() {
            Some(object) => object,
            None => return true,
        };
        entries.iter().all(|(key, evaluator)| {
            object
                .get(key)
                .map_or(true, |member| evaluator.evaluate(member))
        })
    }))
}

#[cfg(test)]
mod tests {
    use crate::options::CompileOptions;
    use serde_json::json;

    #[test]
    fn checks_matching_properties_only() {
        let compiled = CompileOptions::new()
            .compile(&json!({"properties": {"age": {"type": "integer"}}}))
            .unwrap();
        assert!(compiled.is_valid(&json!({"age": 5, "name": "x"})));
        assert!(!compiled.is_valid(&json!({"age": "old"})));
    }

    #[test]
    fn absent_property_is_vacuously_valid() {
        let compiled = CompileOptions::new()
            .compile(&json!({"properties": {"age": {"type": "integer"}}}))
            .unwrap();
        assert!(compiled.is_valid(&json!({})));
    }
}
