//! `patternProperties` — subschemas applied to every instance member whose
//! name matches a regex key.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use regex::Regex;
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
    let mut patterns = Vec::with_capacity(map.len());
    for (pattern, subschema) in map {
        let regex = Regex::new(pattern)?;
        let evaluator = compiler.compile_schema(subschema, uri, &[])?;
        patterns.push((regex, evaluator));
    }
    Ok(eval_fn(move |instance| {
        let object = match instance.as_object() {
            Some(object) => object,
            None => return true,
        };
        patterns.iter().all(|(regex, evaluator)| {
            object
                .iter()
                .filter(|(key, _)| regex.is_match(key))
                .all(|(_, member)| evaluator.evaluate(member))
        })
    }))
}
