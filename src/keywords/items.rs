//! `items` — per-index subschemas (array form) or a single subschema applied
//! to every element (schema form).
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::JsonSchemaError;
use serde_json::{Map, Value};
use url::Url;

pub(crate) fn compile(
    value: &Value,
    _schema: &Map<String, Value>,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    match value {
        Value::Array(schemas) => {
            if !ref_list.is_empty() {
                return super::step_into_array(value, uri, compiler, ref_list);
            }
            let mut per_index = Vec::with_capacity(schemas.len());
            for schema in schemas {
                per_index.push(compiler.compile_schema(schema, uri, &[])?);
            }
            Ok(eval_fn(move |instance| {
                instance.as_array().map_or(true, |items| {
                    items
                        .iter()
                        .zip(per_index.iter())
                        .all(|(item, evaluator)| evaluator.evaluate(item))
                })
            }))
        }
        _ => {
            if !ref_list.is_empty() {
                return super::redispatch(value, uri, compiler, ref_list);
            }
            let element = compiler.compile_schema(value, uri, &[])?;
            Ok(eval_fn(move |instance| {
                instance
                    .as_array()
                    .map_or(true, |items| items.iter().all(|item| element.evaluate(item)))
            }))
        }
    }
}
