//! `contains` — at least one array element must validate against a subschema.
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
    if !ref_list.is_empty() {
        return super::redispatch(value, uri, compiler, ref_list);
    }
    let element = compiler.compile_schema(value, uri, &[])?;
    Ok(eval_fn(move |instance| {
        instance
            .as_array()
            .map_or(true, |items| items.iter().any(|item| element.evaluate(item)))
    }))
}
