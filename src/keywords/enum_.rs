//! `enum` — the instance must equal one of a fixed list of values.
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
    let options: Vec<Value> = value
        .as_array()
        .cloned()
        .unwrap_or_else(|| vec![value.clone()]);
    Ok(eval_fn(move |instance| {
        options.iter().any(|option| super::json_equal(instance, option))
    }))
}
