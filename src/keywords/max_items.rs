//! `maxItems` — the instance array must not have more than a bound of elements.
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
        return super::redispatch(value, uri, compiler, ref_list);
    }
    let limit = value.as_u64().ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    Ok(eval_fn(move |instance| {
        instance.as_array().map_or(true, |items| items.len() as u64 <= limit)
    }))
}
