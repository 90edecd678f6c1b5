//! `required` — the instance object must have every named member.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use serde_json::{Map, Value};
use url::Url;

/// Parses the `required` value shape; reused by `dependencies`, whose
/// array-valued entries carry the same semantics.
pub(crate) fn names(value: &Value) -> Result<Vec<String>, JsonSchemaError> {
    let items = value
        .as_array()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| InvalidSchemaError::NotAnObjectOrBoolean.into())
        })
        .collect()
}

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
    let required = names(value)?;
    Ok(eval_fn(move |instance| {
        instance.as_object().map_or(true, |object| {
            required.iter().all(|name| object.contains_key(name))
        })
    }))
}
