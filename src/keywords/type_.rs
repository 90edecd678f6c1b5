//! `type` — the instance must match one of the named simple types.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use crate::value_type::{type_matches, JsonType};
use serde_json::{Map, Value};
use std::convert::TryFrom;
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
    let names: Vec<&str> = match value {
        Value::String(name) => vec![name.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => return Err(InvalidSchemaError::NotAnObjectOrBoolean.into()),
    };
    let types: Vec<JsonType> = names
        .into_iter()
        .map(|name| {
            JsonType::try_from(name)
                .map_err(|_| JsonSchemaError::from(InvalidSchemaError::UnknownTypeName(name.to_string())))
        })
        .collect::<Result<_, JsonSchemaError>>()?;
    Ok(eval_fn(move |instance| {
        types.iter().any(|ty| type_matches(*ty, instance))
    }))
}
