//! `multipleOf` — the instance, divided by a fixed factor, must be an integer.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use serde_json::{Map, Value};
use url::Url;

const EPSILON: f64 = f64::EPSILON;

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
    let factor = value
        .as_f64()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    Ok(eval_fn(move |instance| {
        let instance_value = match instance.as_f64() {
            Some(n) => n,
            None => return true,
        };
        if instance_value.fract() == 0.0 && factor.fract() == 0.0 {
            (instance_value % factor) == 0.0
        } else {
            let remainder = (instance_value / factor) % 1.0;
            remainder < EPSILON && remainder < (1.0 - EPSILON)
        }
    }))
}
