//! `exclusiveMinimum` — the instance must be strictly greater than a fixed bound.
use super::NumericLimit;
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
    let limit = NumericLimit::from_value(value).ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    Ok(eval_fn(move |instance| limit.instance_gt(instance)))
}

#[cfg(test)]
mod tests {
    use crate::options::CompileOptions;
    use serde_json::json;

    #[test]
    fn boundary_value_is_rejected() {
        let compiled = CompileOptions::new()
            .compile(&json!({"exclusiveMinimum": 5}))
            .unwrap();
        assert!(!compiled.is_valid(&json!(5)));
        assert!(compiled.is_valid(&json!(6)));
    }
}
