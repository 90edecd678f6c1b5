//! `minimum` — the instance must be greater than or equal to a fixed bound.
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
    Ok(eval_fn(move |instance| limit.instance_ge(instance)))
}

#[cfg(test)]
mod tests {
    use crate::options::CompileOptions;
    use serde_json::json;

    #[test]
    fn rejects_values_below_the_limit() {
        let compiled = CompileOptions::new().compile(&json!({"minimum": 5})).unwrap();
        assert!(compiled.is_valid(&json!(5)));
        assert!(!compiled.is_valid(&json!(4)));
    }

    #[test]
    fn large_i64_precision_is_preserved() {
        let limit = 1i64 << 54;
        let compiled = CompileOptions::new()
            .compile(&json!({"minimum": limit}))
            .unwrap();
        assert!(!compiled.is_valid(&json!(limit - 1)));
    }
}
