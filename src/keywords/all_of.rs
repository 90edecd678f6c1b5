//! `allOf` — the instance must validate against every listed subschema.
use crate::compiler::{conjunction, Compiler, EvalRef};
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
        return super::step_into_array(value, uri, compiler, ref_list);
    }
    let items = value
        .as_array()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    let mut evaluators = Vec::with_capacity(items.len());
    for item in items {
        evaluators.push(compiler.compile_schema(item, uri, &[])?);
    }
    Ok(conjunction(evaluators))
}
