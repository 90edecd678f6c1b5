//! `if`/`then`/`else` — conditional application of a subschema depending on
//! whether the instance validates against `if`.
use crate::compiler::{constant, eval_fn, Compiler, EvalRef};
use crate::error::JsonSchemaError;
use serde_json::{Map, Value};
use url::Url;

pub(crate) fn compile(
    value: &Value,
    schema: &Map<String, Value>,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    if !ref_list.is_empty() {
        return super::redispatch(value, uri, compiler, ref_list);
    }
    let condition = compiler.compile_schema(value, uri, &[])?;
    let then_branch = schema
        .get("then")
        .map(|s| compiler.compile_schema(s, uri, &[]))
        .transpose()?
        .unwrap_or_else(|| constant(true));
    let else_branch = schema
        .get("else")
        .map(|s| compiler.compile_schema(s, uri, &[]))
        .transpose()?
        .unwrap_or_else(|| constant(true));
    Ok(eval_fn(move |instance| {
        if condition.evaluate(instance) {
            then_branch.evaluate(instance)
        } else {
            else_branch.evaluate(instance)
        }
    }))
}
