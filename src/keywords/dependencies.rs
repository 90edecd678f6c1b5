//! `dependencies` — per-key triggers for either a property-required list or a
//! subschema applied to the whole instance.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use serde_json::{Map, Value};
use url::Url;

enum Dependency {
    Required(Vec<String>),
    Schema(EvalRef),
}

pub(crate) fn compile(
    value: &Value,
    _schema: &Map<String, Value>,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    if !ref_list.is_empty() {
        return super::step_into_map(value, uri, compiler, ref_list);
    }
    let map = value
        .as_object()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    let mut dependencies = Vec::with_capacity(map.len());
    for (key, subschema) in map {
        let dependency = match subschema {
            Value::Array(_) => Dependency::Required(super::required::names(subschema)?),
            _ => Dependency::Schema(compiler.compile_schema(subschema, uri, &[])?),
        };
        dependencies.push((key.clone(), dependency));
    }
    Ok(eval_fn(move |instance| {
        let object = match instance.as_object() {
            Some(object) => object,
            None => return true,
        };
        dependencies
            .iter()
            .filter(|(trigger, _)| object.contains_key(trigger))
            .all(|(_, dependency)| match dependency {
                Dependency::Required(names) => names.iter().all(|name| object.contains_key(name)),
                Dependency::Schema(evaluator) => evaluator.evaluate(instance),
            })
    }))
}
