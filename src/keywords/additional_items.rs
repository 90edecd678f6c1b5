//! `additionalItems` — a subschema applied to array elements beyond those
//! covered by a tuple-form `items`. A no-op unless `items` is itself an array.
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
    let items_count = match schema.get("items") {
        Some(Value::Array(items)) => items.len(),
        _ => return Ok(constant(true)),
    };
    if let Value::Bool(allowed) = value {
        return Ok(constant(*allowed));
    }
    let element = compiler.compile_schema(value, uri, &[])?;
    Ok(eval_fn(move |instance| {
        instance.as_array().map_or(true, |items| {
            items
                .iter()
                .skip(items_count)
                .all(|item| element.evaluate(item))
        })
    }))
}

#[cfg(test)]
mod tests {
    use crate::options::CompileOptions;
    use serde_json::json;

    #[test]
    fn no_op_without_tuple_form_items() {
        let compiled = CompileOptions::new()
            .compile(&json!({"items": {"type": "integer"}, "additionalItems": false}))
            .unwrap();
        assert!(compiled.is_valid(&json!([1, 2, 3])));
    }

    #[test]
    fn false_rejects_any_extra_element() {
        let compiled = CompileOptions::new()
            .compile(&json!({"items": [{"type": "integer"}], "additionalItems": false}))
            .unwrap();
        assert!(compiled.is_valid(&json!([1])));
        assert!(!compiled.is_valid(&json!([1, 2])));
    }

    #[test]
    fn schema_form_constrains_extra_elements() {
        let compiled = CompileOptions::new()
            .compile(&json!({"items": [{"type": "integer"}], "additionalItems": {"type": "string"}}))
            .unwrap();
        assert!(compiled.is_valid(&json!([1, "x", "y"])));
        assert!(!compiled.is_valid(&json!([1, 2])));
    }
}
