//! `uniqueItems` — no two elements of the instance may be equal.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::JsonSchemaError;
use serde_json::{Map, Value};
use std::{
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
};
use url::Url;

/// Wraps a `&Value` so it can live in a `HashSet` with the same "numbers
/// compare by mathematical value" semantics as [`super::json_equal`].
struct HashedValue<'a>(&'a Value);

impl PartialEq for HashedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        super::json_equal(self.0, other.0)
    }
}

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473),
            Value::Bool(item) => item.hash(state),
            Value::Number(item) => {
                // normalized through f64 so `1` and `1.0` hash identically
                item.as_f64().unwrap_or(f64::NAN).to_bits().hash(state);
            }
            Value::String(item) => item.hash(state),
            Value::Array(items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(items) => {
                let mut hash = 0;
                for (key, value) in items {
                    let mut item_hasher = DefaultHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

pub(crate) fn is_unique(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(HashedValue).all(move |item| seen.insert(item))
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
    if value != &Value::Bool(true) {
        return Ok(crate::compiler::constant(true));
    }
    Ok(eval_fn(|instance| {
        instance.as_array().map_or(true, |items| is_unique(items))
    }))
}
