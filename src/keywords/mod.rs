//! The Draft-07 keyword registry and the two R2 pointer-descent helpers.
mod additional_items;
mod additional_properties;
mod all_of;
mod any_of;
mod const_;
mod contains;
mod definitions;
mod dependencies;
mod enum_;
mod exclusive_maximum;
mod exclusive_minimum;
mod if_;
mod items;
mod max_items;
mod max_length;
mod max_properties;
mod maximum;
mod min_items;
mod min_length;
mod min_properties;
mod minimum;
mod multiple_of;
mod not;
mod one_of;
mod pattern;
mod pattern_properties;
mod properties;
mod property_names;
mod required;
mod type_;
mod unique_items;

use crate::{
    compiler::{Compiler, EvalRef},
    error::{InvalidSchemaError, JsonSchemaError},
    value_type::JsonType,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use url::Url;

/// Signature shared by every keyword compiler.
///
/// `value` is the keyword's own sub-document, `schema` is the enclosing
/// schema object (needed by keywords that read sibling keys, e.g.
/// `additionalItems` reads `items`), `uri` is the current base scope,
/// `compiler` is the recursive driver, and `ref_list` is the residual JSON
/// Pointer tokens to descend through when this keyword is the terminus of a
/// `$ref`'s fragment.
pub(crate) type KeywordCompileFn = fn(
    value: &Value,
    schema: &Map<String, Value>,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError>;

/// A keyword's compiler together with the instance types it applies to.
/// `target_types = None` means the keyword applies regardless of instance
/// type (e.g. `enum`, `const`, `allOf`).
pub(crate) struct KeywordSpec {
    pub(crate) target_types: Option<&'static [JsonType]>,
    pub(crate) compile: KeywordCompileFn,
}

pub(crate) type KeywordMap = HashMap<&'static str, KeywordSpec>;

macro_rules! spec {
    ($types:expr, $f:path) => {
        KeywordSpec {
            target_types: $types,
            compile: $f,
        }
    };
}

/// The Draft-07 keyword registry used by default compilation.
pub(crate) fn default_registry() -> KeywordMap {
    use JsonType::*;
    let mut m: KeywordMap = HashMap::new();
    m.insert("type", spec!(None, type_::compile));
    m.insert("enum", spec!(None, enum_::compile));
    m.insert("const", spec!(None, const_::compile));
    m.insert("multipleOf", spec!(Some(&[Integer, Number]), multiple_of::compile));
    m.insert("maximum", spec!(Some(&[Integer, Number]), maximum::compile));
    m.insert("minimum", spec!(Some(&[Integer, Number]), minimum::compile));
    m.insert(
        "exclusiveMaximum",
        spec!(Some(&[Integer, Number]), exclusive_maximum::compile),
    );
    m.insert(
        "exclusiveMinimum",
        spec!(Some(&[Integer, Number]), exclusive_minimum::compile),
    );
    m.insert("maxLength", spec!(Some(&[String]), max_length::compile));
    m.insert("minLength", spec!(Some(&[String]), min_length::compile));
    m.insert("pattern", spec!(Some(&[String]), pattern::compile));
    m.insert("items", spec!(Some(&[Array]), items::compile));
    m.insert(
        "additionalItems",
        spec!(Some(&[Array]), additional_items::compile),
    );
    m.insert("maxItems", spec!(Some(&[Array]), max_items::compile));
    m.insert("minItems", spec!(Some(&[Array]), min_items::compile));
    m.insert("uniqueItems", spec!(Some(&[Array]), unique_items::compile));
    m.insert("contains", spec!(Some(&[Array]), contains::compile));
    m.insert(
        "maxProperties",
        spec!(Some(&[Object]), max_properties::compile),
    );
    m.insert(
        "minProperties",
        spec!(Some(&[Object]), min_properties::compile),
    );
    m.insert("required", spec!(Some(&[Object]), required::compile));
    m.insert("properties", spec!(Some(&[Object]), properties::compile));
    m.insert(
        "patternProperties",
        spec!(Some(&[Object]), pattern_properties::compile),
    );
    m.insert(
        "additionalProperties",
        spec!(Some(&[Object]), additional_properties::compile),
    );
    m.insert("dependencies", spec!(Some(&[Object]), dependencies::compile));
    m.insert(
        "propertyNames",
        spec!(Some(&[Object]), property_names::compile),
    );
    m.insert("if", spec!(None, if_::compile));
    m.insert("allOf", spec!(None, all_of::compile));
    m.insert("anyOf", spec!(None, any_of::compile));
    m.insert("oneOf", spec!(None, one_of::compile));
    m.insert("not", spec!(None, not::compile));
    m.insert("definitions", spec!(None, definitions::compile));
    m
}

/// A schema-side numeric limit, kept in its original representation so
/// `num_cmp::NumCmp` can compare it against an instance without any lossy
/// cast through `f64` (values beyond 2^53 would otherwise lose precision).
#[derive(Clone, Copy)]
pub(crate) enum NumericLimit {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl NumericLimit {
    pub(crate) fn from_value(value: &Value) -> Option<NumericLimit> {
        let number = value.as_number_maybe()?;
        if let Some(n) = number.as_u64() {
            Some(NumericLimit::U64(n))
        } else if let Some(n) = number.as_i64() {
            Some(NumericLimit::I64(n))
        } else {
            number.as_f64().map(NumericLimit::F64)
        }
    }

    pub(crate) fn instance_le(&self, instance: &Value) -> bool {
        self.relate(instance, NumCmpOp::Le)
    }

    pub(crate) fn instance_lt(&self, instance: &Value) -> bool {
        self.relate(instance, NumCmpOp::Lt)
    }

    pub(crate) fn instance_ge(&self, instance: &Value) -> bool {
        self.relate(instance, NumCmpOp::Ge)
    }

    pub(crate) fn instance_gt(&self, instance: &Value) -> bool {
        self.relate(instance, NumCmpOp::Gt)
    }

    /// Is `instance <op> self` true, dispatched over both sides' native
    /// representation so neither is lossily cast through `f64`?
    fn relate(&self, instance: &Value, op: NumCmpOp) -> bool {
        use num_cmp::NumCmp;
        macro_rules! rel {
            ($i:expr) => {
                match self {
                    NumericLimit::U64(l) => op.apply($i, *l),
                    NumericLimit::I64(l) => op.apply($i, *l),
                    NumericLimit::F64(l) => op.apply($i, *l),
                }
            };
        }
        if let Some(i) = instance.as_u64() {
            rel!(i)
        } else if let Some(i) = instance.as_i64() {
            rel!(i)
        } else if let Some(i) = instance.as_f64() {
            rel!(i)
        } else {
            true
        }
    }
}

#[derive(Clone, Copy)]
enum NumCmpOp {
    Le,
    Lt,
    Ge,
    Gt,
}

impl NumCmpOp {
    fn apply<A, B>(self, a: A, b: B) -> bool
    where
        A: num_cmp::NumCmp<B>,
    {
        match self {
            NumCmpOp::Le => num_cmp::NumCmp::num_le(a, b),
            NumCmpOp::Lt => num_cmp::NumCmp::num_lt(a, b),
            NumCmpOp::Ge => num_cmp::NumCmp::num_ge(a, b),
            NumCmpOp::Gt => num_cmp::NumCmp::num_gt(a, b),
        }
    }
}

trait AsNumberMaybe {
    fn as_number_maybe(&self) -> Option<&serde_json::Number>;
}

impl AsNumberMaybe for Value {
    fn as_number_maybe(&self) -> Option<&serde_json::Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// JSON equality used by `const`, `enum` and `uniqueItems`: numbers compare
/// by mathematical value rather than by internal representation, so `1` and
/// `1.0` are equal even though `serde_json::Value`'s derived `PartialEq`
/// treats them as distinct.
pub(crate) fn json_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| json_equal(l, r))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(k, v)| right.get(k).map_or(false, |rv| json_equal(v, rv)))
        }
        _ => left == right,
    }
}

/// R2, single-schema-valued keywords: the keyword's value is already a
/// complete schema entry point, so re-enter compilation with the *full*
/// residual pointer.
pub(crate) fn redispatch(
    value: &Value,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    compiler.compile_schema(value, uri, ref_list)
}

/// R2, collection-valued keywords (map form): step one object key, then
/// recompile with the remaining tokens.
pub(crate) fn step_into_map(
    value: &Value,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    let map = value
        .as_object()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    let (head, rest) = ref_list
        .split_first()
        .expect("step_into_map is only called with a non-empty ref_list");
    let target = map
        .get(head)
        .ok_or_else(|| InvalidSchemaError::DanglingPointer(head.clone()))?;
    compiler.compile_schema(target, uri, rest)
}

/// R2, collection-valued keywords (array form): step one numeric index, then
/// recompile with the remaining tokens.
pub(crate) fn step_into_array(
    value: &Value,
    uri: &Url,
    compiler: &Compiler,
    ref_list: &[String],
) -> Result<EvalRef, JsonSchemaError> {
    let array = value
        .as_array()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    let (head, rest) = ref_list
        .split_first()
        .expect("step_into_array is only called with a non-empty ref_list");
    let index: usize = head
        .parse()
        .map_err(|_| InvalidSchemaError::DanglingPointer(head.clone()))?;
    let target = array
        .get(index)
        .ok_or_else(|| InvalidSchemaError::DanglingPointer(head.clone()))?;
    compiler.compile_schema(target, uri, rest)
}
