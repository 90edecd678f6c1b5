//! JSON type predicates matching the seven Draft-07 `type` names.
use serde_json::Value;
use std::{convert::TryFrom, fmt};

/// One of the seven simple type names `type` may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonType::Array => write!(f, "array"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Null => write!(f, "null"),
            JsonType::Number => write!(f, "number"),
            JsonType::Object => write!(f, "object"),
            JsonType::String => write!(f, "string"),
        }
    }
}

impl TryFrom<&str> for JsonType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "array" => Ok(JsonType::Array),
            "boolean" => Ok(JsonType::Boolean),
            "integer" => Ok(JsonType::Integer),
            "null" => Ok(JsonType::Null),
            "number" => Ok(JsonType::Number),
            "object" => Ok(JsonType::Object),
            "string" => Ok(JsonType::String),
            _ => Err(()),
        }
    }
}

pub(crate) fn is_null(value: &Value) -> bool {
    value.is_null()
}

pub(crate) fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

/// A non-boolean integral number: either an exact integer representation or a
/// finite float with a zero fractional part.
pub(crate) fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().map_or(false, |f| f.fract() == 0.0)
        }
        _ => false,
    }
}

pub(crate) fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub(crate) fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub(crate) fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub(crate) fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Whether `value` satisfies the named Draft-07 simple type.
pub(crate) fn type_matches(name: JsonType, value: &Value) -> bool {
    match name {
        JsonType::Null => is_null(value),
        JsonType::Boolean => is_boolean(value),
        JsonType::Integer => is_integer(value),
        JsonType::Number => is_number(value),
        JsonType::String => is_string(value),
        JsonType::Object => is_object(value),
        JsonType::Array => is_array(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), JsonType::Null, true)]
    #[test_case(json!(true), JsonType::Boolean, true)]
    #[test_case(json!(true), JsonType::Integer, false)]
    #[test_case(json!(1), JsonType::Integer, true)]
    #[test_case(json!(1.0), JsonType::Integer, true)]
    #[test_case(json!(1.5), JsonType::Integer, false)]
    #[test_case(json!(1.5), JsonType::Number, true)]
    #[test_case(json!("x"), JsonType::String, true)]
    #[test_case(json!([1]), JsonType::Array, true)]
    #[test_case(json!({}), JsonType::Object, true)]
    fn matches(value: Value, ty: JsonType, expected: bool) {
        assert_eq!(type_matches(ty, &value), expected);
    }

    #[test]
    fn boolean_is_not_number() {
        assert!(!is_number(&json!(true)));
    }
}
