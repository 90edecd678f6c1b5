//! `pattern` — the instance must match an ECMA-262-flavored regular expression.
use crate::compiler::{eval_fn, Compiler, EvalRef};
use crate::error::{InvalidSchemaError, JsonSchemaError};
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::ops::Index;
use url::Url;

lazy_static::lazy_static! {
    static ref CONTROL_GROUPS_RE: Regex = Regex::new(r"\\c[A-Za-z]").expect("valid regex");
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
    let source = value
        .as_str()
        .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
    let regex = convert_regex(source)?;
    Ok(eval_fn(move |instance| {
        instance.as_str().map_or(true, |s| regex.is_match(s))
    }))
}

/// Approximates a few ECMA-262 escapes that `regex` (Unicode-flavored, PCRE-ish)
/// interprets differently or not at all.
fn convert_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let converted = CONTROL_GROUPS_RE.replace_all(pattern, replace_control_group);
    Regex::new(
        &converted
            .replace(r"\d", "[0-9]")
            .replace(r"\D", "[^0-9]")
            .replace(r"\w", "[A-Za-z]")
            .replace(r"\W", "[^A-Za-z]")
            .replace(
                r"\s",
                "[ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]",
            )
            .replace(
                r"\S",
                "[^ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]",
            ),
    )
}

fn replace_control_group(captures: &Captures) -> String {
    ((captures
        .index(0)
        .trim_start_matches(r"\c")
        .chars()
        .next()
        .expect("guaranteed by the [A-Za-z] in CONTROL_GROUPS_RE")
        .to_ascii_uppercase() as u8
        - 64) as char)
        .to_string()
}
