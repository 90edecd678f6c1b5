//! RFC 6901 JSON Pointer parsing and evaluation.
use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Split a pointer (with or without a leading `#`) into unescaped tokens.
///
/// `~1` is replaced by `/` before `~0` is replaced by `~`, so `~01` round-trips
/// to the single character `~1`, not to `/`.
pub(crate) fn parse(pointer: &str) -> Vec<String> {
    let pointer = pointer.strip_prefix('#').unwrap_or(pointer);
    if pointer.is_empty() {
        return vec![];
    }
    let decoded = percent_decode_str(pointer).decode_utf8_lossy();
    let without_leading_slash = decoded.strip_prefix('/').unwrap_or(&decoded);
    without_leading_slash
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.starts_with('0') && token.len() != 1) {
        return None;
    }
    token.parse().ok()
}

/// Walk `tokens` through `document`, returning the terminal value if every
/// token resolved.
pub(crate) fn evaluate<'a>(document: &'a Value, tokens: &[String]) -> Option<&'a Value> {
    let mut target = document;
    for token in tokens {
        target = match target {
            Value::Object(map) => map.get(token)?,
            Value::Array(list) => list.get(parse_index(token)?)?,
            _ => return None,
        };
    }
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("", vec![])]
    #[test_case("#", vec![])]
    #[test_case("/a/b", vec!["a", "b"])]
    #[test_case("#/a/b", vec!["a", "b"])]
    #[test_case("/m~0n", vec!["m~n"])]
    #[test_case("/a~1b", vec!["a/b"])]
    #[test_case("/~01", vec!["~1"])]
    fn parses(input: &str, expected: Vec<&str>) {
        let expected: Vec<String> = expected.into_iter().map(String::from).collect();
        assert_eq!(parse(input), expected);
    }

    #[test]
    fn evaluates_object_and_array() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        let tokens = parse("/a/b/1");
        assert_eq!(evaluate(&doc, &tokens), Some(&json!(2)));
    }

    #[test]
    fn rejects_leading_zero_index() {
        let doc = json!({"a": [1, 2]});
        let tokens = parse("/a/01");
        assert_eq!(evaluate(&doc, &tokens), None);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let doc = json!({"a": [1, 2]});
        let tokens = parse("/a/5");
        assert_eq!(evaluate(&doc, &tokens), None);
    }

    #[test]
    fn tilde_zero_one_is_tilde_one_not_slash() {
        let doc = json!({"~1": "literal"});
        let tokens = parse("/~01");
        assert_eq!(evaluate(&doc, &tokens), Some(&json!("literal")));
    }
}
