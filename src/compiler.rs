//! Schema compilation: the recursive driver that turns a schema document into
//! a tree of evaluator closures.
use crate::{
    error::{InvalidSchemaError, JsonSchemaError},
    keywords::{self, KeywordMap},
    pointer,
    uri::{self, DEFAULT_ROOT_URI},
};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::{cell::RefCell, collections::HashMap, fmt, sync::Arc};
use url::Url;

/// A pure, side-effect-free verdict function over a JSON instance.
pub trait Evaluate: Send + Sync {
    fn evaluate(&self, instance: &Value) -> bool;
}

/// A shared handle to a compiled evaluator.
pub type EvalRef = Arc<dyn Evaluate>;

struct FnEvaluator<F>(F);

impl<F> Evaluate for FnEvaluator<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn evaluate(&self, instance: &Value) -> bool {
        (self.0)(instance)
    }
}

pub(crate) fn eval_fn<F>(f: F) -> EvalRef
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(FnEvaluator(f))
}

/// An evaluator that ignores its instance and always returns `value`.
pub(crate) fn constant(value: bool) -> EvalRef {
    eval_fn(move |_| value)
}

/// The conjunction of zero or more evaluators (vacuously `true`).
pub(crate) fn conjunction(evaluators: Vec<EvalRef>) -> EvalRef {
    if evaluators.len() == 1 {
        return evaluators.into_iter().next().expect("len checked above");
    }
    eval_fn(move |instance| evaluators.iter().all(|e| e.evaluate(instance)))
}

/// A memoized, possibly-not-yet-populated handle to a `$ref` target.
///
/// Registered before its body is compiled so a cyclic `$ref` graph finds an
/// already-present handle instead of recursing forever.
struct RefHandle(Arc<RwLock<Option<EvalRef>>>);

impl Evaluate for RefHandle {
    fn evaluate(&self, instance: &Value) -> bool {
        self.0
            .read()
            .as_ref()
            .expect("every registered $ref target is compiled before the root compile() returns")
            .evaluate(instance)
    }
}

/// Recursively registers every embedded `$id` under `schema` into `sink`,
/// keyed by its resolved absolute URI, so that forward and remote references
/// resolve regardless of traversal order.
pub(crate) fn scan_ids(
    schema: &Value,
    base: &Url,
    sink: &mut HashMap<String, Value>,
) -> Result<(), JsonSchemaError> {
    match schema {
        Value::Object(object) => {
            let mut base = base.clone();
            if let Some(Value::String(id)) = object.get("$id") {
                let resolved = uri::resolve(&base, id)?;
                let (absolute, _) = uri::split(&resolved);
                let key = absolute.as_str().to_string();
                if let Some(existing) = sink.get(&key) {
                    if existing != schema {
                        return Err(InvalidSchemaError::DuplicateId(key).into());
                    }
                } else {
                    sink.insert(key, schema.clone());
                }
                base = resolved;
            }
            for value in object.values() {
                scan_ids(value, &base, sink)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                scan_ids(item, base, sink)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Drives recursive compilation of a schema document into evaluator closures.
///
/// Holds the registry of remote/embedded schemas by absolute URI and memoizes
/// compiled `$ref` targets so cyclic references are safe.
pub(crate) struct Compiler<'a> {
    pub(crate) keyword_map: &'a KeywordMap,
    schema_by_uri: RefCell<HashMap<String, Value>>,
    validator_by_uri: RefCell<HashMap<String, Arc<RwLock<Option<EvalRef>>>>>,
}

impl<'a> fmt::Debug for Compiler<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("known_uris", &self.schema_by_uri.borrow().keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a> Compiler<'a> {
    pub(crate) fn new(keyword_map: &'a KeywordMap, schema_by_uri: HashMap<String, Value>) -> Self {
        Compiler {
            keyword_map,
            schema_by_uri: RefCell::new(schema_by_uri),
            validator_by_uri: RefCell::new(HashMap::new()),
        }
    }

    fn effective_uri(&self, schema: &Value, current: &Url) -> Result<Url, JsonSchemaError> {
        if let Value::Object(object) = schema {
            if let Some(Value::String(id)) = object.get("$id") {
                return uri::resolve(current, id);
            }
        }
        Ok(current.clone())
    }

    /// Case 1/4/5 entry point: compile `schema` under base `uri`, descending
    /// through `ref_list` (a residual JSON Pointer left over from a `$ref`
    /// that terminated inside this schema's own keywords) before applying any
    /// keyword.
    pub(crate) fn compile_schema(
        &self,
        schema: &Value,
        uri: &Url,
        ref_list: &[String],
    ) -> Result<EvalRef, JsonSchemaError> {
        if ref_list.is_empty() {
            if let Value::Bool(value) = schema {
                return Ok(constant(*value));
            }
        }
        let object = schema
            .as_object()
            .ok_or(InvalidSchemaError::NotAnObjectOrBoolean)?;
        let uri = self.effective_uri(schema, uri)?;

        if !ref_list.is_empty() {
            return self.compile_pointer_descent(object, schema, &uri, ref_list);
        }

        if let Some(reference) = object.get("$ref") {
            let reference = reference
                .as_str()
                .ok_or_else(|| InvalidSchemaError::MalformedUri(reference.to_string()))?;
            let ref_uri = uri::resolve(&uri, reference)?;
            return self.compile_ref(&ref_uri);
        }

        let mut evaluators = Vec::with_capacity(object.len());
        for (keyword, spec) in self.keyword_map.iter() {
            if let Some(value) = object.get(*keyword) {
                let inner = (spec.compile)(value, object, &uri, self, &[])?;
                evaluators.push(gate(spec.target_types, inner));
            }
        }
        Ok(conjunction(evaluators))
    }

    /// Case 5: `ref_list[0]` names either a keyword on `schema` (which is
    /// handed the rest of the pointer to descend into its own value) or plain
    /// JSON reachable by following the whole pointer.
    fn compile_pointer_descent(
        &self,
        object: &Map<String, Value>,
        schema: &Value,
        uri: &Url,
        ref_list: &[String],
    ) -> Result<EvalRef, JsonSchemaError> {
        let head = &ref_list[0];
        if let (Some(spec), Some(value)) = (
            self.keyword_map.get(head.as_str()),
            object.get(head.as_str()),
        ) {
            return (spec.compile)(value, object, uri, self, &ref_list[1..]);
        }
        let target = pointer::evaluate(schema, ref_list)
            .ok_or_else(|| InvalidSchemaError::DanglingPointer(format!("/{}", ref_list.join("/"))))?;
        self.compile_schema(target, uri, &[])
    }

    /// Case 3: resolve and memoize a `$ref` target, registering a placeholder
    /// before compiling the body so cycles through this URI are safe.
    fn compile_ref(&self, ref_uri: &Url) -> Result<EvalRef, JsonSchemaError> {
        let key = ref_uri.as_str().to_string();
        if let Some(handle) = self.validator_by_uri.borrow().get(&key) {
            return Ok(Arc::new(RefHandle(handle.clone())));
        }
        let handle = Arc::new(RwLock::new(None));
        self.validator_by_uri
            .borrow_mut()
            .insert(key.clone(), handle.clone());

        let (absolute, fragment) = uri::split(ref_uri);
        let absolute_key = absolute.as_str().to_string();
        let target = self
            .schema_by_uri
            .borrow()
            .get(&absolute_key)
            .cloned()
            .ok_or_else(|| InvalidSchemaError::UnresolvableReference(key.clone()))?;
        let tokens = pointer::parse(&fragment);
        let body = self.compile_schema(&target, &absolute, &tokens)?;
        *handle.write() = Some(body);
        Ok(Arc::new(RefHandle(handle)))
    }
}

/// Wrap `inner` so that instances whose type is outside `target_types` pass
/// without the inner evaluator ever running (R3, type gating).
fn gate(target_types: Option<&'static [crate::value_type::JsonType]>, inner: EvalRef) -> EvalRef {
    match target_types {
        None => inner,
        Some(types) => eval_fn(move |instance| {
            let applies = types
                .iter()
                .any(|t| crate::value_type::type_matches(*t, instance));
            !applies || inner.evaluate(instance)
        }),
    }
}

/// A compiled schema, ready to evaluate instances against.
///
/// Immutable after construction and safely shareable across threads.
pub struct Validator {
    root: EvalRef,
    schema: Value,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("schema", &self.schema).finish()
    }
}

impl Validator {
    /// Evaluate `instance` against the compiled schema.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.root.evaluate(instance)
    }

    /// The original schema document this validator was compiled from.
    #[must_use]
    pub fn schema(&self) -> &Value {
        &self.schema
    }
}

pub(crate) fn compile_root(
    schema: &Value,
    keyword_map: &KeywordMap,
    remote_schemas: &HashMap<String, Value>,
) -> Result<Validator, JsonSchemaError> {
    let root_uri = match schema
        .as_object()
        .and_then(|object| object.get("$id"))
        .and_then(Value::as_str)
    {
        Some(id) => Url::parse(id).map_err(|_| InvalidSchemaError::MalformedUri(id.to_string()))?,
        None => Url::parse(DEFAULT_ROOT_URI).expect("default root URI is a valid URL"),
    };

    let mut schema_by_uri = HashMap::new();

    let meta_schema = crate::meta::schema();
    let meta_id = meta_schema
        .as_object()
        .and_then(|object| object.get("$id"))
        .and_then(Value::as_str)
        .expect("packaged meta-schema has an $id");
    let meta_url = Url::parse(meta_id).expect("packaged meta-schema $id is a valid URI");
    let (meta_absolute, _) = uri::split(&meta_url);
    schema_by_uri.insert(meta_absolute.as_str().to_string(), meta_schema.clone());

    for (uri_str, remote) in remote_schemas {
        let url = Url::parse(uri_str).map_err(|_| InvalidSchemaError::MalformedUri(uri_str.clone()))?;
        let (absolute, _) = uri::split(&url);
        schema_by_uri.insert(absolute.as_str().to_string(), remote.clone());
        scan_ids(remote, &absolute, &mut schema_by_uri)?;
    }
    schema_by_uri.insert(root_uri.as_str().to_string(), schema.clone());
    scan_ids(schema, &root_uri, &mut schema_by_uri)?;

    let compiler = Compiler::new(keyword_map, schema_by_uri);
    let root = compiler.compile_schema(schema, &root_uri, &[])?;
    Ok(Validator {
        root,
        schema: schema.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CompileOptions;
    use serde_json::json;

    #[test]
    fn only_keyword() {
        let schema = json!({"type": "string"});
        let compiled = CompileOptions::new().compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!("AB")));
        assert!(!compiled.is_valid(&json!(1)));
    }

    #[test]
    fn meta_schema_is_resolvable_by_ref_without_a_caller_supplied_remote_schema() {
        let schema = json!({
            "$ref": "http://json-schema.org/draft-07/schema#/definitions/nonNegativeInteger"
        });
        let compiled = CompileOptions::new().compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!(0)));
        assert!(!compiled.is_valid(&json!(-1)));
    }

    #[test]
    fn wrong_schema_type() {
        let schema = json!([1]);
        assert!(CompileOptions::new().compile(&schema).is_err());
    }

    #[test]
    fn dangling_ref_is_a_compile_error() {
        let schema = json!({"$ref": "#/no_such"});
        assert!(CompileOptions::new().compile(&schema).is_err());
    }

    #[test]
    fn recursive_schema_via_root_ref() {
        let schema = json!({"properties": {"child": {"$ref": "#"}}});
        let compiled = CompileOptions::new().compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!({"child": {"child": {}}})));
        assert!(!compiled.is_valid(&json!({"child": 5})));
    }

    #[test]
    fn ref_into_array_definitions_out_of_range_is_an_error() {
        let schema = json!({
            "properties": {"a": {"$ref": "#/myDefs/3"}},
            "myDefs": [{"type": "integer"}, {"type": "string"}, {"type": "boolean"}]
        });
        assert!(CompileOptions::new().compile(&schema).is_err());
    }

    #[test]
    fn ref_into_array_definitions_in_range() {
        let schema = json!({
            "properties": {"a": {"$ref": "#/myDefs/2"}},
            "myDefs": [{"type": "integer"}, {"type": "string"}, {"type": "boolean"}]
        });
        let compiled = CompileOptions::new().compile(&schema).unwrap();
        assert!(compiled.is_valid(&json!({"a": true})));
        assert!(!compiled.is_valid(&json!({"a": 1})));
    }
}
