use std::fmt;

/// An error that occurs while compiling a schema into a [`crate::Validator`].
///
/// Compilation fails eagerly: malformed schemas, dangling `$ref`s, out-of-range
/// JSON Pointers and meta-schema violations are all reported here rather than
/// deferred to evaluation time.
#[derive(Debug, PartialEq)]
pub enum JsonSchemaError {
    /// The schema itself is malformed or fails meta-schema validation.
    InvalidSchema(InvalidSchemaError),
    /// Reserved for forward compatibility with detailed instance errors.
    /// The core never constructs this variant; invalidity is reported as `false`
    /// from [`crate::Validator::is_valid`].
    InvalidInstance(InvalidInstanceError),
}

/// Why a schema could not be compiled.
#[derive(Debug, PartialEq)]
pub enum InvalidSchemaError {
    /// The schema is neither a boolean nor a JSON object.
    NotAnObjectOrBoolean,
    /// A `$ref` (or a keyword reachable through one) points at a URI that was
    /// never registered, either because it is the root with no `$id` or
    /// because the caller did not supply it as a remote schema.
    UnresolvableReference(String),
    /// A JSON Pointer fragment did not resolve against its target document.
    DanglingPointer(String),
    /// Two schemas were registered under the same absolute URI (via `$id`
    /// collisions or conflicting entries in the remote schema map).
    DuplicateId(String),
    /// `$ref` (or another URI-bearing keyword) was not a valid URI reference.
    MalformedUri(String),
    /// `pattern` (or a `patternProperties` key) did not compile as a regular
    /// expression.
    InvalidRegex(String),
    /// The schema did not satisfy the Draft-07 meta-schema.
    FailsMetaValidation,
    /// `type` named something other than one of the seven Draft-07 simple
    /// type names.
    UnknownTypeName(String),
}

/// Reserved for forward compatibility; never constructed by this crate today.
#[derive(Debug, PartialEq)]
pub enum InvalidInstanceError {}

impl fmt::Display for JsonSchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonSchemaError::InvalidSchema(err) => write!(f, "{}", err),
            JsonSchemaError::InvalidInstance(err) => match *err {},
        }
    }
}

impl fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSchemaError::NotAnObjectOrBoolean => {
                write!(f, "a schema must be a JSON object or a boolean")
            }
            InvalidSchemaError::UnresolvableReference(uri) => {
                write!(f, "could not resolve reference '{}'", uri)
            }
            InvalidSchemaError::DanglingPointer(pointer) => {
                write!(f, "pointer '{}' does not resolve to any value", pointer)
            }
            InvalidSchemaError::DuplicateId(id) => {
                write!(f, "'{}' is registered by more than one schema", id)
            }
            InvalidSchemaError::MalformedUri(uri) => write!(f, "'{}' is not a valid URI", uri),
            InvalidSchemaError::InvalidRegex(pattern) => {
                write!(f, "'{}' is not a valid regular expression", pattern)
            }
            InvalidSchemaError::FailsMetaValidation => {
                write!(f, "schema does not conform to the draft-07 meta-schema")
            }
            InvalidSchemaError::UnknownTypeName(name) => {
                write!(f, "'{}' is not a recognized type name", name)
            }
        }
    }
}

impl std::error::Error for JsonSchemaError {}

impl From<InvalidSchemaError> for JsonSchemaError {
    fn from(err: InvalidSchemaError) -> Self {
        JsonSchemaError::InvalidSchema(err)
    }
}

impl From<regex::Error> for JsonSchemaError {
    fn from(err: regex::Error) -> Self {
        JsonSchemaError::InvalidSchema(InvalidSchemaError::InvalidRegex(err.to_string()))
    }
}

impl From<url::ParseError> for JsonSchemaError {
    fn from(err: url::ParseError) -> Self {
        JsonSchemaError::InvalidSchema(InvalidSchemaError::MalformedUri(err.to_string()))
    }
}
