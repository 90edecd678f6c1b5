//! URI splitting and RFC 3986 reference resolution, backed by the `url` crate.
use crate::error::{InvalidSchemaError, JsonSchemaError};
use url::Url;

/// The base scope assumed for a root schema with no `$id`.
pub(crate) const DEFAULT_ROOT_URI: &str = "json-schema:///";

/// Split `uri` into its absolute part (fragment cleared) and its fragment
/// (without the leading `#`).
pub(crate) fn split(uri: &Url) -> (Url, String) {
    let fragment = uri.fragment().unwrap_or("").to_string();
    let mut absolute = uri.clone();
    absolute.set_fragment(None);
    (absolute, fragment)
}

/// Resolve `reference` against `base`, per RFC 3986.
pub(crate) fn resolve(base: &Url, reference: &str) -> Result<Url, JsonSchemaError> {
    Url::options()
        .base_url(Some(base))
        .parse(reference)
        .map_err(|_| {
            JsonSchemaError::InvalidSchema(InvalidSchemaError::MalformedUri(reference.to_string()))
        })
}
