//! The per-entity JSON codec capability and its shared decode helpers.
//!
//! Every openFRET entity implements [`JsonCodec`] once; the codec rules
//! (which members are required, which are written only when set) live next
//! to each data type instead of in scattered conversion functions.

use serde_json::{Map, Number, Value};

use crate::error::OpenFretError;

/// Encode/decode capability implemented once per openFRET entity.
///
/// Encoding walks the tree bottom-up (metadata, then channels, traces, and
/// finally the dataset) and always succeeds. Decoding walks top-down: each
/// level validates its own required members and delegates nested structures,
/// so a failure is reported at the narrowest scope that detected it.
pub trait JsonCodec: Sized {
    /// Entity name used in decode error messages.
    const ENTITY: &'static str;

    /// Encode this entity as a JSON value.
    fn encode(&self) -> Value;

    /// Decode an entity from a JSON value.
    ///
    /// Fails with [`OpenFretError::MissingField`] when a required member is
    /// absent and [`OpenFretError::TypeMismatch`] when a member holds the
    /// wrong JSON kind. No partial entity is returned on failure.
    fn decode(value: &Value) -> Result<Self, OpenFretError>;
}

/// Name of a JSON value's kind, as reported in type-mismatch errors.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(field: &str, expected: &'static str, actual: &Value) -> OpenFretError {
    OpenFretError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual: json_kind(actual),
    }
}

/// Encode a sample value. Non-finite floats have no JSON form; they are
/// rendered as `null`, matching `serde_json`'s own convention.
pub(crate) fn number(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

/// The value an entity decodes from must be a JSON object.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    entity: &'static str,
) -> Result<&'a Map<String, Value>, OpenFretError> {
    value
        .as_object()
        .ok_or_else(|| type_mismatch(entity, "object", value))
}

/// Look up a required member of `entity`.
pub(crate) fn require<'a>(
    obj: &'a Map<String, Value>,
    entity: &'static str,
    field: &str,
) -> Result<&'a Value, OpenFretError> {
    obj.get(field).ok_or_else(|| OpenFretError::MissingField {
        entity,
        field: field.to_string(),
    })
}

/// Required string member.
pub(crate) fn required_string(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &str,
) -> Result<String, OpenFretError> {
    match require(obj, entity, field)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(type_mismatch(field, "string", other)),
    }
}

/// Optional string member; absent maps to `None`.
pub(crate) fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, OpenFretError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(type_mismatch(field, "string", other)),
    }
}

/// Optional numeric member; absent maps to `None`.
pub(crate) fn optional_f64(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<f64>, OpenFretError> {
    match obj.get(field) {
        None => Ok(None),
        Some(value) => match value.as_f64() {
            Some(n) => Ok(Some(n)),
            None => Err(type_mismatch(field, "number", value)),
        },
    }
}

/// Optional array-of-strings member; absent maps to `None`.
pub(crate) fn optional_string_array(
    obj: &Map<String, Value>,
    field: &str,
) -> Result<Option<Vec<String>>, OpenFretError> {
    let items = match obj.get(field) {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(type_mismatch(field, "array", other)),
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => out.push(s.clone()),
            other => return Err(type_mismatch(&format!("{field}[{i}]"), "string", other)),
        }
    }
    Ok(Some(out))
}

/// Convert a member to a sample sequence, checking every element.
pub(crate) fn f64_array(value: &Value, field: &str) -> Result<Vec<f64>, OpenFretError> {
    let items = value
        .as_array()
        .ok_or_else(|| type_mismatch(field, "array", value))?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_f64() {
            Some(n) => out.push(n),
            None => return Err(type_mismatch(&format!("{field}[{i}]"), "number", item)),
        }
    }
    Ok(out)
}

/// Decode a nested entity at the member or element named by `path`.
///
/// The kind check happens here, before delegating, so positional context is
/// attached to the path exactly once.
pub(crate) fn decode_at<T: JsonCodec>(value: &Value, path: &str) -> Result<T, OpenFretError> {
    if !value.is_object() {
        return Err(type_mismatch(path, "object", value));
    }
    T::decode(value).map_err(|e| e.within(path))
}
