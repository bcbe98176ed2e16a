//! Open-ended metadata attached to openFRET entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::{expect_object, JsonCodec};
use crate::error::OpenFretError;

/// An open-ended, order-insensitive annotation block.
///
/// Every openFRET entity carries one of these as an escape hatch for fields
/// outside the fixed schema. Values are arbitrary JSON: null, booleans,
/// numbers, strings, arrays, and nested objects at any depth. The block is
/// never optional on its owner, but it may be empty.
///
/// ```rust
/// use openfret::metadata::Metadata;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("molecule_id", "1");
/// metadata.insert("temperature_c", 22.5);
/// assert_eq!(metadata.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    /// Create an empty metadata block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of keys in the block.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the block holds no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl JsonCodec for Metadata {
    const ENTITY: &'static str = "metadata";

    fn encode(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Any well-formed JSON object is a valid metadata block; only a
    /// non-object value fails.
    fn decode(value: &Value) -> Result<Self, OpenFretError> {
        Ok(Self(expect_object(value, Self::ENTITY)?.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_values_roundtrip() {
        let mut metadata = Metadata::new();
        metadata.insert("label", "condition_A");
        metadata.insert("ph", 7.4);
        metadata.insert("flags", json!([true, false, null]));
        metadata.insert("camera", json!({"model": "iXon 897", "gain": 300}));

        let restored = Metadata::decode(&metadata.encode()).unwrap();
        assert_eq!(restored, metadata);
        assert_eq!(restored.get("camera"), Some(&json!({"model": "iXon 897", "gain": 300})));
    }

    #[test]
    fn non_object_is_rejected() {
        let err = Metadata::decode(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, OpenFretError::TypeMismatch { expected: "object", .. }));
    }
}
