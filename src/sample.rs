//! Sample description record.

use serde_json::{Map, Value};

use crate::codec::{self, JsonCodec};
use crate::error::OpenFretError;
use crate::metadata::Metadata;

/// Descriptive details about the sample under study.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleDetails {
    /// Buffer composition, if recorded.
    pub buffer_conditions: Option<String>,

    /// Sample annotations not covered by the fixed fields.
    pub other_details: Metadata,
}

impl SampleDetails {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }
}

impl JsonCodec for SampleDetails {
    const ENTITY: &'static str = "sample_details";

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        if let Some(ref buffer) = self.buffer_conditions {
            obj.insert("buffer_conditions".into(), Value::String(buffer.clone()));
        }
        obj.insert("other_details".into(), self.other_details.encode());
        Value::Object(obj)
    }

    fn decode(value: &Value) -> Result<Self, OpenFretError> {
        let obj = codec::expect_object(value, Self::ENTITY)?;
        Ok(Self {
            buffer_conditions: codec::optional_string(obj, "buffer_conditions")?,
            other_details: match obj.get("other_details") {
                Some(v) => codec::decode_at(v, "other_details")?,
                None => Metadata::new(),
            },
        })
    }
}
