//! Instrument description record.

use serde_json::{Map, Value};

use crate::codec::{self, JsonCodec};
use crate::error::OpenFretError;
use crate::metadata::Metadata;

/// Descriptive details about the acquisition instrument.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentDetails {
    /// Microscope model, if recorded.
    pub microscope: Option<String>,

    /// Laser description, if recorded.
    pub laser: Option<String>,

    /// Detector description, if recorded.
    pub detector: Option<String>,

    /// Instrument annotations not covered by the fixed fields.
    pub other_details: Metadata,
}

impl InstrumentDetails {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }
}

impl JsonCodec for InstrumentDetails {
    const ENTITY: &'static str = "instrument_details";

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        if let Some(ref microscope) = self.microscope {
            obj.insert("microscope".into(), Value::String(microscope.clone()));
        }
        if let Some(ref laser) = self.laser {
            obj.insert("laser".into(), Value::String(laser.clone()));
        }
        if let Some(ref detector) = self.detector {
            obj.insert("detector".into(), Value::String(detector.clone()));
        }
        obj.insert("other_details".into(), self.other_details.encode());
        Value::Object(obj)
    }

    fn decode(value: &Value) -> Result<Self, OpenFretError> {
        let obj = codec::expect_object(value, Self::ENTITY)?;
        Ok(Self {
            microscope: codec::optional_string(obj, "microscope")?,
            laser: codec::optional_string(obj, "laser")?,
            detector: codec::optional_string(obj, "detector")?,
            other_details: match obj.get("other_details") {
                Some(v) => codec::decode_at(v, "other_details")?,
                None => Metadata::new(),
            },
        })
    }
}
