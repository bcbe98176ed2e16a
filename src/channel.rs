//! A single acquisition channel and its codec.

use serde_json::{Map, Value};

use crate::codec::{self, JsonCodec};
use crate::error::OpenFretError;
use crate::metadata::Metadata;

/// One detection channel: its type, intensity sequence, and optional
/// acquisition parameters.
///
/// Wavelengths are in nanometers and exposure times in seconds by
/// convention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel {
    /// Channel type, e.g. `"donor"` or `"acceptor"`. Non-empty by
    /// convention, not enforced.
    pub channel_type: String,

    /// Intensity values, one per frame. May be empty.
    pub data: Vec<f64>,

    /// Excitation wavelength, if recorded.
    pub excitation_wavelength: Option<f64>,

    /// Emission wavelength, if recorded.
    pub emission_wavelength: Option<f64>,

    /// Exposure time per frame, if recorded.
    pub exposure_time: Option<f64>,

    /// Free-form channel annotations.
    pub metadata: Metadata,
}

impl Channel {
    /// Create a channel of the given type with its intensity sequence.
    pub fn new(channel_type: &str, data: Vec<f64>) -> Self {
        Self {
            channel_type: channel_type.to_string(),
            data,
            ..Default::default()
        }
    }

    /// Number of frames in the channel.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the channel holds no frames.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl JsonCodec for Channel {
    const ENTITY: &'static str = "channel";

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "channel_type".into(),
            Value::String(self.channel_type.clone()),
        );
        obj.insert(
            "data".into(),
            Value::Array(self.data.iter().copied().map(codec::number).collect()),
        );
        if let Some(wavelength) = self.excitation_wavelength {
            obj.insert("excitation_wavelength".into(), codec::number(wavelength));
        }
        if let Some(wavelength) = self.emission_wavelength {
            obj.insert("emission_wavelength".into(), codec::number(wavelength));
        }
        if let Some(exposure) = self.exposure_time {
            obj.insert("exposure_time".into(), codec::number(exposure));
        }
        obj.insert("metadata".into(), self.metadata.encode());
        Value::Object(obj)
    }

    fn decode(value: &Value) -> Result<Self, OpenFretError> {
        let obj = codec::expect_object(value, Self::ENTITY)?;
        let channel_type = codec::required_string(obj, Self::ENTITY, "channel_type")?;
        let data = codec::f64_array(codec::require(obj, Self::ENTITY, "data")?, "data")?;
        let excitation_wavelength = codec::optional_f64(obj, "excitation_wavelength")?;
        let emission_wavelength = codec::optional_f64(obj, "emission_wavelength")?;
        let exposure_time = codec::optional_f64(obj, "exposure_time")?;
        let metadata = match obj.get("metadata") {
            Some(v) => codec::decode_at(v, "metadata")?,
            None => Metadata::new(),
        };
        Ok(Self {
            channel_type,
            data,
            excitation_wavelength,
            emission_wavelength,
            exposure_time,
            metadata,
        })
    }
}
