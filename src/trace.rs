//! A single-molecule trace and its codec.

use serde_json::{Map, Value};

use crate::channel::Channel;
use crate::codec::{self, JsonCodec};
use crate::error::OpenFretError;
use crate::metadata::Metadata;

/// One synchronized acquisition event comprising multiple channels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// Channels captured together, in acquisition order. May be empty.
    pub channels: Vec<Channel>,

    /// Free-form trace annotations.
    pub metadata: Metadata,
}

impl Trace {
    /// Create a trace from its channels.
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels,
            metadata: Metadata::new(),
        }
    }

    /// Whether every channel carries the same number of frames.
    ///
    /// Mixed lengths are legal but usually indicate an acquisition or
    /// import problem.
    pub fn has_uniform_channel_lengths(&self) -> bool {
        let mut lengths = self.channels.iter().map(|c| c.data.len());
        match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        }
    }
}

impl JsonCodec for Trace {
    const ENTITY: &'static str = "trace";

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "channels".into(),
            Value::Array(self.channels.iter().map(Channel::encode).collect()),
        );
        obj.insert("metadata".into(), self.metadata.encode());
        Value::Object(obj)
    }

    fn decode(value: &Value) -> Result<Self, OpenFretError> {
        let obj = codec::expect_object(value, Self::ENTITY)?;
        let items = match codec::require(obj, Self::ENTITY, "channels")? {
            Value::Array(items) => items,
            other => return Err(codec::type_mismatch("channels", "array", other)),
        };
        let mut channels = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            channels.push(codec::decode_at(item, &format!("channels[{i}]"))?);
        }
        let metadata = match obj.get("metadata") {
            Some(v) => codec::decode_at(v, "metadata")?,
            None => Metadata::new(),
        };
        Ok(Self { channels, metadata })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_channels_fails() {
        let err = Trace::decode(&json!({"metadata": {}})).unwrap_err();
        match err {
            OpenFretError::MissingField { entity, field } => {
                assert_eq!(entity, "trace");
                assert_eq!(field, "channels");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn channel_errors_carry_position() {
        let value = json!({
            "channels": [
                {"channel_type": "donor", "data": []},
                {"channel_type": "acceptor"}
            ]
        });
        let err = Trace::decode(&value).unwrap_err();
        match err {
            OpenFretError::MissingField { field, .. } => assert_eq!(field, "channels[1].data"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn uniform_channel_lengths() {
        let mut trace = Trace::new(vec![
            Channel::new("donor", vec![1.0, 2.0]),
            Channel::new("acceptor", vec![3.0, 4.0]),
        ]);
        assert!(trace.has_uniform_channel_lengths());

        trace.channels[1].data.push(5.0);
        assert!(!trace.has_uniform_channel_lengths());

        assert!(Trace::default().has_uniform_channel_lengths());
    }
}
