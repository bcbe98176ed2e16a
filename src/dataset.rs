//! The root dataset aggregate and its codec.

use serde_json::{Map, Value};

use crate::codec::{self, JsonCodec};
use crate::error::OpenFretError;
use crate::instrument::InstrumentDetails;
use crate::metadata::Metadata;
use crate::sample::SampleDetails;
use crate::trace::Trace;

/// Root aggregate describing one experiment: identifying fields, traces,
/// free-form metadata, and the sample/instrument records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Experiment title.
    pub title: String,

    /// Free-text description, if any.
    pub description: Option<String>,

    /// Experiment type, e.g. `"2-Color FRET"`.
    pub experiment_type: Option<String>,

    /// Author names.
    pub authors: Option<Vec<String>>,

    /// Originating institution.
    pub institution: Option<String>,

    /// Acquisition date as an ISO 8601 string (see [`Dataset::set_date`]).
    pub date: Option<String>,

    /// All traces in the dataset, in acquisition order. May be empty.
    pub traces: Vec<Trace>,

    /// Free-form dataset annotations.
    pub metadata: Metadata,

    /// Sample description.
    pub sample_details: SampleDetails,

    /// Instrument description.
    pub instrument_details: InstrumentDetails,
}

impl Dataset {
    /// Create a dataset with the given title and no traces.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Record the acquisition date as its ISO 8601 rendering.
    ///
    /// The wire field stays a plain string; decode does not require dates
    /// to be ISO formatted.
    pub fn set_date(&mut self, date: chrono::NaiveDate) {
        self.date = Some(date.format("%Y-%m-%d").to_string());
    }

    /// Total number of channels across all traces.
    pub fn channel_count(&self) -> usize {
        self.traces.iter().map(|t| t.channels.len()).sum()
    }
}

impl JsonCodec for Dataset {
    const ENTITY: &'static str = "dataset";

    fn encode(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("title".into(), Value::String(self.title.clone()));
        if let Some(ref description) = self.description {
            obj.insert("description".into(), Value::String(description.clone()));
        }
        if let Some(ref experiment_type) = self.experiment_type {
            obj.insert(
                "experiment_type".into(),
                Value::String(experiment_type.clone()),
            );
        }
        if let Some(ref authors) = self.authors {
            obj.insert(
                "authors".into(),
                Value::Array(authors.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(ref institution) = self.institution {
            obj.insert("institution".into(), Value::String(institution.clone()));
        }
        if let Some(ref date) = self.date {
            obj.insert("date".into(), Value::String(date.clone()));
        }
        obj.insert(
            "traces".into(),
            Value::Array(self.traces.iter().map(Trace::encode).collect()),
        );
        obj.insert("metadata".into(), self.metadata.encode());
        obj.insert("sample_details".into(), self.sample_details.encode());
        obj.insert(
            "instrument_details".into(),
            self.instrument_details.encode(),
        );
        Value::Object(obj)
    }

    fn decode(value: &Value) -> Result<Self, OpenFretError> {
        let obj = codec::expect_object(value, Self::ENTITY)?;
        let title = codec::required_string(obj, Self::ENTITY, "title")?;
        let items = match codec::require(obj, Self::ENTITY, "traces")? {
            Value::Array(items) => items,
            other => return Err(codec::type_mismatch("traces", "array", other)),
        };
        let mut traces = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            traces.push(codec::decode_at(item, &format!("traces[{i}]"))?);
        }
        Ok(Self {
            title,
            description: codec::optional_string(obj, "description")?,
            experiment_type: codec::optional_string(obj, "experiment_type")?,
            authors: codec::optional_string_array(obj, "authors")?,
            institution: codec::optional_string(obj, "institution")?,
            date: codec::optional_string(obj, "date")?,
            traces,
            metadata: match obj.get("metadata") {
                Some(v) => codec::decode_at(v, "metadata")?,
                None => Metadata::new(),
            },
            sample_details: match obj.get("sample_details") {
                Some(v) => codec::decode_at(v, "sample_details")?,
                None => SampleDetails::default(),
            },
            instrument_details: match obj.get("instrument_details") {
                Some(v) => codec::decode_at(v, "instrument_details")?,
                None => InstrumentDetails::default(),
            },
        })
    }
}
