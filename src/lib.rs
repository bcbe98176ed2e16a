//! # openFRET - Single-Molecule FRET Data Format
//!
//! `openfret` is a Rust implementation of the openFRET data format: a
//! hierarchical, JSON-encoded representation of single-molecule FRET
//! (Förster resonance energy transfer) experimental data.
//!
//! ## Key Features
//!
//! - **Hierarchical model**: a [`dataset::Dataset`] owns [`trace::Trace`]s,
//!   which own [`channel::Channel`]s; every level carries an open-ended
//!   [`metadata::Metadata`] block for fields outside the fixed schema.
//!
//! - **Explicit optionality**: optional acquisition parameters are
//!   `Option<T>`. A `None` field produces no JSON member on encode, and an
//!   absent member decodes back to `None`, so unset fields never clutter
//!   the file.
//!
//! - **Narrow-scope errors**: decode failures name the offending member
//!   together with its position in the tree (e.g.
//!   `traces[2].channels[0].data`), and no partial entity is ever returned.
//!
//! - **Human-readable files**: datasets are written as 4-space-indented
//!   UTF-8 JSON with a trailing newline; any valid JSON formatting is
//!   accepted on input.
//!
//! ## Quick Start
//!
//! ```rust
//! use openfret::prelude::*;
//!
//! let mut channel = Channel::new("donor", vec![1000.0, 950.0, 1020.0]);
//! channel.excitation_wavelength = Some(488.0);
//!
//! let mut dataset = Dataset::new("My FRET Experiment");
//! dataset.traces.push(Trace::new(vec![channel]));
//!
//! // Encode to a JSON value and back.
//! let value = dataset.encode();
//! let restored = Dataset::decode(&value)?;
//! assert_eq!(restored, dataset);
//! # Ok::<(), openfret::error::OpenFretError>(())
//! ```
//!
//! Reading and writing files:
//!
//! ```rust,no_run
//! use openfret::prelude::*;
//!
//! let dataset = read_dataset("fret_data.json")?;
//! println!("{}: {} traces", dataset.title, dataset.traces.len());
//! write_dataset(&dataset, "fret_data_copy.json")?;
//! # Ok::<(), openfret::error::OpenFretError>(())
//! ```
//!
//! ## Format Specification
//!
//! A dataset file is a single top-level JSON object matching `Dataset`.
//! Member presence follows one rule: structural members are always written,
//! optional members are written only when set.
//!
//! | Object | Always present | Present when set |
//! |--------|----------------|------------------|
//! | `Dataset` | `title`, `traces`, `metadata`, `sample_details`, `instrument_details` | `description`, `experiment_type`, `authors`, `institution`, `date` |
//! | `Trace` | `channels`, `metadata` | |
//! | `Channel` | `channel_type`, `data`, `metadata` | `excitation_wavelength`, `emission_wavelength`, `exposure_time` |
//! | `SampleDetails` | `other_details` | `buffer_conditions` |
//! | `InstrumentDetails` | `other_details` | `microscope`, `laser`, `detector` |
//! | `Metadata` | | any string key mapped to any JSON value |
//!
//! Wavelengths are given in nanometers and exposure times in seconds by
//! convention; the format does not enforce units.
//!
//! ## Architecture
//!
//! - [`channel`], [`trace`], [`dataset`], [`sample`], [`instrument`]: the
//!   data model, one entity per module
//! - [`metadata`]: the open-ended annotation block shared by all entities
//! - [`codec`]: the per-entity JSON encode/decode capability
//! - [`reader`] / [`writer`]: file entry points
//! - [`csv_import`]: building datasets from directories of CSV traces

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod codec;
pub mod csv_import;
pub mod dataset;
pub mod error;
pub mod instrument;
pub mod metadata;
pub mod reader;
pub mod sample;
pub mod trace;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::codec::JsonCodec;
    pub use crate::csv_import::load_csv_traces;
    pub use crate::dataset::Dataset;
    pub use crate::error::OpenFretError;
    pub use crate::instrument::InstrumentDetails;
    pub use crate::metadata::Metadata;
    pub use crate::reader::read_dataset;
    pub use crate::sample::SampleDetails;
    pub use crate::trace::Trace;
    pub use crate::writer::write_dataset;
}
