//! Building a dataset from a directory of per-condition CSV traces.
//!
//! Expected layout, one subdirectory per condition label and one file per
//! trace:
//!
//! ```text
//! fret_data_csv/
//! ├── condition_A/
//! │   ├── trace1.csv
//! │   └── trace2.csv
//! └── condition_B/
//!     └── trace3.csv
//! ```
//!
//! The header row names each column's channel type; every column becomes
//! one channel's intensity sequence.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::warn;

use crate::channel::Channel;
use crate::dataset::Dataset;
use crate::error::OpenFretError;
use crate::trace::Trace;

/// Load FRET traces from CSV files under `root` into a dataset.
///
/// The dataset title is the root directory's file name. Each CSV file
/// becomes one trace whose metadata records the condition label (its
/// subdirectory name) and the file name. Non-numeric cells are skipped
/// with a warning; channels with no valid samples are dropped, and files
/// yielding no channels are skipped entirely.
pub fn load_csv_traces<P: AsRef<Path>>(root: P) -> Result<Dataset, OpenFretError> {
    let root = root.as_ref();
    let title = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());
    let mut dataset = Dataset::new(&title);

    for label_dir in sorted_entries(root)? {
        if !label_dir.is_dir() {
            continue;
        }
        let label = label_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        for file in sorted_entries(&label_dir)? {
            let is_csv = file
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
            if !is_csv {
                continue;
            }
            if let Some(trace) = read_trace_csv(&file, &label)? {
                dataset.traces.push(trace);
            }
        }
    }

    Ok(dataset)
}

/// Directory iteration order is platform-dependent; sort for reproducible
/// trace order.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, OpenFretError> {
    let io_err = |source: std::io::Error| OpenFretError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(&io_err)? {
        entries.push(entry.map_err(&io_err)?.path());
    }
    entries.sort();
    Ok(entries)
}

/// Read one CSV file as a trace, or `None` if it yields no channels.
fn read_trace_csv(path: &Path, label: &str) -> Result<Option<Trace>, OpenFretError> {
    let file = File::open(path).map_err(|source| OpenFretError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        for (i, cell) in record.iter().enumerate().take(headers.len()) {
            match cell.trim().parse::<f64>() {
                Ok(value) => columns[i].push(value),
                Err(_) => warn!(
                    "skipping non-numeric value {:?} in {}",
                    cell,
                    path.display()
                ),
            }
        }
    }

    let channels: Vec<Channel> = headers
        .iter()
        .zip(columns)
        .filter(|(_, column)| !column.is_empty())
        .map(|(name, column)| Channel::new(name, column))
        .collect();

    if channels.is_empty() {
        warn!("no valid data channels in {}", path.display());
        return Ok(None);
    }

    let mut trace = Trace::new(channels);
    trace.metadata.insert("label", label);
    if let Some(name) = path.file_name() {
        trace.metadata.insert("filename", name.to_string_lossy().into_owned());
    }
    if !trace.has_uniform_channel_lengths() {
        warn!(
            "channels in {} are not all of equal length",
            path.display()
        );
    }
    Ok(Some(trace))
}
