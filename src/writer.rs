//! Writing openFRET datasets to disk.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::codec::JsonCodec;
use crate::dataset::Dataset;
use crate::error::OpenFretError;

/// Write an openFRET dataset to a JSON file, overwriting any existing
/// content.
///
/// The output is 4-space-indented UTF-8 text with a trailing newline.
/// Fails with [`OpenFretError::Io`] if the path cannot be written.
///
/// ```rust,no_run
/// use openfret::dataset::Dataset;
///
/// let dataset = Dataset::new("My FRET Experiment");
/// openfret::writer::write_dataset(&dataset, "fret_data.json")?;
/// # Ok::<(), openfret::error::OpenFretError>(())
/// ```
pub fn write_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<(), OpenFretError> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    dataset.encode().serialize(&mut ser)?;
    buf.push(b'\n');
    fs::write(path, buf).map_err(|source| OpenFretError::Io {
        path: path.to_path_buf(),
        source,
    })
}
