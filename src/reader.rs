//! Reading openFRET datasets from disk.

use std::fs;
use std::path::Path;

use crate::codec::JsonCodec;
use crate::dataset::Dataset;
use crate::error::OpenFretError;

/// Read an openFRET dataset from a JSON file.
///
/// Fails with [`OpenFretError::Io`] if the path cannot be read, with
/// [`OpenFretError::Parse`] if the contents are not well-formed JSON, or
/// with a decode error if required members are missing or mistyped.
///
/// ```rust,no_run
/// let dataset = openfret::reader::read_dataset("fret_data.json")?;
/// # Ok::<(), openfret::error::OpenFretError>(())
/// ```
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, OpenFretError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| OpenFretError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Dataset::decode(&value)
}
