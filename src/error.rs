//! Error types for openFRET encoding, decoding, and file transport.

use std::path::PathBuf;

/// Errors that can occur while decoding, reading, or writing openFRET data
#[derive(Debug, thiserror::Error)]
pub enum OpenFretError {
    /// A required member was absent from a JSON object during decode
    #[error("missing required field `{field}` in {entity}")]
    MissingField {
        /// Entity whose codec detected the absence
        entity: &'static str,
        /// Member name, prefixed with positional context as the error
        /// propagates (e.g. `traces[2].channels[0].data`)
        field: String,
    },

    /// A member was present but held the wrong JSON kind
    #[error("field `{field}`: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Member name, prefixed with positional context
        field: String,
        /// JSON kind the codec required
        expected: &'static str,
        /// JSON kind actually found
        actual: &'static str,
    },

    /// Input bytes are not well-formed JSON
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// File open/read/write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the file being read or written
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// CSV parsing error during trace import
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

impl OpenFretError {
    /// Prefix a decode error with the member or element that was being
    /// decoded when it occurred. I/O and parse errors pass through
    /// unmodified.
    pub(crate) fn within(self, parent: &str) -> Self {
        match self {
            Self::MissingField { entity, field } => Self::MissingField {
                entity,
                field: format!("{parent}.{field}"),
            },
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => Self::TypeMismatch {
                field: format!("{parent}.{field}"),
                expected,
                actual,
            },
            other => other,
        }
    }
}
