use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcaError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRecord {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("sample `{name}` has dimension {found}, expected {expected}")]
    DimensionMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("requested {requested} components but the basis only has {available}")]
    TooManyComponents { requested: usize, available: usize },

    #[error("input matrix contains a non-finite value at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    #[error("component {index} has singular value {value:e}, cannot normalize a rank-deficient direction")]
    DegenerateComponent { index: usize, value: f64 },

    #[error("SVD did not converge")]
    SvdNotConverged,
}

pub type Result<T> = std::result::Result<T, PcaError>;
