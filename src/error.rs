use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqError {
    #[error("open input '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read rune: invalid UTF-8 at byte offset {offset}")]
    Decode { offset: u64 },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("load exclusion list '{path}': {source}")]
    ExclusionLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Atomic Persist Error: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type FreqResult<T> = Result<T, FreqError>;
