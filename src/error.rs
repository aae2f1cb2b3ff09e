use thiserror::Error;

#[derive(Error, Debug)]
pub enum CricketError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("store unavailable after waiting {waited_ms} ms: {path}")]
    StoreUnavailable { path: String, waited_ms: u64 },

    #[error("store file is corrupt: {0}")]
    StoreCorrupt(String),

    #[error("match not found: {0}")]
    MatchNotFound(String),

    #[error("{0} is not a Man of the Match candidate")]
    UnknownCandidate(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CricketError>;
