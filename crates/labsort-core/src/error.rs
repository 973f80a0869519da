use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LabsortError {
    #[error("failed to load policy from {path}: {reason}")]
    PolicyLoad { path: PathBuf, reason: String },

    #[error("invalid policy: {0}")]
    PolicyInvalid(String),

    #[error("no substance matching '{0}' in the catalog")]
    UnknownSubstance(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
