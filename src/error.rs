use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CensorkitError {
    #[error("invalid pattern for word '{word}': {reason}")]
    Pattern { word: String, reason: String },

    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CensorkitError {
    /// The offending word, for pattern errors.
    pub fn word(&self) -> Option<&str> {
        match self {
            CensorkitError::Pattern { word, .. } => Some(word),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CensorkitError>;
