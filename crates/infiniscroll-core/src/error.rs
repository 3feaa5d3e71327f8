use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrollError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Load cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScrollError {
    /// Short text suitable for a single footer row.
    pub fn summary(&self) -> String {
        match self {
            ScrollError::Transport(_) => "network unreachable".to_string(),
            ScrollError::Status { status, .. } => format!("server returned {}", status),
            ScrollError::Decode(_) => "unexpected response".to_string(),
            other => other.to_string(),
        }
    }
}
