use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Data source {url} responded with HTTP {status}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to parse board payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid board view: {0}")]
    InvalidView(String),
}

impl BoardError {
    /// Whether the error came from fetching or decoding the payload, as opposed
    /// to a problem detected before any request was made.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_) | Self::HttpStatus { .. } | Self::Parse(_) | Self::Io(_)
        )
    }
}
