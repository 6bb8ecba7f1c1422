use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArxivError>;

#[derive(Debug, Error)]
pub enum ArxivError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Feed parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ArxivError {
    fn from(err: reqwest::Error) -> Self {
        ArxivError::Network(err.to_string())
    }
}
