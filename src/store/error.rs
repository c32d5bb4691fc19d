use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API URL cannot be used as a base: {0}")]
    BaseUrl(String),
}

impl StoreError {
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Api { status, .. } => Some(*status),
            StoreError::Http(err) => err.status().map(|s| s.as_u16()),
            StoreError::BaseUrl(_) => None,
        }
    }
}
