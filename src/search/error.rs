use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// No resolved address to search around; the request is never sent
    #[error("resolved address is empty")]
    MissingAddress,

    /// Connection failed, timed out, or the client could not be built
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status
    #[error("search endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not a list of property records
    #[error("malformed search response: {0}")]
    Parse(#[from] serde_json::Error),
}
