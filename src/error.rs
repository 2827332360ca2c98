use std::path::PathBuf;

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;

/// Errors returned by every fallible operation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base URL and path did not compose into a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The API token cannot be carried in an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// The request never got a response (DNS, refused connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    ///
    /// The body is kept verbatim; the service sends a JSON error document but
    /// it is not parsed here.
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// A JSON body could not be encoded or decoded.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read config from {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("no API token configured")]
    MissingToken,
}

impl Error {
    /// Status code of an [`Error::Http`], if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
