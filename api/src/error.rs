//! Error type shared by every resource fetch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Http { status: u16, url: String },

    #[error("could not decode the {resource} payload: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;
