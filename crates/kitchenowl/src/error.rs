//! Error types for the KitchenOwl client

use thiserror::Error;

/// Result type for KitchenOwl client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`KitchenOwlClient`](crate::KitchenOwlClient) operations
///
/// Every failure falls into exactly one of three kinds: the server rejected
/// the token, the request failed, or the request ran past its timeout.
#[derive(Debug, Error)]
pub enum Error {
    /// The bearer token is missing, invalid or malformed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request failed or the response could not be used
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,
}

impl Error {
    /// Whether this is an authentication failure (HTTP 401 or 422)
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Whether this is a request failure
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(RequestError::Transport(err))
        }
    }
}

/// Authentication failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// HTTP 401: no valid token was presented
    #[error("Login not possible: not authorized")]
    NotAuthorized,
    /// HTTP 422: the token could not be parsed by the server
    #[error("Login not possible: authorization incorrect, please check your authorization token")]
    InvalidToken,
}

/// Request failures
#[derive(Debug, Error)]
pub enum RequestError {
    /// Server answered with a status other than the one the operation expects
    ///
    /// Usually a non-2xx status. [`test_connection`](crate::KitchenOwlClient::test_connection)
    /// also reports a 2xx other than 200 this way.
    #[error("HTTP error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Connection, DNS or protocol failure
    #[error("Error during request: {0}")]
    Transport(#[source] reqwest::Error),

    /// JSON was expected but the server sent something else
    #[error("Expected JSON response from server, got content type {content_type:?}")]
    UnexpectedContentType {
        /// Value of the `Content-Type` response header
        content_type: String,
        /// Raw response body
        body: String,
    },

    /// JSON body does not match the expected record shape
    #[error("Unexpected response shape: {source}")]
    Decode {
        /// Underlying decode error
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Base URL and path do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
