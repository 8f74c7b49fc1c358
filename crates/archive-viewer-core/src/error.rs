//! Error types for the viewer core.
//!
//! - [`ApiError`] - archive submission failures (network, HTTP, server, decode)
//! - [`LoadError`] - image resource load failures (thumbnail or full size)

use thiserror::Error;

/// Archive submission errors.
///
/// Each variant renders to the single user-visible message shown in place
/// of the browser view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success status without a server-supplied error message.
    #[error("Server error: {status} {status_text}")]
    Http { status: u16, status_text: String },
    /// Error message reported by the extraction backend.
    #[error("{0}")]
    Server(String),
    /// Response body was not the expected JSON shape.
    #[error("Invalid server response: {0}")]
    Decode(String),
}

/// Image load errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The resource could not be fetched or decoded.
    #[error("Image failed to load: {0}")]
    Failed(String),
    /// The resource did not finish loading in time.
    #[error("Image load timed out")]
    Timeout,
    /// The host cannot load images (no browser window).
    #[error("Image loading unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::Http {
                status: 502,
                status_text: "Bad Gateway".to_string()
            }
            .to_string(),
            "Server error: 502 Bad Gateway"
        );
        assert_eq!(
            ApiError::Server("unsupported archive".to_string()).to_string(),
            "unsupported archive"
        );
    }
}
