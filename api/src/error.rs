//! Error surfacing for backend calls.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`crate::client::ApiClient`] operations.
///
/// A non-2xx response becomes [`ApiError::Backend`] carrying the server's
/// `detail` message verbatim, so the UI can show it unchanged. Requests that
/// never produce a response (refused connection, DNS failure) surface as
/// [`ApiError::Transport`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// JSON body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_displays_the_detail_only() {
        let err = ApiError::Backend {
            status: 404,
            detail: "Student with ID 's9' not found".to_string(),
        };
        assert_eq!(err.to_string(), "Student with ID 's9' not found");
    }

    #[test]
    fn error_body_tolerates_a_missing_detail_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_empty());
    }
}
