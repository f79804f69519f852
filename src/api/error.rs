use thiserror::Error;

/// Failure of a call to the backend.
///
/// Every variant is handled the same way by the store: logged, surfaced in
/// the status line, never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, refused connection, reset).
    #[error("Request to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status.
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// Response body was not the expected JSON.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_request() {
        let err = ApiError::Status {
            method: "POST",
            url: "http://localhost:8000/flashcards".to_string(),
            status: 422,
        };
        assert_eq!(
            err.to_string(),
            "POST http://localhost:8000/flashcards returned 422"
        );
        assert_eq!(err.status(), Some(422));
    }
}
