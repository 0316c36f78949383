/// Error types for loading the site's JSON resources
use thiserror::Error;

/// Why a JSON resource could not be turned into page content.
///
/// Every variant ends up as the same user-facing message; the distinction
/// only matters for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Network request for {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-2xx status
    #[error("Request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON document we expected
    #[error("Malformed response body: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::LoadError;

    #[test]
    fn test_serde_error_becomes_malformed() {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_status_message_names_url_and_code() {
        let err = LoadError::Status {
            url: "data/papers.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Request for data/papers.json returned HTTP 404"
        );
    }
}
