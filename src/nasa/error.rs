use reqwest::StatusCode;
use thiserror::Error;

/// Anything that went wrong reaching or interpreting the NASA API.
///
/// Never surfaces as a local failure: handlers render it as a `200 OK` body
/// `{"error": "<message>"}`. Messages never contain the request URL, so the
/// API key cannot leak through them.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {path} timed out")]
    Timeout { path: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("{status} for {path}")]
    Status { status: StatusCode, path: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Classifies a reqwest failure, stripping the URL from its message.
    pub(crate) fn from_reqwest(e: reqwest::Error, path: &str) -> Self {
        if e.is_timeout() {
            Self::Timeout { path: path.to_owned() }
        } else if e.is_decode() {
            Self::Decode(e.without_url().to_string())
        } else {
            Self::Network(e.without_url().to_string())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_code_and_path() {
        let err = UpstreamError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            path: "/planetary/apod".into(),
        };
        assert_eq!(err.to_string(), "500 Internal Server Error for /planetary/apod");
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn timeout_message() {
        let err = UpstreamError::Timeout { path: "/neo/rest/v1/feed".into() };
        assert_eq!(err.to_string(), "request to /neo/rest/v1/feed timed out");
    }
}
