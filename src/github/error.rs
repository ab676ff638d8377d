//! Errors raised while talking to the hosting API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {url}: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url}: want {want}, got {got}: {body}")]
    UnexpectedStatus {
        method: &'static str,
        url: String,
        want: u16,
        got: u16,
        body: String,
    },

    #[error("{method} {url}: malformed response: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message() {
        let err = ApiError::UnexpectedStatus {
            method: "GET",
            url: "https://api.github.com/users/astrophena/repos".to_string(),
            want: 200,
            got: 401,
            body: r#"{"message":"Bad credentials"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"GET https://api.github.com/users/astrophena/repos: want 200, got 401: {"message":"Bad credentials"}"#
        );
    }

    #[test]
    fn test_decode_message_names_url() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ApiError::Decode {
            method: "GET",
            url: "https://example.test/contents".to_string(),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("GET https://example.test/contents: malformed response"));
    }
}
