//! Errors raised by external tool invocations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("go list failed for repo {repository}: {status} (it returned {stderr:?})")]
    ListFailed {
        repository: String,
        status: String,
        stderr: String,
    },

    #[error("malformed go list output for repo {repository}: {source}")]
    MalformedListing {
        repository: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{command}` produced output that is not UTF-8")]
    NonUtf8 { command: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_failed_embeds_stderr() {
        let err = ToolError::ListFailed {
            repository: "foo".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "go: no modules\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"go list failed for repo foo: exit status: 1 (it returned "go: no modules\n")"#
        );
    }
}
