use thiserror::Error;

/// Why a tool execution failed. Variants are tagged so callers can branch
/// on the failure kind (notably the HTTP status) without parsing the
/// rendered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    /// No credential was available; no request was sent.
    #[error("Missing Gemini API key. Set GEMINI_API_KEY or store one with `promptly key set`.")]
    MissingKey,

    /// Non-success HTTP status. The body is preserved verbatim.
    #[error("Request failed ({status}): {body}")]
    Http { status: u16, body: String },

    /// The request never completed or the response was not valid JSON.
    /// Carries the underlying error's own message.
    #[error("{0}")]
    Transport(String),

    /// Structured error reported inside a 200 response body, verbatim.
    #[error("{0}")]
    Api(String),

    /// The prompt was rejected by the provider's safety filters.
    #[error("Request blocked: {0}")]
    Blocked(String),
}

impl ExecuteError {
    /// HTTP status code, when this failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the credential itself was rejected. Callers should drop
    /// the key and re-authorize rather than retry.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_renders_status_and_body() {
        let error = ExecuteError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (500): boom");
    }

    #[test]
    fn blocked_error_renders_reason() {
        let error = ExecuteError::Blocked("SAFETY".to_string());
        assert_eq!(error.to_string(), "Request blocked: SAFETY");
    }

    #[test]
    fn auth_failure_covers_401_and_403_only() {
        for status in [401, 403] {
            let error = ExecuteError::Http {
                status,
                body: String::new(),
            };
            assert!(error.is_auth_failure(), "{status} should be an auth failure");
        }

        for status in [400, 404, 429, 500] {
            let error = ExecuteError::Http {
                status,
                body: String::new(),
            };
            assert!(!error.is_auth_failure(), "{status} is not an auth failure");
        }

        assert!(!ExecuteError::MissingKey.is_auth_failure());
        assert!(!ExecuteError::Api("401".to_string()).is_auth_failure());
    }

    #[test]
    fn only_http_errors_carry_a_status() {
        assert_eq!(
            ExecuteError::Http {
                status: 429,
                body: String::new()
            }
            .status(),
            Some(429)
        );
        assert_eq!(ExecuteError::MissingKey.status(), None);
        assert_eq!(ExecuteError::Transport("timed out".to_string()).status(), None);
        assert_eq!(ExecuteError::Blocked("SAFETY".to_string()).status(), None);
    }
}
