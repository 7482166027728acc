use crate::gemini::error::ExecuteError;

/// Outcome of a single tool execution. When `error` is set, `content` is
/// empty and `audio_data` is absent; an empty `content` with no error is a
/// valid (if unhelpful) success.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    /// Text parts of the first candidate, newline-joined and trimmed.
    pub content: String,
    /// Base64 payload of the first inline-data part, if the candidate
    /// carried one. Still encoded; see [`crate::audio::decode_base64`].
    pub audio_data: Option<String>,
    pub error: Option<ExecuteError>,
}

impl ExecutionResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            audio_data: None,
            error: None,
        }
    }

    pub fn failure(error: ExecuteError) -> Self {
        Self {
            content: String::new(),
            audio_data: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
