use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ToolSpec;
use crate::gemini::error::ExecuteError;
use crate::gemini::types::ExecutionResult;
use crate::keys::ApiKey;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Fixed sampling parameters, applied to every tool invocation. Tools are
// single-shot templates; per-call tuning is deliberately not exposed.
const TEMPERATURE: f32 = 0.5;
const TOP_P: f32 = 0.9;
const TOP_K: u32 = 40;

/// Dispatches single `generateContent` calls and folds every failure mode
/// into the returned [`ExecutionResult`]. The credential is passed per
/// call; the client holds no key state of its own.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a client. `timeout` caps each request end to end; `None`
    /// waits on the provider indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint base, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run one tool against one prompt. Never fails outright: transport
    /// errors, bad statuses, and provider-side rejections all come back
    /// as the `error` field of the result.
    pub async fn execute(
        &self,
        tool: &ToolSpec,
        prompt: &str,
        key: Option<&ApiKey>,
    ) -> ExecutionResult {
        let Some(key) = key else {
            return ExecutionResult::failure(ExecuteError::MissingKey);
        };

        let request = GenerateContentRequest {
            system_instruction: InstructionBlock {
                parts: vec![TextPart {
                    text: tool.system_instruction.to_string(),
                }],
            },
            contents: vec![UserTurn {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url,
            tool.model.id(),
            key.reveal()
        );

        debug!(tool = tool.id, model = tool.model.id(), "dispatching generateContent");

        let response = match self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(?e, "generateContent call failed");
                return ExecutionResult::failure(ExecuteError::Transport(e.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return ExecutionResult::failure(ExecuteError::Transport(e.to_string()));
            }
        };

        if !status.is_success() {
            debug!(%status, body = %body, "generateContent returned error status");
            return ExecutionResult::failure(ExecuteError::Http {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<GenerateContentResponse>(&body) {
            Ok(parsed) => normalize(parsed),
            Err(e) => ExecutionResult::failure(ExecuteError::Transport(e.to_string())),
        }
    }
}

/// Collapse the upstream response shape into a uniform result, in priority
/// order: top-level error, then prompt-feedback block, then the first
/// candidate's parts. Empty-string fields count as absent throughout.
fn normalize(response: GenerateContentResponse) -> ExecutionResult {
    if let Some(message) = response
        .error
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
    {
        return ExecutionResult::failure(ExecuteError::Api(message));
    }

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
        .filter(|reason| !reason.is_empty())
    {
        return ExecutionResult::failure(ExecuteError::Blocked(reason));
    }

    // Only the first candidate carries the answer; alternates are ignored.
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    let joined = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let audio_data = parts.iter().find_map(|part| {
        part.inline_data
            .as_ref()
            .and_then(|inline| inline.data.clone())
            .filter(|data| !data.is_empty())
    });

    if audio_data.is_some() {
        let mime = parts
            .iter()
            .find_map(|part| part.inline_data.as_ref()?.mime_type.as_deref());
        debug!(?mime, "candidate carried inline audio");
    }

    ExecutionResult {
        content: joined.trim().to_string(),
        audio_data,
        error: None,
    }
}

// generateContent wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: InstructionBlock,
    contents: Vec<UserTurn>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct InstructionBlock {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct UserTurn {
    role: String,
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}
