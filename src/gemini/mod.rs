//! Thin client for the Gemini `generateContent` REST API.
//!
//! Every call is stateless: the supplied history is rebuilt into a fresh
//! `contents` list, the new message is appended as the final user turn, and
//! the first candidate's text is returned. One attempt, no retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GatewayError;
use crate::model::message::Message;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Seam between the HTTP gateway and the model backend. Handlers only ever
/// see this trait, so tests can swap in a stub.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn reply(&self, history: &[Message], message: &str) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Reads `GEMINI_API_KEY` (required) and `GEMINI_MODEL` (optional) from
    /// the environment. A missing key is fatal at startup.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = dotenvy::var("GEMINI_API_KEY").map_err(|_| {
            GatewayError::Config("No API key found. Please set GEMINI_API_KEY".into())
        })?;
        let model = dotenvy::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/models/{}:generateContent", self.model)
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn reply(&self, history: &[Message], message: &str) -> Result<String, GatewayError> {
        let body = GenerateContentRequest {
            contents: build_contents(history, message),
        };
        debug!(model = %self.model, turns = body.contents.len(), "calling generateContent");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let text = format!("gemini returned {status}: {detail}");
            return Err(if status.is_client_error() {
                GatewayError::Validation(text)
            } else {
                GatewayError::Upstream(text)
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text()
    }
}

/// History turns in conversation order, then the new message as the final
/// user turn. Roles are coerced to the two values Gemini accepts.
fn build_contents(history: &[Message], message: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = history.iter().map(Content::from_turn).collect();
    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part {
            text: message.to_string(),
        }],
    });
    contents
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn from_turn(msg: &Message) -> Self {
        Self {
            role: msg.normalized_role().to_string(),
            parts: vec![Part {
                text: msg.content.clone(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GatewayError> {
        let content = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .ok_or_else(|| GatewayError::Upstream("response carried no candidates".into()))?;

        let text: String = content.parts.into_iter().map(|part| part.text).collect();
        if text.is_empty() {
            return Err(GatewayError::Upstream("response candidate had no text".into()));
        }
        Ok(text)
    }
}
