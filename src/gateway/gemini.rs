use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GenerateError;
use super::{GenerationRequest, TextGenerator};
use crate::utils::get_api_key;

/// Model used when none is given on the command line
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// [`TextGenerator`] backed by the Gemini `generateContent` REST endpoint
pub struct GeminiClient {
    http: Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, GenerateError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            model: model.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client reading the credential from the environment
    pub fn from_env(model: Option<String>) -> Result<Self, GenerateError> {
        let api_key = get_api_key().ok_or(GenerateError::MissingApiKey)?;
        Self::new(model.unwrap_or_else(|| DEFAULT_MODEL.to_string()), api_key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url.trim_end_matches('/'), self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<Option<String>, GenerateError> {
        let payload = build_payload(request);
        debug!(model = %self.model, prompt_len = request.prompt.len(), "sending generateContent");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        parse_response_text(&body)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

fn build_payload(request: &GenerationRequest) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: &request.system_instruction }],
        },
        contents: vec![Content { role: Some("user"), parts: vec![Part { text: &request.prompt }] }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
            thinking_config: request
                .disable_thinking
                .then_some(ThinkingConfig { thinking_budget: 0 }),
        },
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
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
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// Concatenate the non-thought text parts of the first candidate
fn parse_response_text(body: &str) -> Result<Option<String>, GenerateError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let texts: Vec<String> = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if texts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(texts.concat()))
    }
}

fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}
