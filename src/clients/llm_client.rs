//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call that turns document text into a
//! structured summary.

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::Summary;
use crate::errors::SummarizeError;

/// Only the leading slice of the document is forwarded to the model.
const MAX_INPUT_CHARS: usize = 6000;
/// Length of the tldr built from a raw, non-JSON model reply.
const FALLBACK_TLDR_CHARS: usize = 160;
const TEMPERATURE: f64 = 0.2;
const REQUEST_TIMEOUT_SECS: u64 = 300;

const SUMMARY_PROMPT: &str =
    "Summarize in JSON with keys: bullets (array of 5), tldr (string). Plain English.";

/// Build the single user-message content sent to the model, truncating the
/// document to its first `MAX_INPUT_CHARS` characters.
#[must_use]
pub fn build_user_content(text: &str) -> String {
    let truncated: String = text.chars().take(MAX_INPUT_CHARS).collect();
    format!("{}\n---\n{}", SUMMARY_PROMPT, truncated)
}

/// Interpret the model's reply. Valid JSON with `bullets` and `tldr` is taken
/// as-is; anything else becomes a deterministic fallback summary so this step
/// can never fail.
#[must_use]
pub fn parse_summary(raw: &str) -> Summary {
    serde_json::from_str::<Summary>(raw).unwrap_or_else(|_| Summary {
        bullets: vec![raw.to_string()],
        tldr: raw.chars().take(FALLBACK_TLDR_CHARS).collect(),
    })
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    endpoint: String,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            endpoint: config.openai_endpoint.trim_end_matches('/').to_string(),
            model_name: config.openai_model.clone(),
        }
    }

    /// Issue one chat-completion request for the given document text.
    ///
    /// Transport failures and non-success API responses are fatal; a reply
    /// that is not valid summary JSON is recovered via `parse_summary`.
    pub async fn summarize_text(&self, text: &str) -> Result<Summary, SummarizeError> {
        let request_body = json!({
            "model": self.model_name,
            "messages": [{
                "role": "user",
                "content": build_user_content(text),
            }],
            "temperature": TEMPERATURE,
        });

        info!(
            "Requesting summary from model {} ({} chars of input)",
            self.model_name,
            text.chars().count().min(MAX_INPUT_CHARS)
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SummarizeError::HttpError(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizeError::OpenAIError(format!(
                "OpenAI API error: {}",
                error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::OpenAIError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let content = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| SummarizeError::OpenAIError("No text in response".to_string()))?;

        Ok(parse_summary(content))
    }
}
