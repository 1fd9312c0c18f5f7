//! OpenAI chat-completion service adapter
//!
//! Implements the ChatCompletionPort for OpenAI's API. One request carries
//! the whole transcript; the formatted meeting notes come back verbatim.
//! Works against any endpoint that mirrors the chat-completions API.

use crate::domain::PromptTemplates;
use crate::error::{AppError, Result};
use crate::ports::chat::ChatCompletionPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Low temperature keeps the notes close to the transcript
const NOTES_TEMPERATURE: f32 = 0.3;

/// OpenAI chat service implementation
pub struct OpenAIChatService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAIChatService {
    /// Create a new OpenAI chat service with the given API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url: OPENAI_API_BASE.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }

    /// Override the API base URL (for OpenAI-compatible servers)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the chat model
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

#[async_trait]
impl ChatCompletionPort for OpenAIChatService {
    async fn meeting_notes(&self, transcript: &str) -> Result<String> {
        let user_prompt = PromptTemplates::meeting_notes().replace("{transcript}", transcript);
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: PromptTemplates::meeting_notes_system().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: NOTES_TEMPERATURE,
        };

        log::info!(
            "Requesting meeting notes from {} ({} transcript characters)",
            self.model,
            transcript.chars().count()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Service(format!(
                "Chat completion failed ({}): {}",
                status, error_text
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Service(format!("Failed to parse completion response: {}", e)))?;

        if completion_response.choices.is_empty() {
            return Err(AppError::Service(
                "No completion choices returned".to_string(),
            ));
        }

        let content = completion_response.choices[0].message.content.clone();
        log::info!(
            "Meeting notes generated, {} characters",
            content.chars().count()
        );

        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
