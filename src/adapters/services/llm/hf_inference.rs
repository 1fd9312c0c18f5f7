//! Hugging Face Inference API adapter
//!
//! One HTTP client against the hosted inference endpoints, implementing
//! both model ports: abstractive summarization (BART-style models) and
//! instruction-following generation (FLAN-style models). Each model call
//! carries its own deadline via the client timeout, so a hung request
//! surfaces as a model-inference error instead of stalling the pipeline.

use crate::error::{AppError, Result};
use crate::ports::generation::GenerationModelPort;
use crate::ports::summarization::SummarizationModelPort;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const HF_API_BASE: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
pub const DEFAULT_GENERATION_MODEL: &str = "google/flan-t5-base";

/// Hugging Face Inference API service implementation
pub struct HfInferenceService {
    client: Client,
    api_token: String,
    base_url: String,
    summarization_model: String,
    generation_model: String,
}

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummarizationResponse {
    summary_text: String,
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_length: u32,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    generated_text: String,
}

impl HfInferenceService {
    /// Create a new Hugging Face inference service with the given API token
    pub fn new(api_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_token,
            base_url: HF_API_BASE.to_string(),
            summarization_model: DEFAULT_SUMMARIZATION_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
        }
    }

    /// Override the API base URL (for self-hosted inference endpoints)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the summarization model
    pub fn with_summarization_model(mut self, model: String) -> Self {
        self.summarization_model = model;
        self
    }

    /// Override the generation model
    pub fn with_generation_model(mut self, model: String) -> Self {
        self.generation_model = model;
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_token.is_empty()
    }

    async fn post_model<B: Serialize>(&self, model: &str, body: &B) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, model))
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::ModelInference(format!("Inference request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ModelInference(format!(
                "Inference failed ({}): {}",
                status, error_text
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl SummarizationModelPort for HfInferenceService {
    async fn summarize(&self, text: &str, max_length: u32, min_length: u32) -> Result<String> {
        let request_body = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length,
                min_length,
                do_sample: false,
            },
        };

        let response = self
            .post_model(&self.summarization_model, &request_body)
            .await?;

        let outputs: Vec<SummarizationResponse> = response.json().await.map_err(|e| {
            AppError::ModelInference(format!("Failed to parse summarization response: {}", e))
        })?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| AppError::ModelInference("Empty summarization response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}

#[async_trait]
impl GenerationModelPort for HfInferenceService {
    async fn generate(&self, prompt: &str, max_length: u32) -> Result<String> {
        let request_body = GenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters { max_length },
        };

        let response = self
            .post_model(&self.generation_model, &request_body)
            .await?;

        let outputs: Vec<GenerationResponse> = response.json().await.map_err(|e| {
            AppError::ModelInference(format!("Failed to parse generation response: {}", e))
        })?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| AppError::ModelInference("Empty generation response".to_string()))
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hf_service_creation() {
        let service = HfInferenceService::new("test_token".to_string());
        assert!(service.is_configured());
        assert_eq!(service.summarization_model, DEFAULT_SUMMARIZATION_MODEL);
        assert_eq!(service.generation_model, DEFAULT_GENERATION_MODEL);
    }

    #[test]
    fn test_hf_service_not_configured() {
        let service = HfInferenceService::new("".to_string());
        assert!(!service.is_configured());
    }

    #[test]
    fn test_summarization_request_shape() {
        let request = SummarizationRequest {
            inputs: "the transcript chunk",
            parameters: SummarizationParameters {
                max_length: 130,
                min_length: 30,
                do_sample: false,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["inputs"], "the transcript chunk");
        assert_eq!(value["parameters"]["max_length"], 130);
        assert_eq!(value["parameters"]["min_length"], 30);
        assert_eq!(value["parameters"]["do_sample"], false);
    }

    #[test]
    fn test_summarization_response_parsing() {
        let payload = r#"[{"summary_text": "The team agreed on the plan."}]"#;
        let outputs: Vec<SummarizationResponse> = serde_json::from_str(payload).unwrap();
        assert_eq!(outputs[0].summary_text, "The team agreed on the plan.");
    }

    #[test]
    fn test_generation_response_parsing() {
        let payload = r#"[{"generated_text": "- John will send the report"}]"#;
        let outputs: Vec<GenerationResponse> = serde_json::from_str(payload).unwrap();
        assert_eq!(outputs[0].generated_text, "- John will send the report");
    }
}
