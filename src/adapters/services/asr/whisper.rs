//! Whisper transcription service adapter
//!
//! Implements the TranscriptionServicePort against an OpenAI-compatible
//! `/audio/transcriptions` endpoint. Works with api.openai.com as well as
//! self-hosted Whisper servers that mirror the API. Requests verbose JSON
//! so segment timings come back alongside the full text.

use crate::error::{AppError, Result};
use crate::ports::transcription::{TranscriptSegment, TranscriptionResult, TranscriptionServicePort};
use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

pub const DEFAULT_WHISPER_MODEL: &str = "whisper-1";

/// Whisper service implementation
pub struct WhisperService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct VerboseTranscriptionResponse {
    text: String,
    #[serde(default)]
    segments: Vec<VerboseSegment>,
}

#[derive(Debug, Deserialize)]
struct VerboseSegment {
    start: f64,
    end: f64,
    text: String,
}

impl WhisperService {
    /// Create a new Whisper service with the given API key
    pub fn new(api_key: String) -> Self {
        // Transcription of long recordings can take minutes.
        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url: crate::adapters::services::llm::openai::OPENAI_API_BASE.to_string(),
            model: DEFAULT_WHISPER_MODEL.to_string(),
        }
    }

    /// Override the API base URL (for self-hosted Whisper servers)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the transcription model
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    fn parse_response(response: VerboseTranscriptionResponse) -> TranscriptionResult {
        let segments = response
            .segments
            .into_iter()
            .map(|s| TranscriptSegment {
                text: s.text.trim().to_string(),
                start_secs: s.start,
                end_secs: s.end,
            })
            .collect();

        TranscriptionResult {
            text: response.text,
            segments,
        }
    }
}

#[async_trait]
impl TranscriptionServicePort for WhisperService {
    async fn transcribe_file(&self, audio_path: &str) -> Result<TranscriptionResult> {
        log::info!("Transcribing {} with {}", audio_path, self.model);

        let mut file = File::open(audio_path)
            .await
            .map_err(|e| AppError::Transcription(format!("Failed to open audio file: {}", e)))?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .await
            .map_err(|e| AppError::Transcription(format!("Failed to read audio file: {}", e)))?;

        log::info!("Audio file size: {} bytes", buffer.len());

        let file_name = Path::new(audio_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(buffer).file_name(file_name))
            .text("model", self.model.clone())
            .text("response_format", "verbose_json");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Transcription(format!("Transcription request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Transcription(format!(
                "Transcription failed ({}): {}",
                status, error_text
            )));
        }

        let verbose: VerboseTranscriptionResponse = response.json().await.map_err(|e| {
            AppError::Transcription(format!("Failed to parse transcription response: {}", e))
        })?;

        let result = Self::parse_response(verbose);
        log::info!(
            "Transcription complete: {} characters, {} segments",
            result.text.chars().count(),
            result.segments.len()
        );

        Ok(result)
    }

    fn provider_name(&self) -> &str {
        "whisper"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
