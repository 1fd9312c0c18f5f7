/// Summarization model port trait
///
/// Defines the interface for abstractive summarization models.
/// Implementations: Hugging Face Inference API (BART-style models)
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for summarization models
#[async_trait]
pub trait SummarizationModelPort: Send + Sync {
    /// Summarize `text` into a completion of roughly `min_length` to
    /// `max_length` model tokens. Remote failures, timeouts, and inputs the
    /// model cannot handle all surface as `AppError::ModelInference`.
    async fn summarize(&self, text: &str, max_length: u32, min_length: u32) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
