/// Generation model port trait
///
/// Defines the interface for instruction-following text generation models,
/// used for per-window action-item extraction.
/// Implementations: Hugging Face Inference API (FLAN-style models)
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for instruction-following generation models
#[async_trait]
pub trait GenerationModelPort: Send + Sync {
    /// Run `prompt` through the model and return the generated text,
    /// capped at `max_length` model tokens. Remote failures surface as
    /// `AppError::ModelInference`.
    async fn generate(&self, prompt: &str, max_length: u32) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
