/// Chat completion port trait
///
/// Single-shot alternative to the chunked pipeline: the whole transcript
/// goes out in one request and formatted meeting notes come back.
/// Implementations: OpenAI chat completions
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for chat-completion services
#[async_trait]
pub trait ChatCompletionPort: Send + Sync {
    /// Produce meeting notes (summary, action points, speaker attributions)
    /// for the full transcript in a single request. Failures surface as
    /// `AppError::Service`.
    async fn meeting_notes(&self, transcript: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
