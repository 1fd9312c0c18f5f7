/// Transcription service port trait
///
/// Defines the interface for ASR (Automatic Speech Recognition) services.
/// Implementations: Whisper (OpenAI-compatible endpoints)
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Represents a transcription result with segment timings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Full transcript text
    pub text: String,

    /// Individual segments with start/end timestamps
    pub segments: Vec<TranscriptSegment>,
}

/// Represents a timed span of the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// The transcribed text for this segment
    pub text: String,

    /// Start time in seconds from the beginning of the recording
    pub start_secs: f64,

    /// End time in seconds from the beginning of the recording
    pub end_secs: f64,
}

/// Port trait for transcription services (ASR)
#[async_trait]
pub trait TranscriptionServicePort: Send + Sync {
    /// Transcribe audio from a file path
    async fn transcribe_file(&self, audio_path: &str) -> Result<TranscriptionResult>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
