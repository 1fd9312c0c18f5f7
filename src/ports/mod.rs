/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod chat;
pub mod generation;
pub mod summarization;
pub mod tokenizer;
pub mod transcription;

#[cfg(test)]
pub mod mocks;

pub use chat::ChatCompletionPort;
pub use generation::GenerationModelPort;
pub use summarization::SummarizationModelPort;
pub use tokenizer::TokenizerPort;
pub use transcription::{TranscriptSegment, TranscriptionResult, TranscriptionServicePort};

#[cfg(test)]
pub use tokenizer::MockTokenizerPort;
