//! Model service adapters
//!
//! Implementations of the model port traits for various providers:
//! - Hugging Face Inference API (summarization and generation)
//! - OpenAI (chat-completion meeting notes)

pub mod hf_inference;
pub mod openai;

pub use hf_inference::HfInferenceService;
pub use openai::OpenAIChatService;
