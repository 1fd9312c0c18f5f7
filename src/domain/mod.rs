/// Domain layer - core business models
///
/// These models are service-agnostic and represent the digest outputs.
pub mod models;
pub mod prompts;

pub use models::MeetingDigest;
pub use prompts::PromptTemplates;
