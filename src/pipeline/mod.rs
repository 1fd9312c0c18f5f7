/// Transcript reduction pipeline
///
/// The model-agnostic core of the crate: chunking, retry-and-shrink
/// summarization, hierarchical reduction, and action-item extraction.
/// Everything here talks to models through the ports in `crate::ports`.
pub mod actions;
pub mod chunker;
pub mod reduce;
pub mod summarize;
pub mod text;

pub use actions::{format_bullets, ActionItemExtractor, ExtractorConfig};
pub use chunker::chunk_by_sentences;
pub use reduce::{ReducerConfig, SummaryReducer};
pub use summarize::{ResilientSummarizer, RetryPolicy};
