/// Tokenizer port trait
///
/// Counts tokens the way the summarization model would, so the reducer can
/// decide whether a combined summary needs a second reduction pass. Counting
/// is local and synchronous.

/// Port trait for token counting
#[cfg_attr(test, mockall::automock)]
pub trait TokenizerPort: Send + Sync {
    /// Number of model tokens `text` encodes to
    fn count_tokens(&self, text: &str) -> usize;
}
