//! Heuristic token counting
//!
//! Approximates the summarization model's tokenizer with the usual
//! four-characters-per-token estimate. Accurate enough for the second-pass
//! threshold check; an exact tokenizer can implement the same port.

use crate::ports::tokenizer::TokenizerPort;

/// Characters-per-token based tokenizer approximation
pub struct HeuristicTokenizer {
    chars_per_token: usize,
}

impl HeuristicTokenizer {
    pub fn new(chars_per_token: usize) -> Self {
        debug_assert!(chars_per_token > 0, "chars_per_token must be positive");
        Self { chars_per_token }
    }
}

impl Default for HeuristicTokenizer {
    fn default() -> Self {
        Self::new(4)
    }
}

impl TokenizerPort for HeuristicTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        text.chars().count().div_ceil(self.chars_per_token)
    }
}
