//! Resilient summarization with retry-and-shrink
//!
//! Wraps a summarization model so one call always comes back with text.
//! Each failed attempt retries with the input cut to 80% of its previous
//! character length, on the assumption that oversized inputs are the usual
//! cause of inference failures. When every attempt fails, the caller gets a
//! truncated excerpt of the original input instead of an error.

use crate::error::AppError;
use crate::pipeline::text::{char_len, char_prefix};
use crate::ports::SummarizationModelPort;
use std::sync::Arc;
use std::time::Duration;

/// Characters of the original input kept when every attempt fails
const FALLBACK_PREFIX_CHARS: usize = 200;

/// Marks a fallback excerpt as truncated
const FALLBACK_SUFFIX: &str = " ...";

/// Retry behavior for one summarization call
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Model attempts before giving up
    pub max_attempts: u32,

    /// Pause between consecutive attempts
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Summarization wrapper that degrades to truncation instead of failing
pub struct ResilientSummarizer {
    model: Arc<dyn SummarizationModelPort>,
    policy: RetryPolicy,
}

impl ResilientSummarizer {
    pub fn new(model: Arc<dyn SummarizationModelPort>, policy: RetryPolicy) -> Self {
        Self { model, policy }
    }

    /// Summarize `text`, retrying on progressively shorter inputs. Always
    /// returns text: after the last failed attempt the result is the first
    /// 200 characters of the original input with a ` ...` marker.
    pub async fn summarize(&self, text: &str, max_length: u32, min_length: u32) -> String {
        let mut attempt_text = text.to_string();
        for attempt in 1..=self.policy.max_attempts {
            match self
                .model
                .summarize(&attempt_text, max_length, min_length)
                .await
            {
                Ok(summary) => return summary,
                Err(e) => {
                    let shrunk = char_len(&attempt_text) * 4 / 5;
                    self.log_failure(attempt, shrunk, &e);
                    attempt_text = char_prefix(&attempt_text, shrunk).to_string();
                    if attempt < self.policy.max_attempts {
                        tokio::time::sleep(self.policy.retry_delay).await;
                    }
                }
            }
        }

        log::warn!(
            "Summarization failed after {} attempts, falling back to a truncated excerpt",
            self.policy.max_attempts
        );
        let mut fallback = char_prefix(text, FALLBACK_PREFIX_CHARS).to_string();
        fallback.push_str(FALLBACK_SUFFIX);
        fallback
    }

    fn log_failure(&self, attempt: u32, next_chars: usize, error: &AppError) {
        if attempt < self.policy.max_attempts {
            log::warn!(
                "Summarization attempt {}/{} on {} failed ({}), retrying with {} characters",
                attempt,
                self.policy.max_attempts,
                self.model.provider_name(),
                error,
                next_chars
            );
        } else {
            log::warn!(
                "Summarization attempt {}/{} on {} failed ({})",
                attempt,
                self.policy.max_attempts,
                self.model.provider_name(),
                error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::text::char_len;
    use crate::ports::mocks::ScriptedSummarizer;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            retry_delay: Duration::from_millis(0),
        }
    }

    #[tokio::test]
    async fn first_attempt_success_passes_the_input_through_unchanged() {
        let model = ScriptedSummarizer::new(0);
        let summarizer = ResilientSummarizer::new(Arc::new(model.clone()), fast_policy(3));

        let result = summarizer.summarize("the full transcript chunk", 130, 30).await;

        assert_eq!(result, "<summary:1>");
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.calls()[0].text, "the full transcript chunk");
        assert_eq!(model.calls()[0].max_length, 130);
        assert_eq!(model.calls()[0].min_length, 30);
    }

    #[tokio::test]
    async fn each_failure_shrinks_the_next_attempt_to_80_percent() {
        let model = ScriptedSummarizer::new(2);
        let summarizer = ResilientSummarizer::new(Arc::new(model.clone()), fast_policy(3));
        let text = "m".repeat(1000);

        let result = summarizer.summarize(&text, 130, 30).await;

        assert_eq!(result, "<summary:1>");
        let lengths: Vec<usize> = model.calls().iter().map(|c| char_len(&c.text)).collect();
        assert_eq!(lengths, vec![1000, 800, 640]);
    }

    #[tokio::test]
    async fn exhausted_retries_fall_back_to_the_original_prefix() {
        let model = ScriptedSummarizer::new(u32::MAX);
        let summarizer = ResilientSummarizer::new(Arc::new(model.clone()), fast_policy(3));
        let text: String = ('a'..='z').cycle().take(300).collect();

        let result = summarizer.summarize(&text, 130, 30).await;

        assert_eq!(result, format!("{} ...", &text[..200]));
        assert_eq!(model.call_count(), 3);
    }

    #[tokio::test]
    async fn fallback_keeps_short_inputs_whole() {
        let model = ScriptedSummarizer::new(u32::MAX);
        let summarizer = ResilientSummarizer::new(Arc::new(model), fast_policy(2));

        let result = summarizer.summarize("brief notes", 130, 30).await;

        assert_eq!(result, "brief notes ...");
    }

    #[tokio::test]
    async fn zero_attempts_skip_the_model_entirely() {
        let model = ScriptedSummarizer::new(0);
        let summarizer = ResilientSummarizer::new(Arc::new(model.clone()), fast_policy(0));

        let result = summarizer.summarize("anything", 130, 30).await;

        assert_eq!(result, "anything ...");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn shrinking_counts_characters_not_bytes() {
        let model = ScriptedSummarizer::new(1);
        let summarizer = ResilientSummarizer::new(Arc::new(model.clone()), fast_policy(2));
        let text = "é".repeat(100);

        summarizer.summarize(&text, 130, 30).await;

        let calls = model.calls();
        assert_eq!(char_len(&calls[0].text), 100);
        assert_eq!(char_len(&calls[1].text), 80);
        assert_eq!(calls[1].text, "é".repeat(80));
    }
}
