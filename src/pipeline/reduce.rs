//! Hierarchical summary reduction
//!
//! First pass: every transcript chunk is summarized on its own. The chunk
//! summaries are then joined with single spaces. Second pass: when the
//! joined text still exceeds a token threshold, it goes through the
//! summarizer once more with wider length bounds. At most two levels deep,
//! so the output stops shrinking at a predictable point.

use crate::error::Result;
use crate::pipeline::chunker::chunk_by_sentences;
use crate::pipeline::summarize::ResilientSummarizer;
use crate::pipeline::text::char_len;
use crate::ports::TokenizerPort;
use std::sync::Arc;

/// Length bounds and thresholds for the two reduction passes
#[derive(Debug, Clone)]
pub struct ReducerConfig {
    /// Character budget per transcript chunk
    pub chunk_max_chars: usize,

    /// Token bounds for per-chunk summaries
    pub first_pass_max_len: u32,
    pub first_pass_min_len: u32,

    /// Combined summaries above this token count get a second pass
    pub second_pass_token_threshold: usize,

    /// Token bounds for the final reduction pass
    pub second_pass_max_len: u32,
    pub second_pass_min_len: u32,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            chunk_max_chars: 1024,
            first_pass_max_len: 130,
            first_pass_min_len: 30,
            second_pass_token_threshold: 800,
            second_pass_max_len: 180,
            second_pass_min_len: 60,
        }
    }
}

/// Two-level map-reduce over transcript chunks
pub struct SummaryReducer {
    summarizer: ResilientSummarizer,
    tokenizer: Arc<dyn TokenizerPort>,
    config: ReducerConfig,
}

impl SummaryReducer {
    pub fn new(
        summarizer: ResilientSummarizer,
        tokenizer: Arc<dyn TokenizerPort>,
        config: ReducerConfig,
    ) -> Self {
        Self {
            summarizer,
            tokenizer,
            config,
        }
    }

    /// Produce a condensed summary of the whole transcript. An empty
    /// transcript summarizes to an empty string without touching the model.
    pub async fn summarize_meeting(&self, transcript: &str) -> Result<String> {
        let chunks = chunk_by_sentences(transcript, self.config.chunk_max_chars)?;
        if chunks.is_empty() {
            log::info!("Transcript is empty, nothing to summarize");
            return Ok(String::new());
        }

        let mut summaries = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            log::info!(
                "Summarizing chunk {}/{} (approx. {} characters)",
                idx + 1,
                chunks.len(),
                char_len(chunk)
            );
            let summary = self
                .summarizer
                .summarize(
                    chunk,
                    self.config.first_pass_max_len,
                    self.config.first_pass_min_len,
                )
                .await;
            summaries.push(summary);
        }

        let combined = summaries.join(" ");
        let token_count = self.tokenizer.count_tokens(&combined);
        if token_count > self.config.second_pass_token_threshold {
            log::info!(
                "Combined summary is ~{} tokens (threshold {}), running a final reduction pass",
                token_count,
                self.config.second_pass_token_threshold
            );
            return Ok(self
                .summarizer
                .summarize(
                    &combined,
                    self.config.second_pass_max_len,
                    self.config.second_pass_min_len,
                )
                .await);
        }

        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::summarize::RetryPolicy;
    use crate::ports::mocks::ScriptedSummarizer;
    use crate::ports::MockTokenizerPort;
    use std::time::Duration;

    fn fast_summarizer(model: &ScriptedSummarizer, max_attempts: u32) -> ResilientSummarizer {
        ResilientSummarizer::new(
            Arc::new(model.clone()),
            RetryPolicy {
                max_attempts,
                retry_delay: Duration::from_millis(0),
            },
        )
    }

    fn three_chunk_transcript() -> String {
        (0..70)
            .map(|i| format!("Item {:04} was discussed and noted.", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[tokio::test]
    async fn empty_transcript_summarizes_to_empty_without_model_calls() {
        let model = ScriptedSummarizer::new(0);
        let tokenizer = MockTokenizerPort::new();
        let reducer = SummaryReducer::new(
            fast_summarizer(&model, 3),
            Arc::new(tokenizer),
            ReducerConfig::default(),
        );

        let summary = reducer.summarize_meeting("").await.unwrap();

        assert_eq!(summary, "");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn short_combined_summary_skips_the_second_pass() {
        let transcript = three_chunk_transcript();
        assert_eq!(chunk_by_sentences(&transcript, 1024).unwrap().len(), 3);

        let model = ScriptedSummarizer::new(0);
        let mut tokenizer = MockTokenizerPort::new();
        tokenizer
            .expect_count_tokens()
            .withf(|text: &str| text == "<summary:1> <summary:2> <summary:3>")
            .times(1)
            .return_const(300usize);
        let reducer = SummaryReducer::new(
            fast_summarizer(&model, 3),
            Arc::new(tokenizer),
            ReducerConfig::default(),
        );

        let summary = reducer.summarize_meeting(&transcript).await.unwrap();

        assert_eq!(summary, "<summary:1> <summary:2> <summary:3>");
        assert_eq!(model.call_count(), 3);
        for call in model.calls() {
            assert_eq!(call.max_length, 130);
            assert_eq!(call.min_length, 30);
        }
    }

    #[tokio::test]
    async fn long_combined_summary_gets_exactly_one_second_pass() {
        let transcript = three_chunk_transcript();
        let model = ScriptedSummarizer::new(0);
        let mut tokenizer = MockTokenizerPort::new();
        tokenizer
            .expect_count_tokens()
            .times(1)
            .return_const(900usize);
        let reducer = SummaryReducer::new(
            fast_summarizer(&model, 3),
            Arc::new(tokenizer),
            ReducerConfig::default(),
        );

        let summary = reducer.summarize_meeting(&transcript).await.unwrap();

        assert_eq!(summary, "<summary:4>");
        let calls = model.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[3].text, "<summary:1> <summary:2> <summary:3>");
        assert_eq!(calls[3].max_length, 180);
        assert_eq!(calls[3].min_length, 60);
    }

    #[tokio::test]
    async fn token_count_at_the_threshold_does_not_trigger_a_second_pass() {
        let transcript = three_chunk_transcript();
        let model = ScriptedSummarizer::new(0);
        let mut tokenizer = MockTokenizerPort::new();
        tokenizer
            .expect_count_tokens()
            .times(1)
            .return_const(800usize);
        let reducer = SummaryReducer::new(
            fast_summarizer(&model, 3),
            Arc::new(tokenizer),
            ReducerConfig::default(),
        );

        let summary = reducer.summarize_meeting(&transcript).await.unwrap();

        assert_eq!(summary, "<summary:1> <summary:2> <summary:3>");
        assert_eq!(model.call_count(), 3);
    }

    #[tokio::test]
    async fn a_flaky_chunk_degrades_instead_of_failing_the_meeting() {
        let transcript = three_chunk_transcript();
        let model = ScriptedSummarizer::new(1);
        let mut tokenizer = MockTokenizerPort::new();
        tokenizer.expect_count_tokens().return_const(10usize);
        let reducer = SummaryReducer::new(
            fast_summarizer(&model, 3),
            Arc::new(tokenizer),
            ReducerConfig::default(),
        );

        let summary = reducer.summarize_meeting(&transcript).await.unwrap();

        // Chunk 1 fails once, retries, and still lands a summary.
        assert_eq!(summary, "<summary:1> <summary:2> <summary:3>");
        assert_eq!(model.call_count(), 4);
    }

    #[tokio::test]
    async fn zero_chunk_budget_is_reported_as_invalid_input() {
        let model = ScriptedSummarizer::new(0);
        let tokenizer = MockTokenizerPort::new();
        let reducer = SummaryReducer::new(
            fast_summarizer(&model, 3),
            Arc::new(tokenizer),
            ReducerConfig {
                chunk_max_chars: 0,
                ..ReducerConfig::default()
            },
        );

        let err = reducer.summarize_meeting("Some text.").await.unwrap_err();
        assert!(matches!(err, crate::error::AppError::InvalidInput(_)));
    }
}
