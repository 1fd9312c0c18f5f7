//! Sentence-aware transcript chunking
//!
//! Splits a transcript into chunks that respect a character budget without
//! breaking sentences when avoidable. Sentences longer than the budget are
//! hard-split into budget-sized slices. Feeds the per-chunk summarization
//! pass in `crate::pipeline::reduce`.

use crate::error::{AppError, Result};
use crate::pipeline::text::{char_len, char_windows};
use regex::Regex;

/// A sentence boundary is a run of terminal punctuation followed by
/// whitespace. The regex crate has no lookbehind, so the match covers the
/// punctuation too and the splitter re-attaches it to the left-hand sentence.
const SENTENCE_BOUNDARY: &str = r"[.?!]+\s+";

/// Splits `text` at sentence boundaries, keeping the terminal punctuation
/// with its sentence and dropping the inter-sentence whitespace.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let boundary = Regex::new(SENTENCE_BOUNDARY).expect("sentence boundary regex is valid");
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in boundary.find_iter(text) {
        let punctuation = m.as_str().trim_end();
        let end = m.start() + punctuation.len();
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Greedily packs whole sentences into chunks of at most `max_chars`
/// characters. A sentence that alone exceeds the budget flushes the pending
/// chunk and is hard-split into `max_chars`-sized slices. Chunk order follows
/// transcript order and no chunk is empty.
pub fn chunk_by_sentences(text: &str, max_chars: usize) -> Result<Vec<String>> {
    if max_chars == 0 {
        return Err(AppError::InvalidInput(
            "chunk size must be greater than zero".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for sentence in split_sentences(text) {
        let sentence_chars = char_len(sentence);
        if sentence_chars > max_chars {
            if !current.trim().is_empty() {
                chunks.push(current.trim().to_string());
            }
            current.clear();
            current_chars = 0;
            for slice in char_windows(sentence, max_chars) {
                let slice = slice.trim();
                if !slice.is_empty() {
                    chunks.push(slice.to_string());
                }
            }
        } else if current_chars + sentence_chars + 1 <= max_chars {
            // The +1 accounts for the joining space.
            current.push(' ');
            current.push_str(sentence);
            current_chars += sentence_chars + 1;
        } else {
            if !current.trim().is_empty() {
                chunks.push(current.trim().to_string());
            }
            current.clear();
            current.push_str(sentence);
            current_chars = sentence_chars;
        }
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    Ok(chunks)
}
