//! Action-item extraction
//!
//! Slides fixed-size character windows over the transcript, prompts an
//! instruction-following model per window, and merges the bullet-formatted
//! outputs. Items repeated across windows are dropped, keeping the first
//! occurrence in transcript order. A window whose extraction fails is
//! skipped with a warning rather than failing the whole run.

use crate::domain::prompts::PromptTemplates;
use crate::error::{AppError, Result};
use crate::pipeline::text::{char_len, char_windows};
use crate::ports::GenerationModelPort;
use std::collections::HashSet;
use std::sync::Arc;

/// Window sizing and generation bounds for extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Characters per extraction window
    pub window_chars: usize,

    /// Token cap for each window's generated output
    pub max_gen_len: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            window_chars: 500,
            max_gen_len: 200,
        }
    }
}

/// Windowed action-item extractor with cross-window deduplication
pub struct ActionItemExtractor {
    model: Arc<dyn GenerationModelPort>,
    config: ExtractorConfig,
}

impl ActionItemExtractor {
    pub fn new(model: Arc<dyn GenerationModelPort>, config: ExtractorConfig) -> Self {
        Self { model, config }
    }

    /// Extract deduplicated action items in first-occurrence order.
    pub async fn extract_actions(&self, transcript: &str) -> Result<Vec<String>> {
        if self.config.window_chars == 0 {
            return Err(AppError::InvalidInput(
                "extraction window size must be greater than zero".to_string(),
            ));
        }

        let windows = char_windows(transcript, self.config.window_chars);
        let mut raw_outputs = Vec::new();
        for (idx, window) in windows.iter().enumerate() {
            log::info!(
                "Extracting action items from window {}/{} ({} characters)",
                idx + 1,
                windows.len(),
                char_len(window)
            );
            let prompt = PromptTemplates::action_items().replace("{transcript}", window);
            match self.model.generate(&prompt, self.config.max_gen_len).await {
                Ok(output) => raw_outputs.push(output),
                Err(e) => log::warn!(
                    "Action extraction on {} failed for window {}/{}, skipping: {}",
                    self.model.provider_name(),
                    idx + 1,
                    windows.len(),
                    e
                ),
            }
        }

        Ok(dedup_bullet_items(&raw_outputs.join("\n")))
    }

    /// Extract action items and render them as a `- ` bullet list.
    pub async fn extract_unique_actions(&self, transcript: &str) -> Result<String> {
        let items = self.extract_actions(transcript).await?;
        Ok(format_bullets(&items))
    }
}

/// Splits combined model output on `- ` bullet markers and keeps each
/// trimmed item once, in first-occurrence order.
pub(crate) fn dedup_bullet_items(combined: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for fragment in combined.split("- ") {
        let item = fragment.trim();
        if item.is_empty() {
            continue;
        }
        if seen.insert(item.to_string()) {
            unique.push(item.to_string());
        }
    }
    unique
}

/// Renders items as one `- ` bullet per line. No leading or trailing blanks.
pub fn format_bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
