//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::generation::GenerationModelPort;
use crate::ports::summarization::SummarizationModelPort;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded summarization call
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizeCall {
    pub text: String,
    pub max_length: u32,
    pub min_length: u32,
}

/// Scripted summarization model for testing.
///
/// Fails the first `failures` calls with a model-inference error, then
/// answers `<summary:N>` where N is the ordinal of the successful call.
/// Every call is recorded, including the failed ones.
#[derive(Clone, Default)]
pub struct ScriptedSummarizer {
    failures: u32,
    calls: Arc<Mutex<Vec<SummarizeCall>>>,
    successes: Arc<Mutex<u32>>,
}

impl ScriptedSummarizer {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SummarizeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SummarizationModelPort for ScriptedSummarizer {
    async fn summarize(&self, text: &str, max_length: u32, min_length: u32) -> Result<String> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(SummarizeCall {
                text: text.to_string(),
                max_length,
                min_length,
            });
            calls.len() as u32
        };
        if call_index <= self.failures {
            return Err(AppError::ModelInference("scripted failure".to_string()));
        }
        let mut successes = self.successes.lock().unwrap();
        *successes += 1;
        Ok(format!("<summary:{}>", successes))
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

/// Scripted generation model for testing.
///
/// Pops one scripted output per call: `Some(text)` answers with that text,
/// `None` fails with a model-inference error. Extra calls past the script
/// answer with an empty string. Prompts are recorded.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    outputs: Arc<Mutex<VecDeque<Option<String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    pub fn new(outputs: Vec<Option<&str>>) -> Self {
        Self {
            outputs: Arc::new(Mutex::new(
                outputs.into_iter().map(|o| o.map(str::to_string)).collect(),
            )),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationModelPort for ScriptedGenerator {
    async fn generate(&self, prompt: &str, _max_length: u32) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.outputs.lock().unwrap().pop_front() {
            Some(Some(output)) => Ok(output),
            Some(None) => Err(AppError::ModelInference("scripted failure".to_string())),
            None => Ok(String::new()),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_summarizer_fails_then_numbers_successes() {
        tokio_test::block_on(async {
            let model = ScriptedSummarizer::new(1);
            assert!(model.summarize("a", 130, 30).await.is_err());
            assert_eq!(model.summarize("b", 130, 30).await.unwrap(), "<summary:1>");
            assert_eq!(model.summarize("c", 130, 30).await.unwrap(), "<summary:2>");
            assert_eq!(model.call_count(), 3);
            assert_eq!(model.calls()[0].text, "a");
        });
    }

    #[test]
    fn scripted_generator_follows_its_script() {
        tokio_test::block_on(async {
            let model = ScriptedGenerator::new(vec![Some("- item"), None]);
            assert_eq!(model.generate("p1", 200).await.unwrap(), "- item");
            assert!(model.generate("p2", 200).await.is_err());
            assert_eq!(model.generate("p3", 200).await.unwrap(), "");
            assert_eq!(model.prompts(), vec!["p1", "p2", "p3"]);
        });
    }
}
