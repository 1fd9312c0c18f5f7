//! Command-line interface and configuration
//!
//! Every knob is settable as a flag or an environment variable; a `.env`
//! file is loaded before parsing. Service credentials stay out of argv in
//! normal use and come in through the environment.

use crate::adapters::services::asr::whisper::DEFAULT_WHISPER_MODEL;
use crate::adapters::services::llm::hf_inference::{
    DEFAULT_GENERATION_MODEL, DEFAULT_SUMMARIZATION_MODEL, HF_API_BASE,
};
use crate::adapters::services::llm::openai::{DEFAULT_CHAT_MODEL, OPENAI_API_BASE};
use crate::error::{AppError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transcribe a recording, then produce a summary and action items
    Digest(DigestArgs),

    /// Produce single-shot meeting notes through a chat-completion model
    Notes(NotesArgs),
}

#[derive(Debug, Args)]
pub struct DigestArgs {
    /// Path to the meeting recording to transcribe
    #[arg(
        value_name = "AUDIO",
        required_unless_present = "from_transcript",
        conflicts_with = "from_transcript"
    )]
    pub audio_path: Option<PathBuf>,

    /// Use an existing transcript file instead of transcribing audio
    #[arg(long, value_name = "FILE")]
    pub from_transcript: Option<PathBuf>,

    /// Prefix each saved transcript line with its [HH:MM:SS] segment start
    #[arg(long)]
    pub timestamps: bool,

    /// Also write _summary.txt and _actions.txt next to the input
    #[arg(long)]
    pub save_artifacts: bool,

    /// Print the digest as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub pipeline: PipelineOpts,

    #[command(flatten)]
    pub services: ServiceOpts,
}

#[derive(Debug, Args)]
pub struct NotesArgs {
    /// Path to the meeting recording to transcribe
    #[arg(
        value_name = "AUDIO",
        required_unless_present = "from_transcript",
        conflicts_with = "from_transcript"
    )]
    pub audio_path: Option<PathBuf>,

    /// Use an existing transcript file instead of transcribing audio
    #[arg(long, value_name = "FILE")]
    pub from_transcript: Option<PathBuf>,

    /// Prefix each saved transcript line with its [HH:MM:SS] segment start
    #[arg(long)]
    pub timestamps: bool,

    /// Also write _notes.txt next to the input
    #[arg(long)]
    pub save_artifacts: bool,

    #[command(flatten)]
    pub services: ServiceOpts,
}

/// Sizes, thresholds, and retry behavior for the reduction pipeline
#[derive(Debug, Args)]
pub struct PipelineOpts {
    /// Maximum characters per summarization chunk
    #[arg(long, env = "DIGEST_CHUNK_CHARS", default_value_t = 1024)]
    pub chunk_chars: usize,

    /// Characters per action-item extraction window
    #[arg(long, env = "DIGEST_WINDOW_CHARS", default_value_t = 500)]
    pub window_chars: usize,

    /// Summarization attempts per chunk before falling back to truncation
    #[arg(long, env = "DIGEST_MAX_RETRIES", default_value_t = 3)]
    pub max_retries: u32,

    /// Seconds to wait between summarization attempts
    #[arg(long, env = "DIGEST_RETRY_DELAY_SECS", default_value_t = 1)]
    pub retry_delay_secs: u64,

    /// Token count above which the combined summary gets a second pass
    #[arg(long, env = "DIGEST_TOKEN_THRESHOLD", default_value_t = 800)]
    pub token_threshold: usize,

    /// Maximum length of each per-chunk summary, in model tokens
    #[arg(long, env = "DIGEST_FIRST_PASS_MAX_LEN", default_value_t = 130)]
    pub first_pass_max_len: u32,

    /// Minimum length of each per-chunk summary, in model tokens
    #[arg(long, env = "DIGEST_FIRST_PASS_MIN_LEN", default_value_t = 30)]
    pub first_pass_min_len: u32,

    /// Maximum length of the condensing second pass, in model tokens
    #[arg(long, env = "DIGEST_SECOND_PASS_MAX_LEN", default_value_t = 180)]
    pub second_pass_max_len: u32,

    /// Minimum length of the condensing second pass, in model tokens
    #[arg(long, env = "DIGEST_SECOND_PASS_MIN_LEN", default_value_t = 60)]
    pub second_pass_min_len: u32,
}

impl PipelineOpts {
    /// Reject bounds the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_chars == 0 {
            return Err(AppError::InvalidInput(
                "--chunk-chars must be greater than zero".to_string(),
            ));
        }
        if self.window_chars == 0 {
            return Err(AppError::InvalidInput(
                "--window-chars must be greater than zero".to_string(),
            ));
        }
        if self.max_retries == 0 {
            return Err(AppError::InvalidInput(
                "--max-retries must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Credentials, endpoints, and model ids for the external services
#[derive(Debug, Args)]
pub struct ServiceOpts {
    /// OpenAI-compatible API key (transcription and chat)
    #[arg(long, env, default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// Hugging Face Inference API token
    #[arg(long, env, default_value = "", hide_env_values = true)]
    pub hf_api_token: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env, default_value = OPENAI_API_BASE)]
    pub openai_base_url: String,

    /// Base URL of the Hugging Face Inference API
    #[arg(long, env, default_value = HF_API_BASE)]
    pub hf_base_url: String,

    /// Transcription model id
    #[arg(long, env = "DIGEST_ASR_MODEL", default_value = DEFAULT_WHISPER_MODEL)]
    pub asr_model: String,

    /// Summarization model id
    #[arg(long, env = "DIGEST_SUMMARIZATION_MODEL", default_value = DEFAULT_SUMMARIZATION_MODEL)]
    pub summarization_model: String,

    /// Generation model id for action-item extraction
    #[arg(long, env = "DIGEST_GENERATION_MODEL", default_value = DEFAULT_GENERATION_MODEL)]
    pub generation_model: String,

    /// Chat model id for the single-shot notes path
    #[arg(long, env = "DIGEST_CHAT_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub chat_model: String,
}
