mod adapters;
mod config;
mod domain;
mod error;
mod pipeline;
mod ports;
mod utils;

use adapters::services::asr::WhisperService;
use adapters::services::llm::{HfInferenceService, OpenAIChatService};
use adapters::tokenizer::HeuristicTokenizer;
use anyhow::Context;
use clap::Parser;
use config::{Cli, Command, DigestArgs, NotesArgs, ServiceOpts};
use domain::MeetingDigest;
use error::AppError;
use pipeline::{
    format_bullets, ActionItemExtractor, ExtractorConfig, ReducerConfig, ResilientSummarizer,
    RetryPolicy, SummaryReducer,
};
use ports::{ChatCompletionPort, TranscriptionServicePort};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use utils::transcript_file;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Digest(args) => run_digest(args).await,
        Command::Notes(args) => run_notes(args).await,
    }
}

/// Load the transcript from an existing file or by transcribing the
/// recording. Returns the text and the path run artifacts hang off.
async fn load_transcript(
    services: &ServiceOpts,
    audio_path: Option<&Path>,
    from_transcript: Option<&Path>,
    timestamps: bool,
) -> anyhow::Result<(String, PathBuf)> {
    if let Some(path) = from_transcript {
        let text = transcript_file::read_transcript(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))?;
        return Ok((text, path.to_path_buf()));
    }

    let Some(audio) = audio_path else {
        anyhow::bail!("an audio path or --from-transcript is required");
    };

    let asr = WhisperService::new(services.openai_api_key.clone())
        .with_base_url(services.openai_base_url.clone())
        .with_model(services.asr_model.clone());
    if !asr.is_configured() {
        return Err(AppError::Config(
            "OPENAI_API_KEY is not set; transcription needs an API key".to_string(),
        )
        .into());
    }

    log::info!("Using the {} transcription service", asr.provider_name());
    let result = asr
        .transcribe_file(&audio.to_string_lossy())
        .await
        .context("transcription failed")?;
    transcript_file::save_transcript(audio, &result, timestamps)
        .context("failed to save the transcript")?;

    Ok((result.text, audio.to_path_buf()))
}

async fn run_digest(args: DigestArgs) -> anyhow::Result<()> {
    args.pipeline.validate()?;

    let (transcript, input_path) = load_transcript(
        &args.services,
        args.audio_path.as_deref(),
        args.from_transcript.as_deref(),
        args.timestamps,
    )
    .await?;

    let hf = Arc::new(
        HfInferenceService::new(args.services.hf_api_token.clone())
            .with_base_url(args.services.hf_base_url.clone())
            .with_summarization_model(args.services.summarization_model.clone())
            .with_generation_model(args.services.generation_model.clone()),
    );
    if !hf.is_configured() {
        log::warn!("HF_API_TOKEN is not set; inference requests may be rejected or rate-limited");
    }

    let summarizer = ResilientSummarizer::new(
        hf.clone(),
        RetryPolicy {
            max_attempts: args.pipeline.max_retries,
            retry_delay: Duration::from_secs(args.pipeline.retry_delay_secs),
        },
    );
    let reducer = SummaryReducer::new(
        summarizer,
        Arc::new(HeuristicTokenizer::default()),
        ReducerConfig {
            chunk_max_chars: args.pipeline.chunk_chars,
            first_pass_max_len: args.pipeline.first_pass_max_len,
            first_pass_min_len: args.pipeline.first_pass_min_len,
            second_pass_token_threshold: args.pipeline.token_threshold,
            second_pass_max_len: args.pipeline.second_pass_max_len,
            second_pass_min_len: args.pipeline.second_pass_min_len,
        },
    );
    let extractor = ActionItemExtractor::new(
        hf,
        ExtractorConfig {
            window_chars: args.pipeline.window_chars,
            ..ExtractorConfig::default()
        },
    );

    let summary = reducer
        .summarize_meeting(&transcript)
        .await
        .context("summarization failed")?;
    let action_items = extractor
        .extract_actions(&transcript)
        .await
        .context("action-item extraction failed")?;

    let digest = MeetingDigest::new(
        input_path.display().to_string(),
        &transcript,
        summary,
        action_items,
    );

    if args.save_artifacts {
        transcript_file::save_artifact(&input_path, "_summary.txt", &digest.summary)?;
        transcript_file::save_artifact(
            &input_path,
            "_actions.txt",
            &format_bullets(&digest.action_items),
        )?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&digest)?);
    } else {
        print!("{}", digest.render_text());
    }

    Ok(())
}

async fn run_notes(args: NotesArgs) -> anyhow::Result<()> {
    let (transcript, input_path) = load_transcript(
        &args.services,
        args.audio_path.as_deref(),
        args.from_transcript.as_deref(),
        args.timestamps,
    )
    .await?;

    let chat = OpenAIChatService::new(args.services.openai_api_key.clone())
        .with_base_url(args.services.openai_base_url.clone())
        .with_model(args.services.chat_model.clone());
    if !chat.is_configured() {
        return Err(AppError::Config(
            "OPENAI_API_KEY is not set; the notes path needs an API key".to_string(),
        )
        .into());
    }

    log::info!("Using the {} chat service", chat.provider_name());
    let notes = chat
        .meeting_notes(&transcript)
        .await
        .context("meeting notes generation failed")?;

    if args.save_artifacts {
        transcript_file::save_artifact(&input_path, "_notes.txt", &notes)?;
    }

    println!("{}", notes);
    Ok(())
}
