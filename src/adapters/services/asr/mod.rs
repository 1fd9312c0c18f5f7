//! ASR (Automatic Speech Recognition) service adapters
//!
//! This module provides adapters for transcription providers:
//! - Whisper: OpenAI-compatible `/audio/transcriptions` endpoints

pub mod whisper;

pub use whisper::WhisperService;
