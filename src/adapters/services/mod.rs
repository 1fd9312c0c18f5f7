//! External service adapters
//!
//! This module contains adapters for external APIs including:
//! - ASR (Automatic Speech Recognition) services
//! - Summarization, generation, and chat-completion model services

pub mod asr;
pub mod llm;
