//! Transcript file utilities
//!
//! Transcripts are saved as UTF-8 plain text next to the input media, with
//! a `_transcript.txt` suffix. Other run artifacts (summary, action items)
//! use the same sibling naming scheme.

use crate::error::Result;
use crate::ports::transcription::TranscriptionResult;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a sibling path for `input` by replacing its extension with `suffix`
///
/// # Arguments
/// * `input` - The source media or transcript path
/// * `suffix` - Appended to the file stem, e.g. `_summary.txt`
pub fn sibling_path<P: AsRef<Path>>(input: P, suffix: &str) -> PathBuf {
    let input = input.as_ref();
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("meeting"));
    let mut name = stem.to_os_string();
    name.push(suffix);
    input.with_file_name(name)
}

/// The transcript path for an input media file
pub fn transcript_path<P: AsRef<Path>>(input: P) -> PathBuf {
    sibling_path(input, "_transcript.txt")
}

/// Save a transcription next to the input media
///
/// # Arguments
/// * `input` - The source media path the transcript belongs to
/// * `result` - The transcription to save
/// * `timestamps` - Render one `[HH:MM:SS]`-prefixed line per segment
///   instead of the flat text
///
/// # Returns
/// The path the transcript was written to
pub fn save_transcript<P: AsRef<Path>>(
    input: P,
    result: &TranscriptionResult,
    timestamps: bool,
) -> Result<PathBuf> {
    let path = transcript_path(&input);
    let content = if timestamps && !result.segments.is_empty() {
        render_timestamped(result)
    } else {
        result.text.clone()
    };
    fs::write(&path, content)?;
    log::info!("Transcript saved to {}", path.display());
    Ok(path)
}

/// Read a previously saved transcript
pub fn read_transcript<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write a plain-text artifact (summary, action items) and log where it went
pub fn save_artifact<P: AsRef<Path>>(input: P, suffix: &str, content: &str) -> Result<PathBuf> {
    let path = sibling_path(&input, suffix);
    fs::write(&path, content)?;
    log::info!("Artifact saved to {}", path.display());
    Ok(path)
}

/// Format a second offset as `[HH:MM:SS]`
pub fn format_timestamp(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!(
        "[{:02}:{:02}:{:02}]",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

fn render_timestamped(result: &TranscriptionResult) -> String {
    let mut out = String::new();
    for segment in &result.segments {
        out.push_str(&format_timestamp(segment.start_secs));
        out.push(' ');
        out.push_str(segment.text.trim());
        out.push('\n');
    }
    out
}
