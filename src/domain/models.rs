/// Domain models for meeting digests
///
/// These models represent the finished outputs and are service-agnostic.
use serde::{Deserialize, Serialize};

/// Everything a digest run produces for one meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingDigest {
    /// Path of the source recording or transcript
    pub source: String,

    /// Characters in the transcript the digest was built from
    pub transcript_chars: usize,

    /// Condensed summary of the meeting
    pub summary: String,

    /// Deduplicated action items in transcript order
    pub action_items: Vec<String>,

    pub created_at: i64, // Unix timestamp
}

impl MeetingDigest {
    /// Creates a new digest for `source`
    pub fn new(
        source: String,
        transcript: &str,
        summary: String,
        action_items: Vec<String>,
    ) -> Self {
        Self {
            source,
            transcript_chars: transcript.chars().count(),
            summary,
            action_items,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Renders the digest as sectioned plain text for the terminal
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Meeting digest for {} ({} transcript characters)\n",
            self.source, self.transcript_chars
        );
        out.push_str("\n== Summary ==\n");
        out.push_str(&self.summary);
        out.push_str("\n\n== Action items ==\n");
        if self.action_items.is_empty() {
            out.push_str("(none found)\n");
        } else {
            for item in &self.action_items {
                out.push_str(&format!("- {}\n", item));
            }
        }
        out
    }
}
