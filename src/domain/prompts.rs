//! Prompt templates for the generation and chat collaborators
//!
//! Templates use a `{transcript}` placeholder that callers substitute with
//! the window or full transcript before sending.

/// Default prompt templates for the two model paths
pub struct PromptTemplates;

impl PromptTemplates {
    /// Per-window prompt for the instruction-following extraction model
    pub fn action_items() -> &'static str {
        r#"Extract UNIQUE action items from this meeting transcript.
Format as bullets. Skip duplicates. Example:
- John will send the report
- Team must review slides

Transcript: {transcript}"#
    }

    /// System message for the single-shot chat-completion notes path
    pub fn meeting_notes_system() -> &'static str {
        "You are an assistant that extracts action points from meeting transcripts."
    }

    /// User prompt for the single-shot chat-completion notes path
    pub fn meeting_notes() -> &'static str {
        r#"Transcript:
"""
{transcript}
"""

- Provide a short summary of the meeting.
- Extract the action points in bullet format, including:
    - What needs to be done
    - Who is responsible
    - Any due dates
- Attribute key statements to their speakers where the transcript names them."#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_items_template() {
        let prompt = PromptTemplates::action_items();
        assert!(prompt.contains("{transcript}"));
        assert!(prompt.contains("UNIQUE action items"));
    }

    #[test]
    fn test_meeting_notes_template() {
        let prompt = PromptTemplates::meeting_notes();
        assert!(prompt.contains("{transcript}"));
        assert!(prompt.contains("action points"));
        assert!(!PromptTemplates::meeting_notes_system().contains("{transcript}"));
    }
}
