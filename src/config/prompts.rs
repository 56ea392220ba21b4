//! Prompt template for transcript summarization.
//!
//! The instruction asks for a three-point summary of the conversation in
//! standard Hebrew. The transcript follows a fixed "text:" separator.

/// Instruction sent ahead of every transcript.
pub const SUMMARY_INSTRUCTION: &str = "סכם את השיחה בשלוש נקודות בעברית תקנית.";

/// Separator between the instruction and the transcript text.
pub const TRANSCRIPT_SEPARATOR: &str = "\n\nטקסט:\n";

/// Prompt template used for summarization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    /// Instruction text, recorded verbatim in the output document.
    pub instruction: String,
    /// Separator placed between the instruction and the transcript.
    pub separator: String,
}

impl Default for SummaryPrompt {
    fn default() -> Self {
        Self {
            instruction: SUMMARY_INSTRUCTION.to_string(),
            separator: TRANSCRIPT_SEPARATOR.to_string(),
        }
    }
}

impl SummaryPrompt {
    /// Render the user message for a transcript.
    pub fn render(&self, transcript: &str) -> String {
        let mut message =
            String::with_capacity(self.instruction.len() + self.separator.len() + transcript.len());
        message.push_str(&self.instruction);
        message.push_str(&self.separator);
        message.push_str(transcript);
        message
    }
}
