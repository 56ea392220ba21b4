//! Transcript documents produced by the speech-to-text service.

use crate::error::{Result, SummarizerError};
use serde_json::Value;

/// JSON pointer to the full transcript text.
pub const TRANSCRIPT_POINTER: &str = "/results/transcripts/0/transcript";

/// Parse a transcript document and return its transcript text.
///
/// Malformed JSON is a `Json` error; a document without a string at
/// `results.transcripts[0].transcript` is a `MissingField` error.
pub fn extract_transcript(body: &[u8]) -> Result<String> {
    let document: Value = serde_json::from_slice(body)?;
    document
        .pointer(TRANSCRIPT_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SummarizerError::MissingField("results.transcripts[0].transcript".to_string()))
}
