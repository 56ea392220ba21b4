//! Transcript summarization against the hosted model.

use crate::config::SummaryPrompt;
use crate::error::{Result, SummarizerError};
use crate::model::{ModelInvoker, ModelRequest};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// JSON pointer to the answer text in the model response envelope.
pub const ANSWER_POINTER: &str = "/content/0/text";

/// Result of summarizing one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Instruction text the model was given.
    pub prompt: String,
    /// Text of the model's first content part.
    pub summary: String,
}

/// Builds prompts, invokes the model once and extracts the answer.
pub struct Summarizer {
    model: Arc<dyn ModelInvoker>,
    model_id: String,
    prompt: SummaryPrompt,
}

impl Summarizer {
    /// Create a summarizer for `model_id` with the default prompt.
    pub fn new(model: Arc<dyn ModelInvoker>, model_id: impl Into<String>) -> Self {
        Self {
            model,
            model_id: model_id.into(),
            prompt: SummaryPrompt::default(),
        }
    }

    /// Model identifier used for every invocation.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Summarize a transcript.
    #[instrument(skip(self, transcript), fields(model_id = %self.model_id, chars = transcript.chars().count()))]
    pub async fn summarize(&self, transcript: &str) -> Result<Summary> {
        let request = ModelRequest::user_text(self.prompt.render(transcript));
        let body = serde_json::to_vec(&request)?;

        info!("Invoking model");
        let response = self.model.invoke(&self.model_id, body).await?;
        let summary = extract_answer(&response)?;
        debug!("Received summary of {} chars", summary.chars().count());

        Ok(Summary {
            prompt: self.prompt.instruction.clone(),
            summary,
        })
    }
}

/// Parse a model response envelope and return the first content part's text.
pub fn extract_answer(body: &[u8]) -> Result<String> {
    let envelope: Value = serde_json::from_slice(body)?;
    envelope
        .pointer(ANSWER_POINTER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SummarizerError::MissingField("content[0].text".to_string()))
}
