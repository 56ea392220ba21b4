//! Invocation handler.
//!
//! Coordinates one invocation: resolve the input, summarize the transcript,
//! resolve the output and write the summary document. Steps run strictly in
//! order and any failure aborts the invocation before the write.

use crate::config::Settings;
use crate::error::Result;
use crate::event::InvocationEvent;
use crate::location::{resolve_output, ObjectLocation};
use crate::model::ModelInvoker;
use crate::storage::{ObjectStore, JSON_CONTENT_TYPE};
use crate::summarizer::Summarizer;
use crate::transcript::extract_transcript;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Document written next to (or under a prefix relative to) the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Input object key the summary was produced from.
    pub job: String,
    pub model: String,
    pub prompt: String,
    pub summary: String,
}

/// Value returned to the invoking environment on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: String,
    pub default_env_variables: String,
    pub input_s3_uri: String,
    pub output_s3_uri: String,
}

impl StatusRecord {
    fn ok(settings: &Settings, input: &ObjectLocation, output: &ObjectLocation) -> Self {
        Self {
            status: "ok".to_string(),
            default_env_variables: settings.defaults_summary(),
            input_s3_uri: format!(
                "input_bucket: {}/ input_obj_key: {}",
                input.bucket, input.key
            ),
            output_s3_uri: format!(
                "output_bucket: {}/ output_obj_key: {}",
                output.bucket, output.key
            ),
        }
    }
}

/// The summarization handler, built once per process.
pub struct Handler {
    settings: Settings,
    store: Arc<dyn ObjectStore>,
    summarizer: Summarizer,
}

impl Handler {
    /// Create a handler with injected clients.
    pub fn new(
        settings: Settings,
        store: Arc<dyn ObjectStore>,
        model: Arc<dyn ModelInvoker>,
    ) -> Self {
        let summarizer = Summarizer::new(model, settings.model_id.clone());
        Self {
            settings,
            store,
            summarizer,
        }
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve input and output locations for an event without any I/O.
    pub fn resolve(&self, event: &InvocationEvent) -> (ObjectLocation, ObjectLocation) {
        let input = event.input_location(&self.settings);
        let output = resolve_output(&self.settings, event.overrides(), &input);
        (input, output)
    }

    /// Handle a raw invocation payload.
    pub async fn handle_value(&self, payload: Value) -> Result<StatusRecord> {
        let event = InvocationEvent::from_value(&payload)?;
        self.handle(&event).await
    }

    /// Handle a parsed invocation event.
    #[instrument(skip(self, event))]
    pub async fn handle(&self, event: &InvocationEvent) -> Result<StatusRecord> {
        let (input, output) = self.resolve(event);
        info!(input = %input, output = %output, "Summarizing transcript");

        let body = self.store.get_object(&input).await?;
        let transcript = extract_transcript(&body)?;
        let summary = self.summarizer.summarize(&transcript).await?;

        let document = OutputDocument {
            job: input.key.clone(),
            model: self.summarizer.model_id().to_string(),
            prompt: summary.prompt,
            summary: summary.summary,
        };
        let payload = serde_json::to_vec(&document)?;

        self.store
            .put_object(&output, payload, JSON_CONTENT_TYPE)
            .await?;
        info!(output = %output, "Summary written");

        Ok(StatusRecord::ok(&self.settings, &input, &output))
    }
}
