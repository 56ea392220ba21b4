//! Configuration module for the summarizer.
//!
//! Handles loading settings and the summarization prompt template.

mod prompts;
mod settings;

pub use prompts::{SummaryPrompt, SUMMARY_INSTRUCTION, TRANSCRIPT_SEPARATOR};
pub use settings::{Settings, SettingsFile, DEFAULT_REGION};
