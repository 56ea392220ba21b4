//! Transcript Summarizer
//!
//! Event-driven summarization of speech-to-text transcripts stored in S3.
//!
//! # Overview
//!
//! When a transcript document lands in a bucket, the summarizer:
//! - reads it from S3 (or a configured default object for manual runs)
//! - asks a Bedrock-hosted model for a three-point summary in Hebrew
//! - writes `{job, model, prompt, summary}` back to S3 as UTF-8 JSON
//!
//! # Architecture
//!
//! - `config` - Settings and the prompt template
//! - `event` - Invocation event parsing (S3 notification or direct call)
//! - `location` - Object locations and destination key derivation
//! - `storage` - Object store abstraction (S3, in-memory)
//! - `model` - Model invocation abstraction (Bedrock)
//! - `transcript` - Transcript document parsing
//! - `summarizer` - Prompting and answer extraction
//! - `handler` - One invocation end to end
//! - `aws` - Client construction
//!
//! # Example
//!
//! ```rust,no_run
//! use transcript_summarizer::aws::create_handler;
//! use transcript_summarizer::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_env()?;
//!     let handler = create_handler(settings).await;
//!
//!     let status = handler.handle_value(serde_json::json!({})).await?;
//!     println!("{}", status.output_s3_uri);
//!
//!     Ok(())
//! }
//! ```

pub mod aws;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod location;
pub mod model;
pub mod storage;
pub mod summarizer;
pub mod transcript;

pub use error::{Result, SummarizerError};
