//! Configuration settings for the summarizer.
//!
//! Settings are assembled once at startup from built-in defaults, an optional
//! TOML file and the process environment (highest precedence), then frozen.

use crate::error::{Result, SummarizerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Region used for the model endpoint when `REGION` is not set.
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Environment variable names.
pub const ENV_REGION: &str = "REGION";
pub const ENV_MODEL_ID: &str = "MODEL_ID";
pub const ENV_INPUT_BUCKET: &str = "INPUT_BUCKET";
pub const ENV_DEFAULT_TRANSCRIPT_OBJECT_KEY: &str = "DEFAULT_TRANSCRIPT_OBJECT_KEY";
pub const ENV_OUTPUT_BUCKET: &str = "OUTPUT_BUCKET";
pub const ENV_OUTPUT_OBJECT_KEY: &str = "OUTPUT_OBJECT_KEY";
pub const ENV_OUTPUT_PREFIX: &str = "OUTPUT_PREFIX";

/// Validated, immutable configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Region for the model service endpoint.
    pub region: String,
    /// Model identifier passed to every invocation.
    pub model_id: String,
    /// Source bucket used when the event carries no notification.
    pub input_bucket: String,
    /// Source key used when the event carries no notification.
    pub default_transcript_object_key: String,
    /// Destination bucket. Defaults to `input_bucket`.
    pub output_bucket: String,
    /// Fixed destination key. Empty means derive it from the input key.
    pub output_object_key: String,
    /// Folder for derived destination keys. Empty means the input key's folder.
    pub output_prefix: String,
}

/// Unvalidated settings as they appear in a config file.
///
/// Every field is optional so that a file may supply only part of the
/// configuration and leave the rest to the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub region: Option<String>,
    pub model_id: Option<String>,
    pub input_bucket: Option<String>,
    pub default_transcript_object_key: Option<String>,
    pub output_bucket: Option<String>,
    pub output_object_key: Option<String>,
    pub output_prefix: Option<String>,
}

impl SettingsFile {
    /// Read a config file. A missing file yields an empty layer.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlay values from a variable lookup (usually the process environment).
    pub fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut Option<String>); 7] = [
            (ENV_REGION, &mut self.region),
            (ENV_MODEL_ID, &mut self.model_id),
            (ENV_INPUT_BUCKET, &mut self.input_bucket),
            (ENV_DEFAULT_TRANSCRIPT_OBJECT_KEY, &mut self.default_transcript_object_key),
            (ENV_OUTPUT_BUCKET, &mut self.output_bucket),
            (ENV_OUTPUT_OBJECT_KEY, &mut self.output_object_key),
            (ENV_OUTPUT_PREFIX, &mut self.output_prefix),
        ];
        for (name, slot) in fields {
            if let Some(value) = lookup(name) {
                *slot = Some(value);
            }
        }
        self
    }

    /// Validate required fields and apply defaults.
    pub fn resolve(self) -> Result<Settings> {
        let model_id = required(self.model_id, ENV_MODEL_ID)?;
        let input_bucket = required(self.input_bucket, ENV_INPUT_BUCKET)?;
        let default_transcript_object_key = required(
            self.default_transcript_object_key,
            ENV_DEFAULT_TRANSCRIPT_OBJECT_KEY,
        )?;

        Ok(Settings {
            region: self
                .region
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id,
            // An explicitly empty OUTPUT_BUCKET is kept; output resolution
            // then falls back to the bucket the transcript came from.
            output_bucket: self.output_bucket.unwrap_or_else(|| input_bucket.clone()),
            input_bucket,
            default_transcript_object_key,
            output_object_key: self.output_object_key.unwrap_or_default(),
            output_prefix: self.output_prefix.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SummarizerError::Config(format!(
            "{} must be set and non-empty",
            name
        ))),
    }
}

impl Settings {
    /// Load settings from the process environment only.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        SettingsFile::default().overlay(lookup).resolve()
    }

    /// Load settings from a config file (or the default location if None),
    /// with environment variables taking precedence.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Self::expand_path(&p.to_string_lossy()),
            None => Self::default_config_path(),
        };

        SettingsFile::load(&config_path)?
            .overlay(|name| std::env::var(name).ok())
            .resolve()
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("transcript-summarizer")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// One-line description of the configured defaults, echoed in every
    /// status record.
    pub fn defaults_summary(&self) -> String {
        format!(
            "INPUT_BUCKET: {}/ DEFAULT_TRANSCRIPT_OBJECT_KEY: {}/ OUTPUT_OBJECT_KEY: {}/ OUTPUT_PREFIX: {}",
            self.input_bucket,
            self.default_transcript_object_key,
            self.output_object_key,
            self.output_prefix
        )
    }
}
