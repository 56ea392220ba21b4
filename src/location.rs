//! Object locations and destination resolution.

use crate::config::Settings;
use crate::event::OutputOverrides;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to the input's base name for derived destination keys.
pub const SUMMARY_SUFFIX: &str = ".summary.json";

/// A bucket/key pair in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Resolve where the summary for `input` is written.
///
/// Bucket: event override, else configured bucket, else the input bucket.
/// Key: event override, else configured key, else derived from the input key.
pub fn resolve_output(
    settings: &Settings,
    overrides: &OutputOverrides,
    input: &ObjectLocation,
) -> ObjectLocation {
    let bucket = overrides
        .output_bucket
        .as_deref()
        .unwrap_or(&settings.output_bucket);
    let bucket = if bucket.is_empty() {
        input.bucket.as_str()
    } else {
        bucket
    };

    let key = overrides
        .output_object_key
        .as_deref()
        .unwrap_or(&settings.output_object_key);
    let key = if key.is_empty() {
        derive_output_key(&input.key, &settings.output_prefix)
    } else {
        key.to_string()
    };

    ObjectLocation::new(bucket, key)
}

/// Derive `<folder>/<base>.summary.json` from an input key.
///
/// `folder` is `prefix` when non-empty, else the input key's directory.
pub fn derive_output_key(input_key: &str, prefix: &str) -> String {
    let (dir, name) = match input_key.rfind('/') {
        Some(idx) => (&input_key[..=idx], &input_key[idx + 1..]),
        None => ("", input_key),
    };
    let base = file_stem(name);

    let folder = if prefix.is_empty() { dir } else { prefix };
    if folder.is_empty() {
        format!("{}{}", base, SUMMARY_SUFFIX)
    } else {
        format!("{}/{}{}", folder.trim_end_matches('/'), base, SUMMARY_SUFFIX)
    }
}

/// File name without its last extension. Leading dots do not start an
/// extension, so `.env` stays `.env`.
fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &name[..dot],
        _ => name,
    }
}
