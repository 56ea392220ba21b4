//! CLI command implementations.

mod config;
mod invoke;
mod resolve;
mod serve;

pub use config::run_config;
pub use invoke::run_invoke;
pub use resolve::run_resolve;
pub use serve::run_serve;

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

/// Read an event payload from a file, or stdin for "-".
///
/// No path means a direct invocation with an empty payload.
pub(crate) fn read_event(path: Option<&str>) -> Result<Value> {
    let content = match path {
        None => return Ok(Value::Null),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read event file {}", p))?,
    };

    serde_json::from_str(&content).context("Event is not valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_event_none() {
        assert_eq!(read_event(None).unwrap(), Value::Null);
    }

    #[test]
    fn test_read_event_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(&path, r#"{"output_bucket": "b"}"#).unwrap();

        let value = read_event(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(value["output_bucket"], "b");
    }

    #[test]
    fn test_read_event_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(read_event(Some(path.to_str().unwrap())).is_err());
    }
}
