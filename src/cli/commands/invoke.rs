//! Invoke command implementation.

use super::read_event;
use crate::aws::create_handler;
use crate::cli::Output;
use crate::config::Settings;
use crate::event::InvocationEvent;
use anyhow::Result;

/// Run one invocation locally and print the status record.
pub async fn run_invoke(
    event: Option<&str>,
    output_bucket: Option<String>,
    output_object_key: Option<String>,
    settings: Settings,
) -> Result<()> {
    let mut event = InvocationEvent::from_value(&read_event(event)?)?;

    let overrides = event.overrides_mut();
    if output_bucket.is_some() {
        overrides.output_bucket = output_bucket;
    }
    if output_object_key.is_some() {
        overrides.output_object_key = output_object_key;
    }

    let handler = create_handler(settings).await;

    match handler.handle(&event).await {
        Ok(status) => {
            println!("{}", serde_json::to_string_pretty(&status)?);
            Output::success("Summary written.");
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Invocation failed: {}", e));
            Err(e.into())
        }
    }
}
