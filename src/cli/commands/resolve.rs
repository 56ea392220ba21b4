//! Resolve command implementation.

use super::read_event;
use crate::cli::Output;
use crate::config::Settings;
use crate::event::InvocationEvent;
use crate::location::resolve_output;
use anyhow::Result;

/// Print the input and output locations for an event without any I/O.
pub fn run_resolve(event: Option<&str>, settings: &Settings) -> Result<()> {
    let event = InvocationEvent::from_value(&read_event(event)?)?;

    let input = event.input_location(settings);
    let output = resolve_output(settings, event.overrides(), &input);

    Output::header("Resolved locations");
    Output::kv("Input", &input.to_string());
    Output::kv("Output", &output.to_string());
    Output::kv("Defaults", &settings.defaults_summary());

    Ok(())
}
