//! Transcript summarizer entry point.
//!
//! With no subcommand the binary runs as an AWS Lambda function.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use transcript_summarizer::cli::{commands, Cli, Commands};
use transcript_summarizer::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);
    let serving = matches!(command, Commands::Serve);

    // Initialize logging
    let log_level = match (cli.verbose, serving) {
        (0, true) => "info",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("transcript_summarizer={}", log_level)),
    );

    if serving {
        // The platform timestamps each log line.
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_ansi(false).without_time())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    let config_path = cli.config.as_deref().map(PathBuf::from);

    // Settings fail fast on missing required values; `config path` needs none.
    let load_settings = || Settings::load_from(config_path.as_deref());

    match command {
        Commands::Serve => {
            commands::run_serve(load_settings()?).await?;
        }

        Commands::Invoke {
            event,
            output_bucket,
            output_object_key,
        } => {
            commands::run_invoke(event.as_deref(), output_bucket, output_object_key, load_settings()?)
                .await?;
        }

        Commands::Resolve { event } => {
            commands::run_resolve(event.as_deref(), &load_settings()?)?;
        }

        Commands::Config { action } => {
            commands::run_config(&action, config_path.as_deref())?;
        }
    }

    Ok(())
}
