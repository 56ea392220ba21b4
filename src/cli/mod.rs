//! CLI module for the transcript summarizer.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Transcript Summarizer
///
/// Summarizes speech-to-text transcripts stored in S3 with a Bedrock-hosted
/// model. Without a subcommand it runs as an AWS Lambda function.
#[derive(Parser, Debug)]
#[command(name = "transcript-summarizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (environment variables take precedence)
    #[arg(short, long, global = true, env = "SUMMARIZER_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the AWS Lambda runtime loop (default)
    Serve,

    /// Run one invocation locally against S3 and Bedrock
    Invoke {
        /// Event JSON file ("-" for stdin). Omit for a direct invocation.
        #[arg(short, long)]
        event: Option<String>,

        /// Destination bucket override
        #[arg(long)]
        output_bucket: Option<String>,

        /// Destination object key override
        #[arg(long)]
        output_object_key: Option<String>,
    },

    /// Show where an event would be read from and written to
    Resolve {
        /// Event JSON file ("-" for stdin). Omit for a direct invocation.
        #[arg(short, long)]
        event: Option<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,

    /// Show default configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["transcript-summarizer"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_invoke_args() {
        let cli = Cli::try_parse_from([
            "transcript-summarizer",
            "-vv",
            "invoke",
            "--event",
            "event.json",
            "--output-object-key",
            "out/key.json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Invoke {
                event,
                output_bucket,
                output_object_key,
            }) => {
                assert_eq!(event.as_deref(), Some("event.json"));
                assert!(output_bucket.is_none());
                assert_eq!(output_object_key.as_deref(), Some("out/key.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
