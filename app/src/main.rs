#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use sift_config::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;
mod render;
mod samples;

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy, InitStrategy, PatternsStrategy,
    SamplesStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "sift")]
#[command(
    about = "Extract emails, phone numbers, URLs, amounts, times and hashtags from text",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured data from text, files or stdin
    Extract {
        /// Files to analyze (stdin is read when no input is given)
        files: Vec<PathBuf>,

        /// Text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Built-in sample to analyze
        #[arg(short, long)]
        sample: Option<String>,

        /// Output format: text, json or html
        #[arg(short, long)]
        format: Option<String>,

        /// Also show categories without matches
        #[arg(long)]
        show_empty: bool,
    },
    /// List the pattern table
    Patterns {
        /// Output format: text, json or html
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List built-in samples, or print one
    Samples {
        /// Sample to print
        name: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn parse_format(format: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    format
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(anyhow::Error::msg)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Extract {
            files,
            text,
            sample,
            format,
            show_empty,
        } => {
            let input = ExtractInput {
                files,
                text,
                sample,
                format: parse_format(format.as_deref())?,
                show_empty,
            };
            ExtractStrategy.execute(input).await
        }
        Commands::Patterns { format } => {
            PatternsStrategy
                .execute(parse_format(format.as_deref())?)
                .await
        }
        Commands::Samples { name } => SamplesStrategy.execute(name).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_extract_arguments() {
        let Ok(cli) = Cli::try_parse_from([
            "sift", "-v", "extract", "a.txt", "b.txt", "--format", "json", "--show-empty",
        ]) else {
            panic!("extract arguments should parse");
        };

        assert!(cli.verbose);
        let Commands::Extract {
            files,
            format,
            show_empty,
            text,
            ..
        } = cli.command
        else {
            panic!("expected extract command");
        };
        assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(format.as_deref(), Some("json"));
        assert!(show_empty);
        assert!(text.is_none());
    }

    #[test]
    fn format_flag_is_validated() {
        assert!(matches!(parse_format(None), Ok(None)));
        assert!(matches!(
            parse_format(Some("html")),
            Ok(Some(OutputFormat::Html))
        ));
        assert!(parse_format(Some("xml")).is_err());
    }
}
