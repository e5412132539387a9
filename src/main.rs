//! CLI entry point for the comment sentiment tool.
//!
//! Provides subcommands for analyzing a CSV of comments (local file or URL)
//! and for scoring a single piece of text.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use comment_sentiment::analyzers::analyzer::analyze_source;
use comment_sentiment::analyzers::lexicon::Lexicon;
use comment_sentiment::analyzers::vader::SentimentIntensityAnalyzer;
use comment_sentiment::config::AnalyzerConfig;
use comment_sentiment::error::AnalysisError;
use comment_sentiment::fetch::BasicClient;
use comment_sentiment::output::{print_pretty, render_json, render_summary, write_labeled_rows};
use std::ffi::OsStr;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "comment_sentiment")]
#[command(about = "Classify the sentiment of comments in a CSV file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every comment in a CSV file and print the summary
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON config file (falls back to $SENTIMENT_CONFIG, then defaults)
        #[arg(short, long)]
        config: Option<String>,

        /// Lexicon file overriding the configured or embedded one
        #[arg(short, long)]
        lexicon: Option<String>,

        /// Output format for the summary
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Optional: write every labeled row to this CSV file
        #[arg(long)]
        labeled_output: Option<String>,
    },
    /// Print polarity scores and the label for a single text
    Score {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Lexicon file overriding the embedded one
        #[arg(short, long)]
        lexicon: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/comment_sentiment.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("comment_sentiment.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            config,
            lexicon,
            format,
            labeled_output,
        } => {
            let config = AnalyzerConfig::resolve(config.as_deref())?;
            let lexicon_path = lexicon.as_deref().or(config.lexicon_path.as_deref());
            let analyzer = SentimentIntensityAnalyzer::new(Lexicon::load_or_default(lexicon_path)?);

            let client = BasicClient::new();
            let report = match analyze_source(&client, &analyzer, &config, &source).await {
                Ok(report) => report,
                Err(e) => match e.downcast_ref::<AnalysisError>() {
                    // user-facing message, no partial result
                    Some(user_error)
                        if matches!(
                            user_error,
                            AnalysisError::MissingTextColumn
                                | AnalysisError::UnsupportedFile { .. }
                        ) =>
                    {
                        error!(source = %source, "{}", user_error);
                        println!("{user_error}");
                        return Ok(ExitCode::from(2));
                    }
                    _ => return Err(e),
                },
            };
            print_pretty(&report);

            match format {
                Format::Text => print!("{}", render_summary(&report.summary)),
                Format::Json => println!("{}", render_json(&report)?),
            }

            if let Some(path) = labeled_output {
                write_labeled_rows(&path, &report.rows)?;
                info!(path = %path, rows = report.rows.len(), "Labeled rows written");
            }
        }
        Commands::Score { text, lexicon } => {
            let analyzer =
                SentimentIntensityAnalyzer::new(Lexicon::load_or_default(lexicon.as_deref())?);
            let scores = analyzer.polarity_scores(&text);
            println!(
                "neg: {:.3}  neu: {:.3}  pos: {:.3}  compound: {:.4}  label: {}",
                scores.neg,
                scores.neu,
                scores.pos,
                scores.compound,
                analyzer.classify(&text)
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
