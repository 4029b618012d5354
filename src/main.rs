//! Mind Matters - command-line wellness companion
//!
//! Entry point for the `mind-matters` binary: runs assessments, prints
//! recommendations and tips, and keeps a local mood journal.

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(name = "mind-matters")]
#[command(about = "Mood tracking, self-assessment and activity recommendations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, env = "MIND_MATTERS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the assessment questions for a mood
    Questions {
        /// Assessment mood: positive, neutral or negative
        #[arg(short, long)]
        mood: String,
    },

    /// Score an assessment and print recommended activities
    Recommend {
        /// Assessment mood: positive, neutral or negative
        #[arg(short, long)]
        mood: String,

        /// Answer as QUESTION_ID=OPTION (repeatable)
        #[arg(short, long = "answer", value_parser = cli::helpers::parse_answer)]
        answers: Vec<(u32, String)>,

        /// Number of activities to return (overrides config)
        #[arg(short = 'k', long, value_parser = cli::helpers::parse_positive)]
        top_k: Option<usize>,

        /// Require a complete, valid questionnaire
        #[arg(long)]
        strict: bool,

        /// Record the assessment for this user
        #[arg(long)]
        email: Option<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print tips for a tracker mood
    Tips {
        /// Tracker mood: happy, neutral or sad
        #[arg(short, long)]
        mood: Option<String>,

        /// Maximum number of tips to print
        #[arg(short, long, default_value = "1", value_parser = cli::helpers::parse_positive)]
        count: usize,
    },

    /// Register a user in the local journal
    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,
    },

    /// Log today's mood
    LogMood {
        #[arg(short, long)]
        email: String,

        /// Tracker mood: happy, neutral or sad
        #[arg(short, long)]
        mood: String,
    },

    /// Show the weekly mood chart and tip of the day
    Progress {
        #[arg(short, long)]
        email: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::new(format!(
        "mind_matters={level},mind_matters_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("Mind Matters v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = cli::helpers::load_config(cli.config)?;

    match cli.command {
        Commands::Questions { mood } => cli::questions::handle(&mood)?,
        Commands::Recommend {
            mood,
            answers,
            top_k,
            strict,
            email,
            format,
        } => {
            cli::recommend::handle(
                &config,
                cli::recommend::RecommendArgs {
                    mood,
                    answers: answers.into_iter().collect(),
                    top_k,
                    strict,
                    email,
                    format,
                },
            )
            .await?
        }
        Commands::Tips { mood, count } => cli::tips::handle(&config, mood.as_deref(), count)?,
        Commands::Register { name, email } => cli::journal::register(&config, &name, &email).await?,
        Commands::LogMood { email, mood } => cli::journal::log_mood(&config, &email, &mood).await?,
        Commands::Progress { email, format } => {
            cli::journal::progress(&config, &email, &format).await?
        }
    }

    Ok(())
}
