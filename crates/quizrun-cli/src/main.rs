//! quizrun CLI — timed terminal quizzes from tab-separated question files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Timed terminal quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a quiz
    Run {
        /// Question file (tab-separated: question, answer)
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Time limit in seconds (default: 30)
        #[arg(long, short)]
        limit: Option<u64>,

        /// Shuffle the question order
        #[arg(long, short)]
        shuffle: bool,

        /// Restart the time limit for every question
        #[arg(long)]
        per_question: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question file without running it
    Validate {
        /// Question file to check
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and question file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            limit,
            shuffle,
            per_question,
            config,
        } => commands::run::execute(file, limit, shuffle, per_question, config).await,
        Commands::Validate { file, config } => commands::validate::execute(file, config),
        Commands::Init => commands::init::execute(),
    };

    // Exit explicitly: the stdin reader runs on a blocking thread that
    // cannot be cancelled, and runtime shutdown would wait for it.
    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
