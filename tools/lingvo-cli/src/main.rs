mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lingvo_protocol::Language;
use lingvo_session::{AnalysisSession, History, SessionConfig, Submission};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Word-by-word analysis of short French or English sentences")]
struct Cli {
    /// JSON session config (default language, history size)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a sentence
    Analyze {
        #[arg(short, long)]
        language: Option<Language>,

        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// rkyv history file to append the analysis to
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,

        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List the canned example sentences
    Examples {
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Show stored analyses, newest first
    History {
        #[arg(long, value_name = "FILE")]
        history: PathBuf,

        #[arg(short, long)]
        language: Option<Language>,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("reading config {:?}", path)),
        None => Ok(SessionConfig::default()),
    }
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Analyze { language, json, history, text } => {
            let stored = match &history {
                Some(path) => History::load(path, config.history_capacity)
                    .with_context(|| format!("loading history {:?}", path))?,
                None => History::with_capacity(config.history_capacity),
            };

            let mut session = AnalysisSession::with_history(&config, stored);
            if let Some(language) = language {
                session.set_language(language);
            }

            match session.submit(&text.join(" ")) {
                Submission::Suppressed => {
                    writeln!(out, "Nothing to analyze: the text is blank.")?;
                    return Ok(());
                }
                Submission::Analyzed(id) => tracing::debug!(id = id.0, "analysis stored"),
            }

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(session.current())?)?;
            } else {
                write!(out, "{}", render::table(session.current()))?;
            }

            if let Some(path) = history {
                session
                    .history()
                    .save(&path)
                    .with_context(|| format!("saving history {:?}", path))?;
            }
        }
        Command::Examples { language } => {
            let languages = match language {
                Some(language) => vec![language],
                None => Language::ALL.to_vec(),
            };
            for language in languages {
                for sentence in lingvo_lexicon::samples::examples(language) {
                    writeln!(out, "[{}] {}", language, sentence)?;
                }
            }
        }
        Command::History { history, language, limit, json } => {
            let stored = History::load(&history, config.history_capacity)
                .with_context(|| format!("loading history {:?}", history))?;
            let entries = stored.recent(language, limit.unwrap_or(config.history_limit));

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else if entries.is_empty() {
                writeln!(out, "No analyses stored yet.")?;
            } else {
                for entry in entries {
                    writeln!(out, "{}", render::history_line(entry))?;
                }
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}
