pub mod config;
pub mod error;
pub mod history;

use lingvo_parser::Analyzer;
use lingvo_protocol::{AnalysisId, AnalyzedWord, Language};
use tracing::{debug, info};

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use history::{History, HistoryEntry};

/// What a submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input: the classifier did not run and nothing changed.
    Suppressed,
    /// The current result was replaced and recorded under this id.
    Analyzed(AnalysisId),
}

/// Caller-owned UI state: the selected language, the last analyzed sentence
/// and its result, and the history of earlier analyses.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    language: Language,
    last_sentence: Option<String>,
    current: Vec<AnalyzedWord>,
    history: History,
}

impl AnalysisSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_history(config, History::with_capacity(config.history_capacity))
    }

    pub fn with_history(config: &SessionConfig, history: History) -> Self {
        Self {
            language: config.default_language,
            last_sentence: None,
            current: Vec::new(),
            history,
        }
    }

    /// Analyzes `text` unless it is blank, replacing the current result.
    pub fn submit(&mut self, text: &str) -> Submission {
        let sentence = text.trim();
        if sentence.is_empty() {
            debug!("blank input, analysis suppressed");
            return Submission::Suppressed;
        }

        let words = Analyzer::new(self.language).analyze(sentence);
        let id = self
            .history
            .record(sentence.to_string(), self.language, words.clone());

        info!(id = id.0, language = %self.language, words = words.len(), "analysis replaced current result");
        self.last_sentence = Some(sentence.to_string());
        self.current = words;
        Submission::Analyzed(id)
    }

    /// Applies to the next submission; the current result is left as is.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn current(&self) -> &[AnalyzedWord] {
        &self.current
    }

    pub fn last_sentence(&self) -> Option<&str> {
        self.last_sentence.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    /// Canned sentence for the session language, to pre-fill the input.
    pub fn fill_example(&self, index: usize) -> Option<&'static str> {
        lingvo_lexicon::samples::example(self.language, index)
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
