use lingvo_protocol::{AnalyzedWord, Language, LanguageError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyze;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Text is required")]
    EmptyText,
    #[error(transparent)]
    UnsupportedLanguage(#[from] LanguageError),
}

/// Untrusted analysis input, as sent by a UI form: `{"text": "...", "language": "fr"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// A request that passed validation: non-blank trimmed text and a known language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    pub text: String,
    pub language: Language,
    pub analyzed_words: Vec<AnalyzedWord>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Some(language.into()),
        }
    }

    /// Trims the text and resolves the language; a missing language means French.
    pub fn validate(&self) -> Result<ValidRequest, RequestError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(RequestError::EmptyText);
        }

        let language = match self.language.as_deref() {
            Some(tag) => tag.parse::<Language>()?,
            None => Language::default(),
        };

        Ok(ValidRequest {
            text: text.to_string(),
            language,
        })
    }

    pub fn run(&self) -> Result<AnalysisResponse, RequestError> {
        let valid = self.validate()?;
        Ok(valid.run())
    }
}

impl ValidRequest {
    pub fn run(self) -> AnalysisResponse {
        let analyzed_words = analyze(&self.text, self.language);
        AnalysisResponse {
            text: self.text,
            language: self.language,
            analyzed_words,
        }
    }
}
