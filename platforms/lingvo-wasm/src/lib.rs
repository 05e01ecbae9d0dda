pub mod presentation;

use std::fmt::Display;

use lingvo_protocol::{Language, PartOfSpeech};
use lingvo_session::{AnalysisSession, History, HistoryEntry, SessionConfig, Submission};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_language(tag: &str) -> Result<Language, JsValue> {
    tag.parse::<Language>().map_err(js_error)
}

/// Style key for a `pos` wire name, e.g. `"noun"` -> `"noun-blue"`.
#[wasm_bindgen]
pub fn pos_style(pos: &str) -> Option<String> {
    PartOfSpeech::parse(pos).map(|pos| presentation::pos_style(pos).to_string())
}

/// Canned example sentences for the language selector.
#[wasm_bindgen]
pub fn examples(language: &str) -> Result<JsValue, JsValue> {
    let language = parse_language(language)?;
    Ok(serde_wasm_bindgen::to_value(lingvo_lexicon::samples::examples(language))?)
}

/// The analyzer instance running in the browser. Owns the session state the
/// page renders from.
#[wasm_bindgen]
pub struct LingvoEngine {
    session: AnalysisSession,
    config: SessionConfig,
}

#[wasm_bindgen]
impl LingvoEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Rebuilds an engine from a history snapshot (loaded via fetch() or storage in JS).
    #[wasm_bindgen(js_name = fromSnapshot)]
    pub fn from_snapshot(snapshot: Vec<u8>) -> Result<LingvoEngine, JsValue> {
        Self::restore(SessionConfig::default(), &snapshot).map_err(js_error)
    }

    /// Text + language -> analyzed words. Returns `null` for blank input,
    /// leaving the previous result in place.
    pub fn analyze(&mut self, text: &str, language: &str) -> Result<JsValue, JsValue> {
        let language = parse_language(language)?;

        match self.submit(text, language) {
            Submission::Suppressed => Ok(JsValue::NULL),
            Submission::Analyzed(_) => Ok(serde_wasm_bindgen::to_value(self.session.current())?),
        }
    }

    pub fn current(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.session.current())?)
    }

    #[wasm_bindgen(js_name = lastSentence)]
    pub fn last_sentence(&self) -> Option<String> {
        self.session.last_sentence().map(str::to_string)
    }

    /// Past analyses, newest first.
    pub fn history(&self, language: Option<String>, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let language = language.as_deref().map(parse_language).transpose()?;
        Ok(serde_wasm_bindgen::to_value(&self.recent(language, limit))?)
    }

    /// rkyv bytes of the history, for JS to persist.
    pub fn snapshot(&self) -> Result<Vec<u8>, JsValue> {
        self.snapshot_bytes().map_err(js_error)
    }
}

// Rust-side engine logic; the exported methods above only convert values.
impl LingvoEngine {
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            session: AnalysisSession::new(&config),
            config,
        }
    }

    /// Engine over a stored history, trimmed to the configured capacity.
    pub fn restore(config: SessionConfig, snapshot: &[u8]) -> lingvo_session::Result<Self> {
        let mut history = History::from_bytes(snapshot)?;
        history.set_capacity(config.history_capacity);
        Ok(Self {
            session: AnalysisSession::with_history(&config, history),
            config,
        })
    }

    pub fn submit(&mut self, text: &str, language: Language) -> Submission {
        self.session.set_language(language);
        self.session.submit(text)
    }

    /// `limit` falls back to the configured listing size.
    pub fn recent(&self, language: Option<Language>, limit: Option<usize>) -> Vec<&HistoryEntry> {
        let limit = limit.unwrap_or(self.config.history_limit);
        self.session.history().recent(language, limit)
    }

    pub fn snapshot_bytes(&self) -> lingvo_session::Result<Vec<u8>> {
        self.session.history().to_bytes()
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }
}

impl Default for LingvoEngine {
    fn default() -> Self {
        Self::new()
    }
}
