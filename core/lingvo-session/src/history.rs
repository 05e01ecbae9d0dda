use std::fs;
use std::io;
use std::path::Path;

use lingvo_protocol::{AnalysisId, AnalyzedWord, Language};
use rkyv::{Archive, Deserialize, Serialize};
use serde::Serialize as SerdeSerialize;
use tracing::{debug, warn};

use crate::error::{Result, SessionError};

/// One past analysis: the submitted text and the records it produced.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize, SerdeSerialize)]
#[archive(check_bytes)]
pub struct HistoryEntry {
    pub id: AnalysisId,
    pub text: String,
    pub language: Language,
    pub words: Vec<AnalyzedWord>,
}

/// Bounded log of analyses. Stored oldest first, listed newest first.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[archive(check_bytes)]
pub struct History {
    capacity: u32,
    next_id: AnalysisId,
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: clamp_capacity(capacity),
            next_id: AnalysisId::new(1),
            entries: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores an analysis and returns its id. Ids keep increasing across
    /// evictions until they saturate at `u32::MAX`.
    pub fn record(&mut self, text: String, language: Language, words: Vec<AnalyzedWord>) -> AnalysisId {
        let id = self.next_id;
        if id.is_exhausted() {
            warn!(id = id.0, "history ids exhausted, reusing the last id");
        }
        self.next_id = id.next();
        self.entries.push(HistoryEntry { id, text, language, words });
        self.evict();
        id
    }

    pub fn get(&self, id: AnalysisId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Up to `limit` entries, newest first, optionally only one language.
    pub fn recent(&self, language: Option<Language>, limit: usize) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| language.map_or(true, |lang| entry.language == lang))
            .take(limit)
            .collect()
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = clamp_capacity(capacity);
        self.evict();
    }

    fn evict(&mut self) {
        let capacity = self.capacity();
        if self.entries.len() > capacity {
            let excess = self.entries.len() - capacity;
            self.entries.drain(..excess);
            debug!(evicted = excess, capacity, "history trimmed");
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = rkyv::to_bytes::<_, 1024>(self)
            .map_err(|e| SessionError::Archive(format!("{:?}", e)))?;
        Ok(bytes.to_vec())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // File contents carry no alignment guarantee
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<History>(&aligned)
            .map_err(|e| SessionError::Corrupt(format!("{:?}", e)))?;
        let mut history: History = archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|e| SessionError::Corrupt(format!("{:?}", e)))?;
        // Snapshots are untrusted; restore the capacity >= 1 invariant
        history.set_capacity(history.capacity());
        Ok(history)
    }

    /// Loads a snapshot; a missing file is an empty history.
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no history snapshot yet");
                return Ok(Self::with_capacity(capacity));
            }
            Err(e) => return Err(e.into()),
        };

        let mut history = Self::from_bytes(&bytes)?;
        history.set_capacity(capacity);
        Ok(history)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(50)
    }
}

fn clamp_capacity(capacity: usize) -> u32 {
    u32::try_from(capacity).unwrap_or(u32::MAX).max(1)
}
