use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Identifies one stored analysis in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)] // Same layout as u32
pub struct AnalysisId(pub u32);

impl AnalysisId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The following id. Stops at `u32::MAX` instead of wrapping back to 0,
    /// so ids past that point are no longer unique.
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub const fn is_exhausted(self) -> bool {
        self.0 == u32::MAX
    }
}

impl From<u32> for AnalysisId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<AnalysisId> for u32 {
    fn from(id: AnalysisId) -> u32 {
        id.0
    }
}
