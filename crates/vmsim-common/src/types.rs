//! Core identifier types for the simulator.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier for a virtual page.
///
/// Pages are plain integers in `[0, page_table_size)`; they carry no
/// payload and are passed by value everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Returns the page number as an array index.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page:{}", self.0)
    }
}

impl From<u32> for PageId {
    fn from(n: u32) -> Self {
        PageId(n)
    }
}

/// Identifier for a physical frame slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub u32);

impl FrameId {
    /// Returns the frame number as an array index.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame:{}", self.0)
    }
}

/// Page replacement policy selector.
///
/// A closed set: the presentation surface is string-tagged
/// ("FIFO", "LRU", ...) and parses into this enum, so illegal policy
/// values are unrepresentable past the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First-in first-out: evict the page loaded longest ago,
    /// irrespective of subsequent hits.
    #[default]
    Fifo,
    /// Least recently used.
    Lru,
    /// Most recently used.
    Mru,
    /// Belady's optimal: evict the page whose next reference is
    /// farthest in the future.
    Optimal,
    /// Second chance over a circular frame sweep.
    Clock,
}

impl PolicyKind {
    /// All policy kinds, in presentation order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::Optimal,
        PolicyKind::Clock,
    ];

    /// Canonical uppercase tag used by the presentation surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Mru => "MRU",
            PolicyKind::Optimal => "OPTIMAL",
            PolicyKind::Clock => "CLOCK",
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = crate::error::SimError;

    /// Parses a policy tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(PolicyKind::Fifo),
            "LRU" => Ok(PolicyKind::Lru),
            "MRU" => Ok(PolicyKind::Mru),
            "OPTIMAL" => Ok(PolicyKind::Optimal),
            "CLOCK" | "SECOND-CHANCE" => Ok(PolicyKind::Clock),
            other => Err(crate::error::SimError::InvalidConfig(format!(
                "unknown policy: {other}"
            ))),
        }
    }
}
