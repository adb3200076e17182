use serde::{Serialize, Deserialize};
use std::fmt;

/// Stable identifier of a slide surface, rendered as `slide-<n>`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub usize);

impl SlideId {
    /// 1-based slide number
    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide-{}", self.0)
    }
}

/// Outcome of a transition call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Active slide after the call
    pub index: usize,
    /// Whether the call committed a transition (and notified subscribers)
    pub changed: bool,
}

impl Transition {
    pub(crate) fn committed(index: usize) -> Self {
        Self { index, changed: true }
    }

    pub(crate) fn unchanged(index: usize) -> Self {
        Self { index, changed: false }
    }
}
