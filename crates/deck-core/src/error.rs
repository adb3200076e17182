//! Error types for the presentation core

use thiserror::Error;

use crate::navigation::SlideId;

/// Errors that can occur while setting up a presentation
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck file error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a display surface while reflecting a transition.
///
/// These never leave the sync layer: they are logged and the remaining
/// display steps still run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("no surface for {0}")]
    MissingSlide(SlideId),

    #[error("no indicator at position {0}")]
    MissingIndicator(usize),
}

pub type Result<T> = std::result::Result<T, DeckError>;
