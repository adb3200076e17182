//! Core functionality for the slide presenter
//!
//! This crate provides the slide navigation state machine, input routing,
//! display synchronization and the decorators layered on transitions.

pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod input;
pub mod navigation;
pub mod state;
pub mod sync;
pub mod timing;

// Re-export commonly used types
pub use config::{DeckConfig, Metric, PresentationSettings, SlideSpec};
pub use error::{DeckError, Result, SyncError};
pub use input::{GesturePoint, InputRouter, KeyInput, KeyOutcome, Swipe, TransitionRequest};
pub use navigation::{
    NavigationContext, NavigationEngine, NavigationSubscriber, SlideId, Transition,
};
pub use state::PresentationState;
pub use sync::{DisplaySurface, DisplaySync};
pub use timing::{SessionSummary, SlideTimer, TimingRecord};
