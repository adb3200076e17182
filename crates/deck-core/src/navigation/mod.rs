use serde::{Serialize, Deserialize};

mod engine;
mod position;
mod subscriber;

pub use engine::NavigationEngine;
pub use position::{SlideId, Transition};
pub use subscriber::NavigationSubscriber;

/// A request to move the presentation, produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionRequest {
    /// Step to the next slide
    Advance,
    /// Step to the previous slide
    Retreat,
    /// Jump to a 1-based slide number (may be out of range)
    JumpTo(usize),
}

/// Context passed to subscribers after a committed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    /// Slide that was active before the transition
    pub previous_slide: usize,
    /// Slide that is active now
    pub current_slide: usize,
    pub total_slides: usize,
}

impl NavigationContext {
    /// Fraction of the deck shown so far, in `(0.0, 1.0]`
    pub fn progress_ratio(&self) -> f32 {
        self.current_slide as f32 / self.total_slides as f32
    }

    /// Whether a retreat would change the slide
    pub fn can_retreat(&self) -> bool {
        self.current_slide > 1
    }

    /// Whether an advance would change the slide
    pub fn can_advance(&self) -> bool {
        self.current_slide < self.total_slides
    }

    pub fn current_id(&self) -> SlideId {
        SlideId(self.current_slide)
    }

    pub fn previous_id(&self) -> SlideId {
        SlideId(self.previous_slide)
    }
}
