//! Input routing
//!
//! Translates key presses, swipe gestures and direct "go to slide" requests
//! into navigation engine calls.

mod gesture;

pub use gesture::{classify_swipe, GesturePoint, GestureTracker, Swipe, DEFAULT_SWIPE_THRESHOLD};
pub use crate::navigation::TransitionRequest;

use std::sync::Arc;
use tracing::debug;

use crate::navigation::{NavigationEngine, Transition};

/// Keys the router understands, decoupled from any windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    End,
    /// A number key, `0..=9`
    Digit(u8),
    Other,
}

/// Whether the key was handled by navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Navigation key; default handling for it should be suppressed
    Consumed(Transition),
    /// Not a navigation key; default handling applies
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, KeyOutcome::Consumed(_))
    }
}

/// Maps raw input onto the navigation engine
pub struct InputRouter {
    navigation: Arc<NavigationEngine>,
    gesture: GestureTracker,
}

impl InputRouter {
    /// Create a router with the default swipe threshold
    pub fn new(navigation: Arc<NavigationEngine>) -> Self {
        Self::with_swipe_threshold(navigation, DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_swipe_threshold(navigation: Arc<NavigationEngine>, threshold: f32) -> Self {
        Self {
            navigation,
            gesture: GestureTracker::new(threshold),
        }
    }

    /// Translate a key into a request, if it is a navigation key
    pub fn request_for_key(&self, key: KeyInput) -> Option<TransitionRequest> {
        let total = self.navigation.total_slides();
        match key {
            KeyInput::ArrowRight | KeyInput::Space => Some(TransitionRequest::Advance),
            KeyInput::ArrowLeft => Some(TransitionRequest::Retreat),
            KeyInput::Home => Some(TransitionRequest::JumpTo(1)),
            KeyInput::End => Some(TransitionRequest::JumpTo(total)),
            KeyInput::Digit(n) if n >= 1 && usize::from(n) <= total => {
                Some(TransitionRequest::JumpTo(usize::from(n)))
            }
            KeyInput::Digit(_) | KeyInput::Other => None,
        }
    }

    /// Handle a key press
    pub fn handle_key(&self, key: KeyInput) -> KeyOutcome {
        match self.request_for_key(key) {
            Some(request) => {
                debug!("Key {:?} -> {:?}", key, request);
                KeyOutcome::Consumed(self.route(request))
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Record the start of a touch or pointer gesture
    pub fn begin_gesture(&mut self, point: GesturePoint) {
        self.gesture.begin(point);
    }

    /// Finish a gesture, navigating if it was a horizontal swipe
    pub fn end_gesture(&mut self, point: GesturePoint) -> Option<Transition> {
        let swipe = self.gesture.end(point)?;
        debug!("Swipe {:?}", swipe);
        let request = match swipe {
            Swipe::Left => TransitionRequest::Advance,
            Swipe::Right => TransitionRequest::Retreat,
        };
        Some(self.route(request))
    }

    /// Drop a gesture that will never finish (e.g. touch cancelled)
    pub fn cancel_gesture(&mut self) {
        self.gesture.cancel();
    }

    pub fn gesture_in_progress(&self) -> bool {
        self.gesture.in_progress()
    }

    /// Explicit "go to slide N"; out-of-range numbers are silently ignored
    pub fn go_to(&self, slide: usize) -> Transition {
        self.route(TransitionRequest::JumpTo(slide))
    }

    pub fn route(&self, request: TransitionRequest) -> Transition {
        self.navigation.apply(request)
    }

    pub fn navigation(&self) -> &Arc<NavigationEngine> {
        &self.navigation
    }
}
