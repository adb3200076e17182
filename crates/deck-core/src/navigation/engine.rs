//! Slide navigation engine

use super::{NavigationContext, NavigationSubscriber, Transition, TransitionRequest};
use crate::error::{DeckError, Result};
use std::sync::{Arc, Weak};
use parking_lot::RwLock;
use tracing::{debug, warn};

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct NavigationState {
    current_slide: usize,
    total_slides: usize,
}

/// The slide navigation state machine.
///
/// States are the slide numbers `1..=total_slides`. Every committed
/// transition notifies each live subscriber exactly once, in registration
/// order, before the call returns.
pub struct NavigationEngine {
    state: Arc<RwLock<NavigationState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl NavigationEngine {
    /// Create a new navigation engine positioned on slide 1
    pub fn new(total_slides: usize) -> Result<Self> {
        if total_slides < 1 {
            return Err(DeckError::Configuration(format!(
                "a presentation needs at least one slide, got {}",
                total_slides
            )));
        }

        let state = NavigationState {
            current_slide: 1,
            total_slides,
        };

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Navigate forward by one slide, saturating at the last slide
    pub fn advance(&self) -> Transition {
        let mut state = self.state.write();
        let previous = state.current_slide;

        if state.current_slide >= state.total_slides {
            return Transition::unchanged(previous);
        }
        state.current_slide += 1;

        let context = Self::context_from(&state, previous);
        drop(state);
        self.commit(context)
    }

    /// Navigate backward by one slide, saturating at slide 1
    pub fn retreat(&self) -> Transition {
        let mut state = self.state.write();
        let previous = state.current_slide;

        if state.current_slide <= 1 {
            return Transition::unchanged(previous);
        }
        state.current_slide -= 1;

        let context = Self::context_from(&state, previous);
        drop(state);
        self.commit(context)
    }

    /// Jump to a 1-based slide number.
    ///
    /// A jump to the slide already shown still counts as a transition and
    /// re-notifies subscribers. Out-of-range targets are a no-op.
    pub fn jump_to(&self, target: usize) -> Transition {
        let mut state = self.state.write();
        let previous = state.current_slide;

        if target < 1 || target > state.total_slides {
            debug!("Ignoring jump to slide {} (deck has {})", target, state.total_slides);
            return Transition::unchanged(previous);
        }
        state.current_slide = target;

        let context = Self::context_from(&state, previous);
        drop(state);
        self.commit(context)
    }

    /// Dispatch a transition request
    pub fn apply(&self, request: TransitionRequest) -> Transition {
        match request {
            TransitionRequest::Advance => self.advance(),
            TransitionRequest::Retreat => self.retreat(),
            TransitionRequest::JumpTo(target) => self.jump_to(target),
        }
    }

    /// Currently active slide (1-based)
    pub fn current_slide(&self) -> usize {
        self.state.read().current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.state.read().total_slides
    }

    /// Get current navigation context.
    ///
    /// Outside of a notification `previous_slide` equals `current_slide`.
    pub fn context(&self) -> NavigationContext {
        let state = self.state.read();
        Self::context_from(&state, state.current_slide)
    }

    /// Add a subscriber.
    ///
    /// The engine only keeps a weak reference; the caller owns the subscriber.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    fn context_from(state: &NavigationState, previous: usize) -> NavigationContext {
        NavigationContext {
            previous_slide: previous,
            current_slide: state.current_slide,
            total_slides: state.total_slides,
        }
    }

    fn commit(&self, context: NavigationContext) -> Transition {
        debug!(
            "Slide {} -> {} of {}",
            context.previous_slide, context.current_slide, context.total_slides
        );
        self.notify_subscribers(&context);
        Transition::committed(context.current_slide)
    }

    /// Notify all subscribers of a committed transition
    fn notify_subscribers(&self, context: &NavigationContext) {
        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        // Lock released so subscribers may read the engine
        for subscriber in live {
            if let Err(e) = subscriber.on_navigation_change(context) {
                warn!("{} skipped update for slide {}: {}", subscriber.name(), context.current_slide, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<NavigationContext>>,
    }

    impl Recorder {
        fn count(&self) -> usize {
            self.seen.lock().len()
        }

        fn last(&self) -> Option<NavigationContext> {
            self.seen.lock().last().copied()
        }
    }

    impl NavigationSubscriber for Recorder {
        fn on_navigation_change(&self, context: &NavigationContext) -> std::result::Result<(), SyncError> {
            self.seen.lock().push(*context);
            Ok(())
        }
    }

    struct Failing;

    impl NavigationSubscriber for Failing {
        fn on_navigation_change(&self, context: &NavigationContext) -> std::result::Result<(), SyncError> {
            Err(SyncError::MissingSlide(context.current_id()))
        }
    }

    fn engine_with_recorder(total: usize) -> (NavigationEngine, Arc<Recorder>) {
        let engine = NavigationEngine::new(total).unwrap();
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        (engine, recorder)
    }

    #[test]
    fn test_zero_slides_is_a_configuration_error() {
        let result = NavigationEngine::new(0);
        assert!(matches!(result, Err(DeckError::Configuration(_))));
    }

    #[test]
    fn test_starts_on_first_slide() {
        let engine = NavigationEngine::new(8).unwrap();
        assert_eq!(engine.current_slide(), 1);
        assert_eq!(engine.total_slides(), 8);
    }

    #[test]
    fn test_jump_to_every_slide() {
        let (engine, _recorder) = engine_with_recorder(8);
        for n in 1..=8 {
            let transition = engine.jump_to(n);
            assert_eq!(transition, Transition { index: n, changed: true });
            assert_eq!(engine.current_slide(), n);
        }
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let (engine, recorder) = engine_with_recorder(8);
        engine.jump_to(3);
        let before = recorder.count();

        for target in [0, 9, 100] {
            let transition = engine.jump_to(target);
            assert!(!transition.changed);
            assert_eq!(transition.index, 3);
        }
        assert_eq!(engine.current_slide(), 3);
        assert_eq!(recorder.count(), before);
    }

    #[test]
    fn test_advance_saturates_at_end() {
        let (engine, recorder) = engine_with_recorder(8);
        for _ in 0..7 {
            assert!(engine.advance().changed);
        }
        assert_eq!(engine.current_slide(), 8);

        let transition = engine.advance();
        assert!(!transition.changed);
        assert_eq!(transition.index, 8);
        assert_eq!(recorder.count(), 7);
    }

    #[test]
    fn test_retreat_from_first_slide_is_noop() {
        let (engine, recorder) = engine_with_recorder(8);
        let transition = engine.retreat();
        assert_eq!(transition, Transition { index: 1, changed: false });
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_retreat_steps_back() {
        let (engine, recorder) = engine_with_recorder(4);
        engine.jump_to(3);
        assert_eq!(engine.retreat(), Transition { index: 2, changed: true });

        let last = recorder.last().unwrap();
        assert_eq!(last.previous_slide, 3);
        assert_eq!(last.current_slide, 2);
    }

    #[test]
    fn test_jump_to_current_slide_still_notifies_once() {
        let (engine, recorder) = engine_with_recorder(8);
        engine.jump_to(4);
        let before = recorder.count();

        let transition = engine.jump_to(4);
        assert!(transition.changed);
        assert_eq!(recorder.count(), before + 1);

        let last = recorder.last().unwrap();
        assert_eq!(last.previous_slide, 4);
        assert_eq!(last.current_slide, 4);
    }

    #[test]
    fn test_single_slide_deck() {
        let (engine, recorder) = engine_with_recorder(1);
        assert!(!engine.advance().changed);
        assert!(!engine.retreat().changed);
        assert!(engine.jump_to(1).changed);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_apply_dispatches_requests() {
        let (engine, _recorder) = engine_with_recorder(5);
        assert_eq!(engine.apply(TransitionRequest::JumpTo(4)).index, 4);
        assert_eq!(engine.apply(TransitionRequest::Advance).index, 5);
        assert_eq!(engine.apply(TransitionRequest::Retreat).index, 4);
    }

    #[test]
    fn test_failing_subscriber_does_not_block_others() {
        let engine = NavigationEngine::new(3).unwrap();
        let failing: Arc<dyn NavigationSubscriber> = Arc::new(Failing);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(failing.clone());
        engine.add_subscriber(recorder.clone());

        let transition = engine.advance();
        assert_eq!(transition, Transition { index: 2, changed: true });
        assert_eq!(engine.current_slide(), 2);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let engine = NavigationEngine::new(3).unwrap();
        let kept = Arc::new(Recorder::default());
        engine.add_subscriber(kept.clone());
        {
            let temporary = Arc::new(Recorder::default());
            engine.add_subscriber(temporary);
        }
        assert_eq!(engine.subscriber_count(), 1);

        engine.advance();
        assert_eq!(kept.count(), 1);
    }

    #[test]
    fn test_progress_ratio_in_context() {
        let (engine, recorder) = engine_with_recorder(8);
        engine.jump_to(5);
        let context = recorder.last().unwrap();
        assert!((context.progress_ratio() - 5.0 / 8.0).abs() < f32::EPSILON);
        assert!(context.can_retreat());
        assert!(context.can_advance());
    }
}
