//! Display synchronization
//!
//! Reflects committed transitions onto an external presentation surface:
//! the visible slide, the counter, the position indicators, the progress
//! ratio and the prev/next button state.

use std::sync::Arc;
use parking_lot::Mutex;
use tracing::warn;

use crate::error::SyncError;
use crate::navigation::{NavigationContext, NavigationSubscriber, SlideId};

/// The surface a presentation is drawn on.
///
/// Implementations only store what they are told; the navigation engine
/// stays the single source of truth for the current slide.
pub trait DisplaySurface: Send {
    /// Mark a slide surface visible or hidden
    fn set_slide_active(&mut self, slide: SlideId, active: bool) -> Result<(), SyncError>;

    /// Set the "current slide" counter text
    fn set_counter(&mut self, current: usize);

    /// Number of position indicators on the surface
    fn indicator_count(&self) -> usize;

    /// Mark the indicator at a 1-based position
    fn set_indicator_active(&mut self, position: usize, active: bool) -> Result<(), SyncError>;

    /// Set the progress ratio, `current / total`
    fn set_progress(&mut self, ratio: f32);

    /// Enable or disable the previous/next buttons
    fn set_nav_buttons(&mut self, prev_enabled: bool, next_enabled: bool);

    /// Bring the top of the slide into view
    fn scroll_to_top(&mut self) {}
}

/// Subscriber that redraws a [`DisplaySurface`] after every transition
pub struct DisplaySync<S: DisplaySurface> {
    surface: Arc<Mutex<S>>,
}

impl<S: DisplaySurface> DisplaySync<S> {
    pub fn new(surface: Arc<Mutex<S>>) -> Self {
        Self { surface }
    }

    /// Shared handle to the surface, for readers such as the UI
    pub fn surface(&self) -> Arc<Mutex<S>> {
        self.surface.clone()
    }

    /// Redraw the surface for `context`.
    ///
    /// Every step runs even if an earlier one fails; the first failure is
    /// returned and later ones are logged.
    pub fn refresh(&self, context: &NavigationContext) -> Result<(), SyncError> {
        let mut surface = self.surface.lock();
        let mut first_error: Option<SyncError> = None;
        let mut record = |result: Result<(), SyncError>| {
            if let Err(e) = result {
                if first_error.is_none() {
                    first_error = Some(e);
                } else {
                    warn!("Display sync: {}", e);
                }
            }
        };

        if context.previous_slide != context.current_slide {
            record(surface.set_slide_active(context.previous_id(), false));
        }
        record(surface.set_slide_active(context.current_id(), true));

        surface.set_counter(context.current_slide);

        for position in 1..=surface.indicator_count() {
            record(surface.set_indicator_active(position, position == context.current_slide));
        }

        surface.set_progress(context.progress_ratio());
        surface.set_nav_buttons(context.can_retreat(), context.can_advance());
        surface.scroll_to_top();

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<S: DisplaySurface + 'static> NavigationSubscriber for DisplaySync<S> {
    fn on_navigation_change(&self, context: &NavigationContext) -> Result<(), SyncError> {
        self.refresh(context)
    }

    fn name(&self) -> &str {
        "display sync"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputRouter, KeyInput};
    use crate::navigation::NavigationEngine;
    use ahash::AHashSet;

    /// Surface with a fixed set of slide elements, recording every call
    struct RecordingSurface {
        slides: AHashSet<usize>,
        active: AHashSet<usize>,
        indicators: Vec<bool>,
        counter: Option<usize>,
        progress: f32,
        prev_enabled: bool,
        next_enabled: bool,
        redraws: usize,
    }

    impl RecordingSurface {
        fn new(total: usize) -> Self {
            Self {
                slides: (1..=total).collect(),
                active: AHashSet::new(),
                indicators: vec![false; total],
                counter: None,
                progress: 0.0,
                prev_enabled: true,
                next_enabled: true,
                redraws: 0,
            }
        }

        fn without_slide(mut self, n: usize) -> Self {
            self.slides.remove(&n);
            self
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn set_slide_active(&mut self, slide: SlideId, active: bool) -> Result<(), SyncError> {
            if !self.slides.contains(&slide.number()) {
                return Err(SyncError::MissingSlide(slide));
            }
            if active {
                self.active.insert(slide.number());
            } else {
                self.active.remove(&slide.number());
            }
            Ok(())
        }

        fn set_counter(&mut self, current: usize) {
            self.counter = Some(current);
        }

        fn indicator_count(&self) -> usize {
            self.indicators.len()
        }

        fn set_indicator_active(&mut self, position: usize, active: bool) -> Result<(), SyncError> {
            let slot = self
                .indicators
                .get_mut(position - 1)
                .ok_or(SyncError::MissingIndicator(position))?;
            *slot = active;
            Ok(())
        }

        fn set_progress(&mut self, ratio: f32) {
            self.progress = ratio;
            self.redraws += 1;
        }

        fn set_nav_buttons(&mut self, prev_enabled: bool, next_enabled: bool) {
            self.prev_enabled = prev_enabled;
            self.next_enabled = next_enabled;
        }
    }

    fn setup(surface: RecordingSurface) -> (InputRouter, Arc<DisplaySync<RecordingSurface>>) {
        let total = surface.indicators.len();
        let engine = Arc::new(NavigationEngine::new(total).unwrap());
        let sync = Arc::new(DisplaySync::new(Arc::new(Mutex::new(surface))));
        engine.add_subscriber(sync.clone());
        sync.refresh(&engine.context()).unwrap();
        (InputRouter::new(engine), sync)
    }

    #[test]
    fn test_initial_refresh() {
        let (_router, sync) = setup(RecordingSurface::new(8));
        let surface = sync.surface();
        let surface = surface.lock();
        assert_eq!(surface.counter, Some(1));
        assert!(surface.active.contains(&1));
        assert!(!surface.prev_enabled);
        assert!(surface.next_enabled);
    }

    #[test]
    fn test_exactly_one_indicator_active() {
        let (router, sync) = setup(RecordingSurface::new(8));
        router.go_to(6);
        router.handle_key(KeyInput::ArrowLeft);

        let surface = sync.surface();
        let surface = surface.lock();
        let active: Vec<usize> = surface
            .indicators
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(active, vec![5]);
        assert_eq!(surface.active.len(), 1);
        assert!(surface.active.contains(&5));
    }

    #[test]
    fn test_eight_slide_scenario() {
        let (router, sync) = setup(RecordingSurface::new(8));
        let surface = sync.surface();

        for _ in 0..7 {
            router.handle_key(KeyInput::ArrowRight);
        }
        assert_eq!(router.navigation().current_slide(), 8);
        assert!(!surface.lock().next_enabled);

        router.handle_key(KeyInput::Home);
        assert_eq!(router.navigation().current_slide(), 1);
        assert!(!surface.lock().prev_enabled);

        let redraws_before = surface.lock().redraws;
        router.go_to(5);
        assert_eq!(router.navigation().current_slide(), 5);

        let surface = surface.lock();
        assert_eq!(surface.redraws, redraws_before + 1);
        assert!((surface.progress - 5.0 / 8.0).abs() < f32::EPSILON);
        assert_eq!(surface.counter, Some(5));
    }

    #[test]
    fn test_missing_slide_is_not_fatal() {
        let (router, sync) = setup(RecordingSurface::new(4).without_slide(3));

        let transition = router.go_to(3);
        assert!(transition.changed);
        assert_eq!(router.navigation().current_slide(), 3);

        let surface = sync.surface();
        let surface = surface.lock();
        // Remaining steps still ran
        assert_eq!(surface.counter, Some(3));
        assert!(surface.indicators[2]);
        assert!(surface.active.is_empty());
    }

    #[test]
    fn test_refresh_reports_first_error() {
        let sync = DisplaySync::new(Arc::new(Mutex::new(RecordingSurface::new(2).without_slide(2))));
        let context = NavigationContext {
            previous_slide: 1,
            current_slide: 2,
            total_slides: 2,
        };
        assert_eq!(sync.refresh(&context), Err(SyncError::MissingSlide(SlideId(2))));
    }
}
