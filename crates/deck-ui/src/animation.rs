//! Entrance animations for slide content
//!
//! When a slide becomes active its items fade in one after another and
//! chart-like blocks slide in from the right. Frames are computed from the
//! time since activation, so the UI only needs to keep repainting while
//! [`SlideAnimator::is_animating`] is true.

use std::time::{Duration, Instant};

use deck_core::{NavigationContext, NavigationSubscriber, SyncError};
use egui::Vec2;
use parking_lot::Mutex;

/// Delay between consecutive items of a staggered animation
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

/// Delay before chart blocks start sliding in
pub const CHART_DELAY: Duration = Duration::from_millis(200);

/// Visual state of an item at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub opacity: f32,
    pub offset: Vec2,
}

impl AnimationFrame {
    pub const REST: AnimationFrame = AnimationFrame {
        opacity: 1.0,
        offset: Vec2::ZERO,
    };
}

/// Kinds of entrance animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceAnimation {
    /// Fade in while rising 20 points
    FadeIn { duration: Duration },
    /// Fade in while moving 50 points leftward
    SlideInFromRight { duration: Duration },
}

impl EntranceAnimation {
    pub fn fade_in() -> Self {
        EntranceAnimation::FadeIn {
            duration: Duration::from_millis(300),
        }
    }

    pub fn slide_in_from_right() -> Self {
        EntranceAnimation::SlideInFromRight {
            duration: Duration::from_millis(400),
        }
    }

    /// Chart blocks use a slower slide
    pub fn chart() -> Self {
        EntranceAnimation::SlideInFromRight {
            duration: Duration::from_millis(600),
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            EntranceAnimation::FadeIn { duration } | EntranceAnimation::SlideInFromRight { duration } => *duration,
        }
    }

    fn start_offset(&self) -> Vec2 {
        match self {
            EntranceAnimation::FadeIn { .. } => Vec2::new(0.0, 20.0),
            EntranceAnimation::SlideInFromRight { .. } => Vec2::new(50.0, 0.0),
        }
    }

    /// Frame at `elapsed` since the animation started
    pub fn frame(&self, elapsed: Duration) -> AnimationFrame {
        let duration = self.duration().as_secs_f32();
        let t = if duration <= 0.0 {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration).clamp(0.0, 1.0)
        };
        let eased = ease(t);

        AnimationFrame {
            opacity: eased,
            offset: self.start_offset() * (1.0 - eased),
        }
    }

    /// Frame for an animation that starts after `delay`; hidden until then
    pub fn frame_delayed(&self, elapsed: Duration, delay: Duration) -> AnimationFrame {
        match elapsed.checked_sub(delay) {
            Some(running) => self.frame(running),
            None => self.frame(Duration::ZERO),
        }
    }
}

/// Delay of item `index` in a staggered sequence
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

/// Smooth ease in/out on `[0, 1]`
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Subscriber that remembers when the current slide became active
pub struct SlideAnimator {
    activated: Mutex<Option<(usize, Instant)>>,
    enabled: bool,
}

impl SlideAnimator {
    pub fn new(enabled: bool) -> Self {
        Self {
            activated: Mutex::new(None),
            enabled,
        }
    }

    pub fn activate_at(&self, slide: usize, now: Instant) {
        *self.activated.lock() = Some((slide, now));
    }

    fn elapsed(&self, slide: usize, now: Instant) -> Option<Duration> {
        match *self.activated.lock() {
            Some((active, since)) if active == slide => Some(now.saturating_duration_since(since)),
            _ => None,
        }
    }

    /// Frame for the `index`-th staggered item of `slide`
    pub fn item_frame(&self, slide: usize, index: usize, now: Instant) -> AnimationFrame {
        if !self.enabled {
            return AnimationFrame::REST;
        }
        match self.elapsed(slide, now) {
            Some(elapsed) => EntranceAnimation::fade_in().frame_delayed(elapsed, stagger_delay(index, STAGGER_STEP)),
            None => AnimationFrame::REST,
        }
    }

    /// Frame for the chart block of `slide`
    pub fn chart_frame(&self, slide: usize, now: Instant) -> AnimationFrame {
        if !self.enabled {
            return AnimationFrame::REST;
        }
        match self.elapsed(slide, now) {
            Some(elapsed) => EntranceAnimation::chart().frame_delayed(elapsed, CHART_DELAY),
            None => AnimationFrame::REST,
        }
    }

    /// Whether any animation of a slide with `items` items is still running
    pub fn is_animating(&self, slide: usize, items: usize, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(elapsed) = self.elapsed(slide, now) else {
            return false;
        };
        let items_end = stagger_delay(items.saturating_sub(1), STAGGER_STEP) + EntranceAnimation::fade_in().duration();
        let chart_end = CHART_DELAY + EntranceAnimation::chart().duration();
        elapsed < items_end.max(chart_end)
    }
}

impl NavigationSubscriber for SlideAnimator {
    fn on_navigation_change(&self, context: &NavigationContext) -> Result<(), SyncError> {
        self.activate_at(context.current_slide, Instant::now());
        Ok(())
    }

    fn name(&self) -> &str {
        "slide animator"
    }
}
