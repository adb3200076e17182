//! Swipe classification for touch and pointer gestures

/// Minimum horizontal travel for a gesture to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// A gesture coordinate in screen units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePoint {
    pub x: f32,
    pub y: f32,
}

impl GesturePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A classified horizontal swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left; shows the next slide
    Left,
    /// Finger moved left-to-right; shows the previous slide
    Right,
}

/// Classify a finished gesture.
///
/// Displacement is measured as `start - end`. Only gestures dominated by
/// horizontal travel longer than `threshold` are swipes.
pub fn classify_swipe(start: GesturePoint, end: GesturePoint, threshold: f32) -> Option<Swipe> {
    let delta_x = start.x - end.x;
    let delta_y = start.y - end.y;

    if delta_x.abs() > delta_y.abs() && delta_x.abs() > threshold {
        if delta_x > 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    } else {
        None
    }
}

/// Tracks the start point of the gesture in progress
#[derive(Debug, Clone)]
pub struct GestureTracker {
    start: Option<GesturePoint>,
    threshold: f32,
}

impl GestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn begin(&mut self, point: GesturePoint) {
        self.start = Some(point);
    }

    /// Finish the gesture. The start point is cleared whatever the outcome.
    pub fn end(&mut self, point: GesturePoint) -> Option<Swipe> {
        let start = self.start.take()?;
        classify_swipe(start, point, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> GesturePoint {
        GesturePoint::new(x, y)
    }

    #[test]
    fn test_leftward_swipe() {
        // 60 units left, 10 units of vertical drift
        assert_eq!(classify_swipe(p(200.0, 100.0), p(140.0, 110.0), 50.0), Some(Swipe::Left));
    }

    #[test]
    fn test_rightward_swipe() {
        assert_eq!(classify_swipe(p(100.0, 100.0), p(180.0, 90.0), 50.0), Some(Swipe::Right));
    }

    #[test]
    fn test_vertical_gesture_ignored() {
        assert_eq!(classify_swipe(p(200.0, 200.0), p(170.0, 160.0), 50.0), None);
        assert_eq!(classify_swipe(p(0.0, 0.0), p(-80.0, 90.0), 50.0), None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(classify_swipe(p(100.0, 0.0), p(50.0, 0.0), 50.0), None);
        assert_eq!(classify_swipe(p(100.0, 0.0), p(49.0, 0.0), 50.0), Some(Swipe::Left));
    }

    #[test]
    fn test_tracker_resets_after_every_end() {
        let mut tracker = GestureTracker::default();
        tracker.begin(p(10.0, 10.0));
        assert!(tracker.in_progress());
        assert_eq!(tracker.end(p(12.0, 11.0)), None);
        assert!(!tracker.in_progress());

        // An end with no start is ignored
        assert_eq!(tracker.end(p(500.0, 10.0)), None);
    }

    #[test]
    fn test_start_at_origin_is_tracked() {
        let mut tracker = GestureTracker::default();
        tracker.begin(p(0.0, 0.0));
        assert_eq!(tracker.end(p(100.0, 0.0)), Some(Swipe::Right));
    }
}
