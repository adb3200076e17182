//! egui view model for the presentation surface
//!
//! The navigation engine writes into this through [`DisplaySync`]; widgets
//! read it every frame.
//!
//! [`DisplaySync`]: deck_core::DisplaySync

use deck_core::{DisplaySurface, SlideId, SyncError};

/// What the UI should currently show
#[derive(Debug, Clone)]
pub struct SlideSurface {
    /// One flag per slide panel, index 0 is `slide-1`
    slides: Vec<bool>,
    indicators: Vec<bool>,
    counter: usize,
    progress: f32,
    prev_enabled: bool,
    next_enabled: bool,
    scroll_reset: bool,
}

impl SlideSurface {
    /// A surface with one panel and one indicator per slide
    pub fn new(total_slides: usize) -> Self {
        Self::with_panels(total_slides, total_slides)
    }

    /// A surface with `panels` slide panels and `indicators` indicator dots
    pub fn with_panels(panels: usize, indicators: usize) -> Self {
        Self {
            slides: vec![false; panels],
            indicators: vec![false; indicators],
            counter: 0,
            progress: 0.0,
            prev_enabled: false,
            next_enabled: false,
            scroll_reset: false,
        }
    }

    /// The single visible slide, if any
    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|active| *active).map(|i| i + 1)
    }

    pub fn is_slide_active(&self, number: usize) -> bool {
        self.slides.get(number.wrapping_sub(1)).copied().unwrap_or(false)
    }

    pub fn indicators(&self) -> &[bool] {
        &self.indicators
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev_enabled
    }

    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    /// Returns true once after each transition
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}

impl DisplaySurface for SlideSurface {
    fn set_slide_active(&mut self, slide: SlideId, active: bool) -> Result<(), SyncError> {
        let flag = self
            .slides
            .get_mut(slide.number().wrapping_sub(1))
            .ok_or(SyncError::MissingSlide(slide))?;
        *flag = active;
        Ok(())
    }

    fn set_counter(&mut self, current: usize) {
        self.counter = current;
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_indicator_active(&mut self, position: usize, active: bool) -> Result<(), SyncError> {
        let flag = self
            .indicators
            .get_mut(position.wrapping_sub(1))
            .ok_or(SyncError::MissingIndicator(position))?;
        *flag = active;
        Ok(())
    }

    fn set_progress(&mut self, ratio: f32) {
        self.progress = ratio.clamp(0.0, 1.0);
    }

    fn set_nav_buttons(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.prev_enabled = prev_enabled;
        self.next_enabled = next_enabled;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_reset = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{DisplaySync, InputRouter, KeyInput, NavigationEngine};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn wired(surface: SlideSurface, total: usize) -> (InputRouter, Arc<Mutex<SlideSurface>>, Arc<DisplaySync<SlideSurface>>) {
        let engine = Arc::new(NavigationEngine::new(total).unwrap());
        let surface = Arc::new(Mutex::new(surface));
        let sync = Arc::new(DisplaySync::new(surface.clone()));
        engine.add_subscriber(sync.clone());
        let _ = sync.refresh(&engine.context());
        (InputRouter::new(engine), surface, sync)
    }

    #[test]
    fn test_surface_follows_navigation() {
        let (router, surface, _sync) = wired(SlideSurface::new(8), 8);
        assert_eq!(surface.lock().active_slide(), Some(1));
        assert!(!surface.lock().prev_enabled());

        router.handle_key(KeyInput::End);
        let mut view = surface.lock();
        assert_eq!(view.active_slide(), Some(8));
        assert_eq!(view.counter(), 8);
        assert_eq!(view.progress(), 1.0);
        assert!(view.prev_enabled());
        assert!(!view.next_enabled());
        assert!(view.take_scroll_reset());
        assert!(!view.take_scroll_reset());
    }

    #[test]
    fn test_missing_panel_keeps_counter_in_step() {
        // Deck declares 4 slides but only 3 panels exist
        let (router, surface, _sync) = wired(SlideSurface::with_panels(3, 4), 4);
        router.go_to(4);

        assert_eq!(router.navigation().current_slide(), 4);
        let view = surface.lock();
        assert_eq!(view.active_slide(), None);
        assert_eq!(view.counter(), 4);
        assert_eq!(view.indicators(), &[false, false, false, true]);
    }
}
