//! Navigation bar: previous/next buttons, slide counter and indicator dots

use egui::{Color32, Sense, Stroke, Vec2};
use deck_core::InputRouter;
use std::sync::Arc;
use parking_lot::Mutex;

use crate::icons;
use crate::surface::SlideSurface;
use crate::theme;

/// Navigation bar widget
pub struct NavigationPanel {
    /// Surface the bar reflects
    surface: Arc<Mutex<SlideSurface>>,

    /// Panel configuration
    config: NavigationPanelConfig,
}

/// Navigation panel configuration
#[derive(Debug, Clone)]
pub struct NavigationPanelConfig {
    /// Show the indicator dots
    pub show_indicators: bool,

    /// Radius of an indicator dot
    pub indicator_radius: f32,

    /// Active indicator color
    pub active_color: Color32,

    /// Inactive indicator color
    pub inactive_color: Color32,
}

impl Default for NavigationPanelConfig {
    fn default() -> Self {
        Self {
            show_indicators: true,
            indicator_radius: 5.0,
            active_color: theme::accent_color(),
            inactive_color: theme::muted_color(),
        }
    }
}

impl NavigationPanel {
    /// Create a new navigation panel
    pub fn new(surface: Arc<Mutex<SlideSurface>>) -> Self {
        Self {
            surface,
            config: NavigationPanelConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationPanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the navigation bar. Clicks are routed through `router`.
    pub fn ui(&mut self, ui: &mut egui::Ui, router: &InputRouter) {
        // Copy out what we need so the surface is unlocked while routing
        let (prev_enabled, next_enabled, counter, indicators) = {
            let surface = self.surface.lock();
            (
                surface.prev_enabled(),
                surface.next_enabled(),
                surface.counter(),
                surface.indicators().to_vec(),
            )
        };
        let total = router.navigation().total_slides();

        ui.horizontal(|ui| {
            let prev = ui.add_enabled(prev_enabled, egui::Button::new(format!("{} Previous", icons::PREVIOUS)));
            if prev.on_hover_text("Previous slide (Left Arrow)").clicked() {
                router.route(deck_core::TransitionRequest::Retreat);
            }

            ui.separator();

            if self.config.show_indicators {
                for (i, active) in indicators.iter().enumerate() {
                    if self.indicator(ui, i + 1, *active) {
                        router.go_to(i + 1);
                    }
                }
                ui.separator();
            }

            ui.label(egui::RichText::new(format!("{} / {}", counter, total)).strong());

            ui.separator();

            let next = ui.add_enabled(next_enabled, egui::Button::new(format!("Next {}", icons::NEXT)));
            if next.on_hover_text("Next slide (Right Arrow or Space)").clicked() {
                router.route(deck_core::TransitionRequest::Advance);
            }
        });
    }

    /// Draw one indicator dot; returns true when clicked
    fn indicator(&self, ui: &mut egui::Ui, position: usize, active: bool) -> bool {
        let radius = self.config.indicator_radius;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(radius * 2.0 + 4.0), Sense::click());

        let color = if active { self.config.active_color } else { self.config.inactive_color };
        let radius = if response.hovered() { radius + 1.0 } else { radius };
        ui.painter().circle(rect.center(), radius, color, Stroke::NONE);

        response.on_hover_text(format!("Go to slide {}", position)).clicked()
    }
}
