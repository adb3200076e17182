//! Presentation chrome: fullscreen and print-preview toggles

use egui::{Align2, Area, Context, Order, RichText, ViewportCommand};
use deck_core::events::{
    events::{FullscreenToggled, PrintPreviewToggled},
    EventBus,
};
use tracing::info;

use crate::icons;

/// Window-level presentation state that is not part of navigation
#[derive(Debug, Clone, Default)]
pub struct ChromeState {
    pub fullscreen: bool,
    pub print_preview: bool,
}

impl ChromeState {
    /// Adopt the window's reported fullscreen state, if known.
    ///
    /// The window can leave fullscreen without going through
    /// `toggle_fullscreen` (window manager, OS controls).
    pub fn observe_fullscreen(&mut self, reported: Option<bool>) {
        if let Some(fullscreen) = reported {
            self.fullscreen = fullscreen;
        }
    }

    /// Flip fullscreen and return the viewport command to send
    pub fn toggle_fullscreen(&mut self, bus: &EventBus) -> ViewportCommand {
        self.fullscreen = !self.fullscreen;
        info!("Fullscreen {}", if self.fullscreen { "on" } else { "off" });
        bus.publish(FullscreenToggled { enabled: self.fullscreen });
        ViewportCommand::Fullscreen(self.fullscreen)
    }

    /// Flip the print-preview layout
    pub fn toggle_print_preview(&mut self, bus: &EventBus) {
        self.print_preview = !self.print_preview;
        info!("Print preview {}", if self.print_preview { "on" } else { "off" });
        bus.publish(PrintPreviewToggled { enabled: self.print_preview });
    }

    /// Whether on-screen controls (buttons, progress, navigation) are drawn
    pub fn show_controls(&self) -> bool {
        !self.print_preview
    }
}

/// Draw the floating buttons in the top-right corner.
///
/// Returns viewport commands the caller should send.
pub fn chrome_buttons(ctx: &Context, chrome: &mut ChromeState, bus: &EventBus) -> Vec<ViewportCommand> {
    let mut commands = Vec::new();

    Area::new("chrome_buttons")
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .show(ctx, |ui| {
            chrome.observe_fullscreen(ctx.input(|i| i.viewport().fullscreen));

            if chrome.print_preview {
                let close = ui.button(RichText::new(format!("{} Close preview", icons::CLOSE)).size(14.0));
                if close.on_hover_text("Leave print preview (Ctrl+P or Escape)").clicked() {
                    chrome.toggle_print_preview(bus);
                }
                return;
            }

            ui.vertical(|ui| {
                let fullscreen = ui.button(RichText::new(icons::FULLSCREEN).size(16.0));
                if fullscreen.on_hover_text("Toggle Fullscreen (F11)").clicked() {
                    commands.push(chrome.toggle_fullscreen(bus));
                }

                let print = ui.button(RichText::new(icons::PRINT).size(16.0));
                if print.on_hover_text("Print Preview (Ctrl+P)").clicked() {
                    chrome.toggle_print_preview(bus);
                }
            });
        });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::events::handler_from_fn;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_fullscreen_toggle_round_trip() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe::<FullscreenToggled>(handler_from_fn(move |event| {
            if let Some(toggled) = event.as_any().downcast_ref::<FullscreenToggled>() {
                sink.lock().push(toggled.enabled);
            }
        }));

        let mut chrome = ChromeState::default();
        assert!(matches!(chrome.toggle_fullscreen(&bus), ViewportCommand::Fullscreen(true)));
        assert!(matches!(chrome.toggle_fullscreen(&bus), ViewportCommand::Fullscreen(false)));
        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_fullscreen_left_externally() {
        let bus = EventBus::new();
        let mut chrome = ChromeState::default();
        assert!(matches!(chrome.toggle_fullscreen(&bus), ViewportCommand::Fullscreen(true)));

        // Window left fullscreen on its own; the next toggle must re-enter it
        chrome.observe_fullscreen(Some(false));
        assert!(matches!(chrome.toggle_fullscreen(&bus), ViewportCommand::Fullscreen(true)));

        chrome.observe_fullscreen(None);
        assert!(chrome.fullscreen);
    }

    #[test]
    fn test_print_preview_hides_controls() {
        let bus = EventBus::new();
        let mut chrome = ChromeState::default();
        assert!(chrome.show_controls());
        chrome.toggle_print_preview(&bus);
        assert!(!chrome.show_controls());
    }
}
