//! Main application entry point

use std::sync::Arc;
use eframe::egui::{self, Context, Ui};
use anyhow::Result;
use parking_lot::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use deck_core::{DeckConfig, InputRouter, PresentationState, DisplaySync};
use deck_ui::{
    accessibility, panel_ids, progress, shell,
    navigation_panel::NavigationPanelConfig,
    ChromeState, NavigationPanel, SlideAnimator, SlideSurface, SlideView, Theme,
};

mod input_map;

use input_map::{chrome_key, gesture_point, key_input, ChromeKey};

/// Main application state
struct PresenterApp {
    /// Navigation, timer, events and configuration
    state: PresentationState,

    /// Turns key and gesture input into transitions
    router: InputRouter,

    /// View model updated by `display_sync`
    surface: Arc<Mutex<SlideSurface>>,

    /// Subscribers are held weakly by the engine, keep them alive here
    _display_sync: Arc<DisplaySync<SlideSurface>>,
    _animator: Arc<SlideAnimator>,

    slide_view: SlideView,
    navigation_panel: NavigationPanel,
    chrome: ChromeState,

    /// Focus target of the skip link
    main_content: egui::Id,
}

impl PresenterApp {
    fn new(cc: &eframe::CreationContext<'_>, state: PresentationState) -> Self {
        let theme = if state.settings.read().dark_mode { Theme::default() } else { Theme::light() };
        deck_ui::apply_theme(&cc.egui_ctx, &theme);
        Self::from_state(state)
    }

    /// Wire the view model and decorators onto the session's engine
    fn from_state(state: PresentationState) -> Self {
        let settings = state.settings.read().clone();

        let navigation = state.navigation.clone();
        let surface = Arc::new(Mutex::new(SlideSurface::new(navigation.total_slides())));

        let display_sync = Arc::new(DisplaySync::new(surface.clone()));
        navigation.add_subscriber(display_sync.clone());
        if let Err(e) = display_sync.refresh(&navigation.context()) {
            warn!("Initial display sync incomplete: {}", e);
        }

        let animator = Arc::new(SlideAnimator::new(settings.animate_entrances));
        navigation.add_subscriber(animator.clone());
        animator.activate_at(navigation.current_slide(), std::time::Instant::now());

        let slide_view = SlideView::new(state.config.clone(), animator.clone());
        let navigation_panel = NavigationPanel::new(surface.clone()).with_config(NavigationPanelConfig {
            show_indicators: settings.show_indicators,
            ..Default::default()
        });

        Self {
            router: state.router(),
            state,
            surface,
            _display_sync: display_sync,
            _animator: animator,
            slide_view,
            navigation_panel,
            chrome: ChromeState::default(),
            main_content: egui::Id::new(panel_ids::MAIN_CONTENT),
        }
    }

    /// Route this frame's raw input before any widget sees it
    fn handle_input(&mut self, ctx: &Context) {
        let events = ctx.input(|i| i.events.clone());
        let mut consumed = Vec::new();

        for event in events {
            match event {
                egui::Event::Key { key, pressed: true, modifiers, .. } => {
                    if let Some(chrome) = chrome_key(key, modifiers, self.chrome.print_preview) {
                        self.handle_chrome_key(ctx, chrome);
                        consumed.push((modifiers, key));
                        continue;
                    }

                    if self.chrome.print_preview {
                        continue;
                    }

                    if self.router.handle_key(key_input(key)).is_consumed() {
                        consumed.push((modifiers, key));
                    }
                }
                egui::Event::Touch { phase, pos, .. } if !self.chrome.print_preview => match phase {
                    egui::TouchPhase::Start => self.router.begin_gesture(gesture_point(pos)),
                    egui::TouchPhase::End => {
                        self.router.end_gesture(gesture_point(pos));
                    }
                    egui::TouchPhase::Cancel => self.router.cancel_gesture(),
                    egui::TouchPhase::Move => {}
                },
                egui::Event::PointerButton { pos, button: egui::PointerButton::Primary, pressed, .. }
                    if !self.chrome.print_preview =>
                {
                    if pressed {
                        self.router.begin_gesture(gesture_point(pos));
                    } else {
                        self.router.end_gesture(gesture_point(pos));
                    }
                }
                _ => {}
            }
        }

        // Keep focused buttons from reacting to keys we already routed
        if !consumed.is_empty() {
            ctx.input_mut(|i| {
                for (modifiers, key) in consumed {
                    i.consume_key(modifiers, key);
                }
            });
        }
    }

    fn handle_chrome_key(&mut self, ctx: &Context, key: ChromeKey) {
        match key {
            ChromeKey::ToggleFullscreen => {
                self.chrome.observe_fullscreen(ctx.input(|i| i.viewport().fullscreen));
                let command = self.chrome.toggle_fullscreen(&self.state.event_bus);
                ctx.send_viewport_cmd(command);
            }
            ChromeKey::TogglePrintPreview | ChromeKey::ClosePreview => {
                self.chrome.toggle_print_preview(&self.state.event_bus)
            }
        }
    }

    /// Active slide with the skip link and main landmark
    fn slide_area(&mut self, ui: &mut Ui) {
        accessibility::skip_link(ui, self.main_content);

        let (active, scroll_reset) = {
            let mut surface = self.surface.lock();
            (surface.active_slide(), surface.take_scroll_reset())
        };

        let mut scroll = egui::ScrollArea::vertical()
            .id_source(panel_ids::SLIDES)
            .auto_shrink([false; 2]);
        if scroll_reset {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let output = scroll.show(ui, |ui| match active {
            Some(number) => self.slide_view.show(ui, number),
            None => {
                ui.weak("No active slide");
            }
        });

        accessibility::main_landmark(ui, self.main_content, output.inner_rect);
    }

    /// Every slide stacked, without animation or controls
    fn print_preview(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .id_source("print_preview")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(&self.state.config.title);
                ui.add_space(16.0);
                for number in 1..=self.state.navigation.total_slides() {
                    self.slide_view.show_static(ui, number);
                    ui.add_space(24.0);
                }
            });
    }
}

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if self.chrome.show_controls() {
            if self.state.settings.read().show_progress_bar {
                let ratio = self.surface.lock().progress();
                progress::progress_bar(ctx, ratio);
            }

            egui::TopBottomPanel::bottom(panel_ids::NAVIGATION)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.add_space(6.0);
                    ui.vertical_centered(|ui| {
                        self.navigation_panel.ui(ui, &self.router);
                    });
                    ui.add_space(6.0);
                });
        }

        for command in shell::chrome_buttons(ctx, &mut self.chrome, &self.state.event_bus) {
            ctx.send_viewport_cmd(command);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.chrome.print_preview {
                self.print_preview(ui);
            } else {
                self.slide_area(ui);
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.end_session();
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DeckConfig::load(&path)?,
        None => DeckConfig::default(),
    };

    info!("Starting presentation \"{}\" with {} slides", config.title, config.total_slides);
    info!("Navigation: arrow keys, space, Home/End or number keys; F11 fullscreen, Ctrl+P print preview");

    let title = config.title.clone();
    let state = PresentationState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Box::new(PresenterApp::new(cc, state))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PresenterApp {
        PresenterApp::from_state(PresentationState::new(DeckConfig::default()).unwrap())
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn pointer(x: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, 100.0),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Run one frame of input handling; returns whether `watched` was still pressed afterwards
    fn frame(app: &mut PresenterApp, ctx: &Context, events: Vec<egui::Event>, watched: egui::Key) -> bool {
        let input = egui::RawInput { events, ..Default::default() };
        let mut still_pressed = false;
        let _ = ctx.run(input, |ctx| {
            app.handle_input(ctx);
            still_pressed = ctx.input(|i| i.key_pressed(watched));
        });
        still_pressed
    }

    #[test]
    fn test_arrow_key_advances_and_is_consumed() {
        let ctx = Context::default();
        let mut app = app();

        let still_pressed = frame(&mut app, &ctx, vec![key(egui::Key::ArrowRight)], egui::Key::ArrowRight);
        assert_eq!(app.state.navigation.current_slide(), 2);
        assert!(!still_pressed);
        assert_eq!(app.surface.lock().counter(), 2);
    }

    #[test]
    fn test_unrecognized_key_is_left_alone() {
        let ctx = Context::default();
        let mut app = app();

        let still_pressed = frame(&mut app, &ctx, vec![key(egui::Key::A)], egui::Key::A);
        assert_eq!(app.state.navigation.current_slide(), 1);
        assert!(still_pressed);

        // Escape outside print preview keeps its default handling
        let still_pressed = frame(&mut app, &ctx, vec![key(egui::Key::Escape)], egui::Key::Escape);
        assert!(still_pressed);
    }

    #[test]
    fn test_print_preview_blocks_navigation() {
        let ctx = Context::default();
        let mut app = app();
        app.chrome.toggle_print_preview(&app.state.event_bus);

        let still_pressed = frame(&mut app, &ctx, vec![key(egui::Key::ArrowRight)], egui::Key::ArrowRight);
        assert_eq!(app.state.navigation.current_slide(), 1);
        assert!(still_pressed);

        frame(&mut app, &ctx, vec![pointer(300.0, true), pointer(200.0, false)], egui::Key::A);
        assert_eq!(app.state.navigation.current_slide(), 1);

        let still_pressed = frame(&mut app, &ctx, vec![key(egui::Key::Escape)], egui::Key::Escape);
        assert!(!app.chrome.print_preview);
        assert!(!still_pressed);
    }

    #[test]
    fn test_pointer_swipe_advances() {
        let ctx = Context::default();
        let mut app = app();

        frame(&mut app, &ctx, vec![pointer(300.0, true), pointer(200.0, false)], egui::Key::A);
        assert_eq!(app.state.navigation.current_slide(), 2);

        frame(&mut app, &ctx, vec![pointer(200.0, true), pointer(300.0, false)], egui::Key::A);
        assert_eq!(app.state.navigation.current_slide(), 1);
    }
}
