//! User interface components for the slide presenter
//!
//! This crate provides the egui-based view of a presentation: the slide
//! surface view model, slide rendering, the navigation bar, the progress
//! strip, entrance animations and the fullscreen/print chrome.

pub mod accessibility;
pub mod animation;
pub mod navigation_panel;
pub mod progress;
pub mod shell;
pub mod slide_view;
pub mod surface;
pub mod theme;
pub mod widget_utils;

/// Re-export commonly used types
pub use animation::{AnimationFrame, EntranceAnimation, SlideAnimator};
pub use navigation_panel::NavigationPanel;
pub use shell::ChromeState;
pub use slide_view::SlideView;
pub use surface::SlideSurface;
pub use theme::{Theme, apply_theme};
pub use widget_utils::WidgetId;

// Common icon definitions
pub mod icons {
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const FULLSCREEN: &str = "⛶";
    pub const PRINT: &str = "🖨";
    pub const CLOSE: &str = "✕";
}

// Panel IDs
pub mod panel_ids {
    pub const NAVIGATION: &str = "navigation_panel";
    pub const SLIDES: &str = "slide_panel";
    pub const MAIN_CONTENT: &str = "main-content";
}
