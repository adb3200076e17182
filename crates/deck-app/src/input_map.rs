//! Mapping from egui input to router input

use deck_core::{GesturePoint, KeyInput};
use egui::{Key, Modifiers, Pos2};

/// Keys handled by the window chrome rather than navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeKey {
    ToggleFullscreen,
    TogglePrintPreview,
    ClosePreview,
}

/// Escape only belongs to the chrome while print preview is shown
pub fn chrome_key(key: Key, modifiers: Modifiers, print_preview: bool) -> Option<ChromeKey> {
    match key {
        Key::F11 => Some(ChromeKey::ToggleFullscreen),
        Key::P if modifiers.command => Some(ChromeKey::TogglePrintPreview),
        Key::Escape if print_preview => Some(ChromeKey::ClosePreview),
        _ => None,
    }
}

/// Translate an egui key into a navigation key
pub fn key_input(key: Key) -> KeyInput {
    match key {
        Key::ArrowRight => KeyInput::ArrowRight,
        Key::ArrowLeft => KeyInput::ArrowLeft,
        Key::Space => KeyInput::Space,
        Key::Home => KeyInput::Home,
        Key::End => KeyInput::End,
        Key::Num0 => KeyInput::Digit(0),
        Key::Num1 => KeyInput::Digit(1),
        Key::Num2 => KeyInput::Digit(2),
        Key::Num3 => KeyInput::Digit(3),
        Key::Num4 => KeyInput::Digit(4),
        Key::Num5 => KeyInput::Digit(5),
        Key::Num6 => KeyInput::Digit(6),
        Key::Num7 => KeyInput::Digit(7),
        Key::Num8 => KeyInput::Digit(8),
        Key::Num9 => KeyInput::Digit(9),
        _ => KeyInput::Other,
    }
}

pub fn gesture_point(pos: Pos2) -> GesturePoint {
    GesturePoint::new(pos.x, pos.y)
}
