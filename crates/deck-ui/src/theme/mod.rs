use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Teal Dark".to_string(),
            dark_mode: true,
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "Teal Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the presentation theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let accent = accent_color();
    let (bg_color, panel_bg, widget_bg, text_color) = if theme.dark_mode {
        (
            Color32::from_rgb(31, 33, 33),
            Color32::from_rgb(38, 40, 40),
            Color32::from_rgb(48, 51, 51),
            Color32::from_rgb(245, 245, 245),
        )
    } else {
        (
            Color32::from_rgb(252, 252, 249),
            Color32::from_rgb(255, 255, 253),
            Color32::from_rgb(240, 240, 236),
            Color32::from_rgb(19, 52, 59),
        )
    };

    // Window and panel styling
    visuals.window_fill = panel_bg;
    visuals.panel_fill = bg_color;
    visuals.extreme_bg_color = bg_color;
    visuals.faint_bg_color = widget_bg;

    // Widget styling
    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
    ] {
        widgets.fg_stroke = Stroke::new(1.0, text_color);
        widgets.rounding = Rounding::same(6.0);
    }
    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.hovered.bg_fill = accent.linear_multiply(0.6);

    visuals.widgets.active.bg_fill = accent;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    // Selection and highlighting
    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    // Apply spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(20.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(16.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(40.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(16.0, FontFamily::Monospace));

    style.text_styles = font_sizes;

    // Apply the style and visuals
    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(33, 128, 141)
}

/// Colour of an inactive indicator dot
pub fn muted_color() -> Color32 {
    Color32::from_gray(120)
}
