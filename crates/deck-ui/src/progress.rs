//! Presentation progress strip

use egui::{Context, Id, LayerId, Order, Pos2, Rect, Rounding};

use crate::theme;

/// Height of the strip in points
pub const PROGRESS_HEIGHT: f32 = 3.0;

/// Seconds the fill takes to catch up with a new ratio
pub const PROGRESS_ANIMATION_SECS: f32 = 0.3;

/// Draw the progress strip across the top of the window.
///
/// `ratio` is the surface's `current / total`; the fill eases toward it.
pub fn progress_bar(ctx: &Context, ratio: f32) {
    let target = ratio.clamp(0.0, 1.0);
    let shown = ctx.animate_value_with_time(Id::new("progress_fill"), target, PROGRESS_ANIMATION_SECS);

    let screen = ctx.screen_rect();
    let track = Rect::from_min_max(screen.min, Pos2::new(screen.max.x, screen.min.y + PROGRESS_HEIGHT));
    let fill = Rect::from_min_max(track.min, Pos2::new(track.min.x + fill_width(track.width(), shown), track.max.y));

    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("progress_bar")));
    painter.rect_filled(track, Rounding::ZERO, theme::accent_color().linear_multiply(0.2));
    painter.rect_filled(fill, Rounding::ZERO, theme::accent_color());
}

/// Width of the filled part of a track
pub fn fill_width(track_width: f32, ratio: f32) -> f32 {
    track_width * ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width() {
        assert_eq!(fill_width(800.0, 5.0 / 8.0), 500.0);
        assert_eq!(fill_width(800.0, 1.5), 800.0);
        assert_eq!(fill_width(800.0, -1.0), 0.0);
    }
}
