//! Slide rendering

use std::sync::Arc;
use std::time::Instant;

use deck_core::{DeckConfig, SlideSpec};
use egui::{Color32, Frame, Margin, RichText, Rounding, Stroke, Ui};

use crate::accessibility;
use crate::animation::{AnimationFrame, SlideAnimator};
use crate::theme;
use crate::widget_utils::WidgetId;

/// Draws slide panels from the deck configuration
pub struct SlideView {
    config: Arc<DeckConfig>,
    animator: Arc<SlideAnimator>,
}

impl SlideView {
    pub fn new(config: Arc<DeckConfig>, animator: Arc<SlideAnimator>) -> Self {
        Self { config, animator }
    }

    /// Draw slide `number` with its entrance animation
    pub fn show(&self, ui: &mut Ui, number: usize) {
        let now = Instant::now();
        let spec = self.config.slide(number);
        self.panel(
            ui,
            number,
            &spec,
            |index| self.animator.item_frame(number, index, now),
            || self.animator.chart_frame(number, now),
        );

        if self.animator.is_animating(number, spec.lines.len() + 1, now) {
            ui.ctx().request_repaint();
        }
    }

    /// Draw slide `number` at rest, as used by print preview
    pub fn show_static(&self, ui: &mut Ui, number: usize) {
        let spec = self.config.slide(number);
        self.panel(ui, number, &spec, |_| AnimationFrame::REST, || AnimationFrame::REST);
    }

    fn panel(
        &self,
        ui: &mut Ui,
        number: usize,
        spec: &SlideSpec,
        item_frame: impl Fn(usize) -> AnimationFrame,
        chart_frame: impl Fn() -> AnimationFrame,
    ) {
        let total = self.config.total_slides;
        let text_color = ui.visuals().text_color();

        let response = ui
            .push_id(WidgetId::new("panel").slide(number).id(), |ui| {
                Frame::none()
                    .inner_margin(Margin::same(32.0))
                    .rounding(Rounding::same(12.0))
                    .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        let title = item_frame(0);
                        animated(ui, title, |ui| {
                            ui.heading(RichText::new(&spec.title).strong().color(fade(text_color, title.opacity)));
                        });
                        ui.add_space(16.0);

                        for (i, line) in spec.lines.iter().enumerate() {
                            let frame = item_frame(i + 1);
                            animated(ui, frame, |ui| {
                                ui.label(RichText::new(format!("• {}", line)).color(fade(text_color, frame.opacity)));
                            });
                        }

                        if !spec.metrics.is_empty() {
                            ui.add_space(24.0);
                            let frame = chart_frame();
                            animated(ui, frame, |ui| {
                                ui.horizontal_wrapped(|ui| {
                                    for metric in &spec.metrics {
                                        metric_card(ui, &metric.label, &metric.formatted(), frame.opacity);
                                    }
                                });
                            });
                        }
                    })
                    .response
            })
            .inner;

        accessibility::label_slide(&response, number, total);
    }
}

/// Lay out `add` shifted by the frame offset
fn animated(ui: &mut Ui, frame: AnimationFrame, add: impl FnOnce(&mut Ui)) {
    ui.add_space(frame.offset.y);
    ui.horizontal(|ui| {
        ui.add_space(frame.offset.x);
        ui.vertical(add);
    });
}

fn fade(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

fn metric_card(ui: &mut Ui, label: &str, value: &str, opacity: f32) {
    let value_color = fade(theme::accent_color(), opacity);
    let label_color = fade(ui.visuals().weak_text_color(), opacity);
    Frame::none()
        .inner_margin(Margin::same(16.0))
        .rounding(Rounding::same(8.0))
        .fill(fade(theme::accent_color(), 0.15 * opacity))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(value).size(28.0).strong().color(value_color));
                ui.label(RichText::new(label).small().color(label_color));
            });
        });
}
