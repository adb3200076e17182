//! Accessibility labels and the skip-navigation link

use egui::{Id, Response, Sense, Ui, WidgetInfo, WidgetType};

/// Role description given to every slide panel
pub const SLIDE_ROLE: &str = "tabpanel";

/// Role description of the slide area
pub const MAIN_ROLE: &str = "main";

/// Accessible name of a slide panel
pub fn slide_label(number: usize, total: usize) -> String {
    format!("Slide {} of {}", number, total)
}

/// Full description announced for a slide panel
pub fn slide_description(number: usize, total: usize) -> String {
    format!("{}: {}", SLIDE_ROLE, slide_label(number, total))
}

/// Attach the slide label to a panel response
pub fn label_slide(response: &Response, number: usize, total: usize) {
    let description = slide_description(number, total);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, &description));
}

/// Make `rect` a focusable landmark that the skip link can jump to
pub fn main_landmark(ui: &mut Ui, id: Id, rect: egui::Rect) -> Response {
    let response = ui.interact(rect, id, Sense::focusable_noninteractive());
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Other, format!("{}: main content", MAIN_ROLE)));
    response
}

/// "Skip to main content" link; moves keyboard focus to `target`
pub fn skip_link(ui: &mut Ui, target: Id) -> Response {
    let response = ui.link("Skip to main content");
    if response.clicked() {
        ui.memory_mut(|memory| memory.request_focus(target));
    }
    response
}
