//! Fixed-size header button painted from a [`ButtonView`].

use eframe::egui;

use crate::ui::model::{ButtonKind, ButtonView};
use crate::ui::theme;

/// Draws the button. Returns `None` when the view is hidden, so hidden
/// buttons take no space and cannot be clicked.
pub fn show(ui: &mut egui::Ui, kind: ButtonKind, view: &ButtonView) -> Option<egui::Response> {
    if !view.visible {
        return None;
    }

    let text_size = match kind {
        ButtonKind::Call | ButtonKind::Video => 18.0,
        ButtonKind::Mic | ButtonKind::Vol => 10.0,
    };
    let button = egui::Button::new(
        egui::RichText::new(kind.icon())
            .size(text_size)
            .color(egui::Color32::WHITE),
    )
    .fill(theme::style_fill(view.style))
    .corner_radius(4.0)
    .min_size(kind.size());

    let response = ui
        .add_enabled(view.enabled, button)
        .on_hover_text(&view.tooltip)
        .on_disabled_hover_text(&view.tooltip);
    Some(response)
}
