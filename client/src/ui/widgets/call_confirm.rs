//! Accept/reject popup anchored below a call button.

use eframe::egui;

use crate::ui::i18n::Catalog;
use crate::ui::model::ButtonKind;
use crate::ui::theme;

const POPUP_WIDTH: f32 = 160.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Accepted,
    Rejected,
}

pub struct CallConfirm {
    anchor: ButtonKind,
    anchor_rect: Option<egui::Rect>,
    visible: bool,
    accept_text: String,
    reject_text: String,
}

impl CallConfirm {
    pub fn new(anchor: ButtonKind, catalog: &Catalog) -> Self {
        let mut confirm = Self {
            anchor,
            anchor_rect: None,
            visible: true,
            accept_text: String::new(),
            reject_text: String::new(),
        };
        confirm.retranslate(catalog);
        confirm
    }

    pub fn anchor(&self) -> ButtonKind {
        self.anchor
    }

    pub fn anchor_rect(&self) -> Option<egui::Rect> {
        self.anchor_rect
    }

    /// Button captions as drawn: accept, then reject.
    pub fn labels(&self) -> (&str, &str) {
        (&self.accept_text, &self.reject_text)
    }

    pub fn retranslate(&mut self, catalog: &Catalog) {
        self.accept_text = catalog.tr("Accept").to_string();
        self.reject_text = catalog.tr("Reject").to_string();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Screen rect of the anchor button from the latest frame.
    pub fn set_anchor_rect(&mut self, rect: egui::Rect) {
        self.anchor_rect = Some(rect);
    }

    /// Records the user's answer. The popup hides itself and reports each
    /// answer at most once.
    pub fn resolve(&mut self, outcome: ConfirmOutcome) -> Option<ConfirmOutcome> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        Some(outcome)
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<ConfirmOutcome> {
        if !self.visible {
            return None;
        }
        let anchor = self.anchor_rect?;

        let pos = egui::pos2(anchor.center().x - POPUP_WIDTH / 2.0, anchor.bottom() + 4.0);
        let mut clicked = None;
        let (accept, reject) = (&self.accept_text, &self.reject_text);

        egui::Area::new(egui::Id::new("chat_header_call_confirm"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::COLOR_BG_MEDIUM)
                    .stroke(egui::Stroke::new(1.0, theme::COLOR_BG_INPUT))
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(POPUP_WIDTH);
                        ui.horizontal(|ui| {
                            if confirm_button(ui, accept, theme::COLOR_GREEN).clicked() {
                                clicked = Some(ConfirmOutcome::Accepted);
                            }
                            if confirm_button(ui, reject, theme::COLOR_RED).clicked() {
                                clicked = Some(ConfirmOutcome::Rejected);
                            }
                        });
                    });
            });

        clicked.and_then(|outcome| self.resolve(outcome))
    }
}

fn confirm_button(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE))
        .fill(color)
        .corner_radius(6.0)
        .min_size(egui::vec2(72.0, 28.0));
    ui.add(button)
}
