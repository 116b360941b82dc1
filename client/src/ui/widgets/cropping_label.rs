//! Single-line label that elides overlong text and can be edited in place.

use eframe::egui;

use crate::ui::theme;

const NAME_FONT_SIZE: f32 = 15.0;

/// Result of one frame of an in-progress edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Finished(String),
    Cancelled,
}

pub struct CroppingLabel {
    editable: bool,
    editing: Option<String>,
    // Text the current edit started from.
    original: String,
}

impl CroppingLabel {
    pub fn new(editable: bool) -> Self {
        Self {
            editable,
            editing: None,
            original: String::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enters edit mode seeded with `text`. No-op for read-only labels.
    pub fn begin_edit(&mut self, text: &str) {
        if self.editable {
            self.editing = Some(text.to_string());
            self.original = text.to_string();
        }
    }

    /// Leaves edit mode. An edit that leaves the text as it was counts as
    /// cancelled.
    pub fn finish_edit(&mut self) -> Option<EditOutcome> {
        let edited = self.editing.take()?.trim().to_string();
        if edited == self.original {
            Some(EditOutcome::Cancelled)
        } else {
            Some(EditOutcome::Finished(edited))
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Draws the label. Returns the edit text once the user confirms it.
    pub fn show(&mut self, ui: &mut egui::Ui, text: &str, tooltip: &str) -> Option<String> {
        match self.show_editor(ui) {
            Some(EditOutcome::Finished(edited)) => return Some(edited),
            Some(EditOutcome::Cancelled) => return None,
            None if self.is_editing() => return None,
            None => {}
        }

        let response = ui
            .add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .strong()
                        .size(NAME_FONT_SIZE)
                        .color(theme::COLOR_TEXT),
                )
                .truncate()
                .sense(egui::Sense::click()),
            )
            .on_hover_text(tooltip);

        if response.double_clicked() {
            self.begin_edit(text);
        }
        None
    }

    fn show_editor(&mut self, ui: &mut egui::Ui) -> Option<EditOutcome> {
        let buffer = self.editing.as_mut()?;
        let response = ui.add(
            egui::TextEdit::singleline(buffer)
                .font(egui::FontId::proportional(NAME_FONT_SIZE))
                .desired_width(ui.available_width()),
        );

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.cancel_edit();
            return Some(EditOutcome::Cancelled);
        }

        if response.lost_focus() {
            return self.finish_edit();
        }

        if !response.has_focus() {
            response.request_focus();
        }
        None
    }
}

impl Default for CroppingLabel {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn frame(
        ctx: &egui::Context,
        label: &mut CroppingLabel,
        text: &str,
        events: Vec<egui::Event>,
    ) -> Option<String> {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut reported = None;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(edited) = label.show(ui, text, text) {
                    reported = Some(edited);
                }
            });
        });
        reported
    }

    #[test]
    fn test_begin_and_finish_edit() {
        let mut label = CroppingLabel::default();
        label.begin_edit("Alice");
        assert!(label.is_editing());
        label.editing = Some("Alice Liddell ".to_string());
        assert_eq!(
            label.finish_edit(),
            Some(EditOutcome::Finished("Alice Liddell".to_string()))
        );
        assert!(!label.is_editing());
    }

    #[test]
    fn test_unchanged_edit_is_cancelled() {
        let mut label = CroppingLabel::default();
        label.begin_edit("Alice");
        assert_eq!(label.finish_edit(), Some(EditOutcome::Cancelled));

        label.begin_edit("Alice");
        label.editing = Some("  Alice  ".to_string());
        assert_eq!(label.finish_edit(), Some(EditOutcome::Cancelled));
    }

    #[test]
    fn test_finish_trims_whitespace() {
        let mut label = CroppingLabel::default();
        label.begin_edit("   ");
        assert_eq!(
            label.finish_edit(),
            Some(EditOutcome::Finished(String::new()))
        );
    }

    #[test]
    fn test_read_only_label_never_edits() {
        let mut label = CroppingLabel::new(false);
        label.begin_edit("Bob");
        assert!(!label.is_editing());
        assert_eq!(label.finish_edit(), None);
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut label = CroppingLabel::default();
        label.begin_edit("Carol");
        label.cancel_edit();
        assert_eq!(label.finish_edit(), None);
    }

    #[test]
    fn test_show_without_interaction_reports_nothing() {
        let mut label = CroppingLabel::default();
        let ctx = egui::Context::default();
        let mut reported = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                reported = label.show(ui, "A very long display name", "A very long display name");
            });
        });
        assert_eq!(reported, None);
    }

    #[test]
    fn test_enter_finishes_edit() {
        let ctx = egui::Context::default();
        let mut label = CroppingLabel::default();
        label.begin_edit("Alice");

        assert_eq!(frame(&ctx, &mut label, "Alice", Vec::new()), None);
        assert_eq!(
            frame(&ctx, &mut label, "Alice", vec![egui::Event::Text(" L.".into())]),
            None
        );
        assert!(label.is_editing());

        let reported = frame(&ctx, &mut label, "Alice", vec![key(egui::Key::Enter)]);
        assert_eq!(reported, Some("Alice L.".to_string()));
        assert!(!label.is_editing());
    }

    #[test]
    fn test_escape_cancels_edit() {
        let ctx = egui::Context::default();
        let mut label = CroppingLabel::default();
        label.begin_edit("Alice");

        frame(&ctx, &mut label, "Alice", Vec::new());
        frame(&ctx, &mut label, "Alice", vec![egui::Event::Text("x".into())]);
        let reported = frame(&ctx, &mut label, "Alice", vec![key(egui::Key::Escape)]);

        assert_eq!(reported, None);
        assert!(!label.is_editing());
    }

    #[test]
    fn test_enter_without_changes_reports_nothing() {
        let ctx = egui::Context::default();
        let mut label = CroppingLabel::default();
        label.begin_edit("Alice");

        frame(&ctx, &mut label, "Alice", Vec::new());
        let reported = frame(&ctx, &mut label, "Alice", vec![key(egui::Key::Enter)]);

        assert_eq!(reported, None);
        assert!(!label.is_editing());
    }
}
