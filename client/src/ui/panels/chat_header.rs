//! Conversation header: avatar, editable peer name, call and mute buttons.
//!
//! All button visuals are cached in [`ButtonView`]s that are recomputed as a
//! whole by [`ChatHeader::update_buttons_view`] after every state change.
//! Clicks, name edits and call-confirm answers are reported to the owner as
//! [`HeaderEvent`]s on a channel.

use crossbeam_channel::Sender;
use eframe::egui;
use tracing::debug;

use crate::errors::HeaderResult;
use crate::ui::i18n::Catalog;
use crate::ui::model::{
    call_tooltip, mic_tooltip, video_tooltip, vol_tooltip, ButtonKind, ButtonView,
    CallButtonState, HeaderEvent, Mode, StyleTag, ToolButtonState,
};
use crate::ui::widgets::{
    state_button, Avatar, CallConfirm, ConfirmOutcome, CroppingLabel,
};

const HEAD_LAYOUT_SPACING: f32 = 5.0;
const MIC_BUTTONS_LAYOUT_SPACING: f32 = 4.0;
const BUTTONS_LAYOUT_HOR_SPACING: f32 = 4.0;
const HEADER_HEIGHT: f32 = 40.0;

/// Content of the vertical region that holds the name label.
pub enum NameRegionItem {
    Name,
    Stretch,
    Widget(Box<dyn FnMut(&mut egui::Ui)>),
    Layout(egui::Layout, Box<dyn FnMut(&mut egui::Ui)>),
}

pub struct ChatHeader {
    mode: Mode,
    buttons_hidden: bool,
    call_state: CallButtonState,
    video_state: CallButtonState,
    mic_state: ToolButtonState,
    vol_state: ToolButtonState,
    views: [ButtonView; 4],
    // Screen rects of the buttons drawn in the latest frame.
    button_rects: [Option<egui::Rect>; 4],

    name: String,
    name_tooltip: String,
    name_label: CroppingLabel,
    name_region: Vec<NameRegionItem>,
    // Height of the non-stretch name region content in the previous frame.
    name_region_content: f32,

    avatar: Avatar,
    catalog: Catalog,
    call_confirm: Option<CallConfirm>,
    tx_event: Sender<HeaderEvent>,
}

impl ChatHeader {
    pub fn new(tx_event: Sender<HeaderEvent>) -> Self {
        let mut header = Self {
            mode: Mode::AV,
            buttons_hidden: false,
            call_state: CallButtonState::Disabled,
            video_state: CallButtonState::Disabled,
            mic_state: ToolButtonState::Disabled,
            vol_state: ToolButtonState::Disabled,
            views: Default::default(),
            button_rects: [None; 4],
            name: String::new(),
            name_tooltip: String::new(),
            name_label: CroppingLabel::new(true),
            name_region: vec![
                NameRegionItem::Stretch,
                NameRegionItem::Name,
                NameRegionItem::Stretch,
            ],
            name_region_content: 0.0,
            avatar: Avatar::default(),
            catalog: Catalog::new(),
            call_confirm: None,
            tx_event,
        };
        header.update_buttons_view();
        header
    }

    // --- Name ---

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        // Full text for names cropped on screen
        self.name_tooltip = name.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_tooltip(&self) -> &str {
        &self.name_tooltip
    }

    /// Completion of an in-place name edit. Empty edits are dropped and the
    /// previous name stays on screen.
    pub fn on_name_edited(&mut self, name: &str) {
        if name.is_empty() {
            debug!("empty name edit ignored");
            return;
        }
        self.set_name(name);
        self.emit(HeaderEvent::NameChanged(name.to_string()));
    }

    // --- Mode and button state ---

    /// `Mode::NONE` hides every button for the rest of this header's life.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if mode.is_none() {
            self.buttons_hidden = true;
            self.update_buttons_view();
        }
        debug!(?mode, hidden = self.buttons_hidden, "header mode set");
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buttons_hidden(&self) -> bool {
        self.buttons_hidden
    }

    pub fn update_call_buttons(&mut self, online: bool, audio: bool, video: bool) {
        let audio_available = online && self.mode.contains(Mode::AUDIO);
        let video_available = online && self.mode.contains(Mode::VIDEO);

        self.call_state = if !audio_available || video {
            CallButtonState::Disabled
        } else if audio {
            CallButtonState::InCall
        } else {
            CallButtonState::Available
        };

        self.video_state = if !video_available {
            CallButtonState::Disabled
        } else if video {
            CallButtonState::InCall
        } else if audio {
            CallButtonState::Disabled
        } else {
            CallButtonState::Available
        };

        self.update_buttons_view();
    }

    pub fn update_mute_mic_button(&mut self, active: bool, input_muted: bool) {
        self.mic_state = ToolButtonState::from_mute(active, input_muted);
        self.update_buttons_view();
    }

    pub fn update_mute_vol_button(&mut self, active: bool, output_muted: bool) {
        self.vol_state = ToolButtonState::from_mute(active, output_muted);
        self.update_buttons_view();
    }

    pub fn show_outgoing_call(&mut self, video: bool) {
        *self.call_button_state_mut(video) = CallButtonState::Outgoing;
        self.update_buttons_view();
    }

    pub fn show_incoming_call(&mut self, video: bool) {
        *self.call_button_state_mut(video) = CallButtonState::Incoming;
        self.update_buttons_view();
    }

    fn call_button_state_mut(&mut self, video: bool) -> &mut CallButtonState {
        if video {
            &mut self.video_state
        } else {
            &mut self.call_state
        }
    }

    pub fn call_state(&self) -> CallButtonState {
        self.call_state
    }

    pub fn video_state(&self) -> CallButtonState {
        self.video_state
    }

    pub fn mic_state(&self) -> ToolButtonState {
        self.mic_state
    }

    pub fn vol_state(&self) -> ToolButtonState {
        self.vol_state
    }

    pub fn button_view(&self, kind: ButtonKind) -> &ButtonView {
        &self.views[kind.index()]
    }

    /// Where `kind` was drawn in the latest frame, if it was drawn at all.
    pub fn button_rect(&self, kind: ButtonKind) -> Option<egui::Rect> {
        self.button_rects[kind.index()]
    }

    /// Recomputes enabled flag, style and tooltip of all four buttons.
    pub fn update_buttons_view(&mut self) {
        self.views = [
            self.state_view(
                self.call_state.is_enabled(),
                self.call_state.style(),
                call_tooltip(self.call_state),
            ),
            self.state_view(
                self.video_state.is_enabled(),
                self.video_state.style(),
                video_tooltip(self.video_state),
            ),
            self.state_view(
                self.mic_state.is_enabled(),
                self.mic_state.style(),
                mic_tooltip(self.mic_state),
            ),
            self.state_view(
                self.vol_state.is_enabled(),
                self.vol_state.style(),
                vol_tooltip(self.vol_state),
            ),
        ];
        debug!(
            call = ?self.call_state,
            video = ?self.video_state,
            mic = ?self.mic_state,
            vol = ?self.vol_state,
            "header buttons updated"
        );
    }

    fn state_view(&self, enabled: bool, style: StyleTag, msgid: &str) -> ButtonView {
        ButtonView {
            visible: !self.buttons_hidden,
            enabled,
            style,
            tooltip: self.catalog.tr(msgid).to_string(),
        }
    }

    /// Swaps the translation catalog and refreshes every cached string.
    pub fn retranslate(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        if let Some(confirm) = self.call_confirm.as_mut() {
            confirm.retranslate(&self.catalog);
        }
        self.update_buttons_view();
    }

    // --- Call confirmation ---

    /// Replaces any popup already shown.
    pub fn show_call_confirm(&mut self, video: bool) {
        let anchor = if video { ButtonKind::Video } else { ButtonKind::Call };
        self.call_confirm = Some(CallConfirm::new(anchor, &self.catalog));
        debug!(?anchor, "call confirm shown");
    }

    pub fn remove_call_confirm(&mut self) {
        if self.call_confirm.take().is_some() {
            debug!("call confirm removed");
        }
    }

    pub fn has_call_confirm(&self) -> bool {
        self.call_confirm.is_some()
    }

    pub fn call_confirm(&self) -> Option<&CallConfirm> {
        self.call_confirm.as_ref()
    }

    pub fn call_confirm_anchor(&self) -> Option<ButtonKind> {
        self.call_confirm.as_ref().map(CallConfirm::anchor)
    }

    /// Forwards the popup's answer to the owner.
    pub fn on_call_confirm(&mut self, outcome: ConfirmOutcome) {
        let Some(confirm) = self.call_confirm.as_mut() else {
            return;
        };
        if let Some(outcome) = confirm.resolve(outcome) {
            self.emit_confirm(outcome);
        }
    }

    fn emit_confirm(&self, outcome: ConfirmOutcome) {
        self.emit(match outcome {
            ConfirmOutcome::Accepted => HeaderEvent::CallAccepted,
            ConfirmOutcome::Rejected => HeaderEvent::CallRejected,
        });
    }

    // --- Avatar ---

    pub fn set_avatar(&mut self, image: egui::ColorImage) {
        self.avatar.set_image(image);
    }

    pub fn set_avatar_bytes(&mut self, bytes: &[u8]) -> HeaderResult<()> {
        self.avatar.set_image_bytes(bytes)
    }

    pub fn avatar_size(&self) -> egui::Vec2 {
        self.avatar.size()
    }

    // --- Extra name region content ---

    pub fn add_widget(&mut self, add_contents: impl FnMut(&mut egui::Ui) + 'static) {
        self.name_region
            .push(NameRegionItem::Widget(Box::new(add_contents)));
    }

    pub fn add_layout(
        &mut self,
        layout: egui::Layout,
        add_contents: impl FnMut(&mut egui::Ui) + 'static,
    ) {
        self.name_region
            .push(NameRegionItem::Layout(layout, Box::new(add_contents)));
    }

    pub fn add_stretch(&mut self) {
        self.name_region.push(NameRegionItem::Stretch);
    }

    pub fn name_region(&self) -> &[NameRegionItem] {
        &self.name_region
    }

    /// Clicks on a header button. Disabled or hidden buttons report nothing.
    pub fn on_button_clicked(&mut self, kind: ButtonKind) {
        let view = self.button_view(kind);
        if view.visible && view.enabled {
            self.emit(kind.click_event());
        }
    }

    fn emit(&self, event: HeaderEvent) {
        let _ = self.tx_event.send(event);
    }

    // --- Rendering ---

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut edited = None;
        let mut clicked = Vec::new();

        ui.horizontal(|ui| {
            ui.set_min_height(HEADER_HEIGHT);
            self.avatar.show(ui);
            ui.add_space(HEAD_LAYOUT_SPACING);

            let name_width = (ui.available_width() - self.buttons_width(ui)).max(0.0);
            edited = ui
                .allocate_ui_with_layout(
                    egui::vec2(name_width, HEADER_HEIGHT),
                    egui::Layout::top_down(egui::Align::Min),
                    |ui| self.show_name_region(ui),
                )
                .inner;

            clicked = self.show_buttons(ui);
        });

        if let Some(name) = edited {
            self.on_name_edited(&name);
        }
        for kind in clicked {
            self.on_button_clicked(kind);
        }

        let outcome = self
            .call_confirm
            .as_mut()
            .and_then(|confirm| confirm.show(ui.ctx()));
        if let Some(outcome) = outcome {
            self.emit_confirm(outcome);
        }
    }

    fn buttons_width(&self, ui: &egui::Ui) -> f32 {
        if self.buttons_hidden {
            return 0.0;
        }
        let gap = ui.spacing().item_spacing.x;
        ButtonKind::Mic.size().x
            + BUTTONS_LAYOUT_HOR_SPACING
            + ButtonKind::Call.size().x
            + ButtonKind::Video.size().x
            + 3.0 * gap
    }

    fn show_name_region(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let gap = ui.spacing().item_spacing.y;
        let stretches = self
            .name_region
            .iter()
            .filter(|item| matches!(item, NameRegionItem::Stretch))
            .count();
        let spare = (HEADER_HEIGHT - self.name_region_content).max(0.0);
        let stretch = if stretches == 0 {
            0.0
        } else {
            spare / stretches as f32
        };

        let mut content = 0.0;
        let mut edited = None;
        for item in &mut self.name_region {
            let height = match item {
                NameRegionItem::Stretch => {
                    ui.add_space(stretch);
                    continue;
                }
                NameRegionItem::Name => {
                    let scope = ui.scope(|ui| {
                        self.name_label.show(ui, &self.name, &self.name_tooltip)
                    });
                    edited = scope.inner;
                    scope.response.rect.height()
                }
                NameRegionItem::Widget(add_contents) => {
                    ui.scope(|ui| add_contents(ui)).response.rect.height()
                }
                NameRegionItem::Layout(layout, add_contents) => {
                    ui.with_layout(*layout, |ui| add_contents(ui))
                        .response
                        .rect
                        .height()
                }
            };
            content += height + gap;
        }
        self.name_region_content = content;
        edited
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) -> Vec<ButtonKind> {
        let mut clicked = Vec::new();
        self.button_rects = [None; 4];
        if self.buttons_hidden {
            return clicked;
        }

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = MIC_BUTTONS_LAYOUT_SPACING;
            for kind in [ButtonKind::Mic, ButtonKind::Vol] {
                if let Some(response) = state_button::show(ui, kind, &self.views[kind.index()]) {
                    self.button_rects[kind.index()] = Some(response.rect);
                    if response.clicked() {
                        clicked.push(kind);
                    }
                }
            }
        });
        ui.add_space(BUTTONS_LAYOUT_HOR_SPACING);

        for kind in [ButtonKind::Call, ButtonKind::Video] {
            let Some(response) = state_button::show(ui, kind, &self.views[kind.index()]) else {
                continue;
            };
            self.button_rects[kind.index()] = Some(response.rect);
            if let Some(confirm) = self.call_confirm.as_mut() {
                if confirm.anchor() == kind {
                    confirm.set_anchor_rect(response.rect);
                }
            }
            if response.clicked() {
                clicked.push(kind);
            }
        }
        clicked
    }
}
