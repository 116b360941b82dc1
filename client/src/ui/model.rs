//! Header state model: button states, capability mode, rendered views and
//! the events sent back to the owning conversation view.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use eframe::egui;

/// State of the audio or video call button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CallButtonState {
    #[default]
    Disabled,
    Available,
    InCall,
    Outgoing,
    Incoming,
}

impl CallButtonState {
    pub const ALL: [CallButtonState; 5] = [
        CallButtonState::Disabled,
        CallButtonState::Available,
        CallButtonState::InCall,
        CallButtonState::Outgoing,
        CallButtonState::Incoming,
    ];

    pub fn style(self) -> StyleTag {
        match self {
            CallButtonState::Disabled => StyleTag::None,
            CallButtonState::Available => StyleTag::Green,
            CallButtonState::InCall => StyleTag::Red,
            CallButtonState::Outgoing | CallButtonState::Incoming => StyleTag::Yellow,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != CallButtonState::Disabled
    }
}

/// State of the mic or volume mute button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolButtonState {
    #[default]
    Disabled,
    Off,
    On,
}

impl ToolButtonState {
    pub const ALL: [ToolButtonState; 3] = [
        ToolButtonState::Disabled,
        ToolButtonState::Off,
        ToolButtonState::On,
    ];

    /// Disabled when there is no call, otherwise On for muted.
    pub fn from_mute(active: bool, muted: bool) -> Self {
        match (active, muted) {
            (false, _) => ToolButtonState::Disabled,
            (true, false) => ToolButtonState::Off,
            (true, true) => ToolButtonState::On,
        }
    }

    pub fn style(self) -> StyleTag {
        match self {
            ToolButtonState::Disabled => StyleTag::None,
            ToolButtonState::Off => StyleTag::Green,
            ToolButtonState::On => StyleTag::Red,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != ToolButtonState::Disabled
    }
}

/// Call capabilities of a conversation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u8);

impl Mode {
    pub const NONE: Mode = Mode(0);
    pub const AUDIO: Mode = Mode(1);
    pub const VIDEO: Mode = Mode(1 << 1);
    pub const AV: Mode = Mode(Self::AUDIO.0 | Self::VIDEO.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Mode(bits & Self::AV.0)
    }

    pub const fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::AV
    }
}

impl std::fmt::Debug for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match *self {
            Mode::NONE => "NONE",
            Mode::AUDIO => "AUDIO",
            Mode::VIDEO => "VIDEO",
            _ => "AV",
        };
        write!(f, "Mode({name})")
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mode {
    fn bitor_assign(&mut self, rhs: Mode) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Mode {
    type Output = Mode;

    fn bitand(self, rhs: Mode) -> Mode {
        Mode(self.0 & rhs.0)
    }
}

/// The four buttons of the header, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Call,
    Video,
    Mic,
    Vol,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 4] = [
        ButtonKind::Call,
        ButtonKind::Video,
        ButtonKind::Mic,
        ButtonKind::Vol,
    ];

    pub fn index(self) -> usize {
        match self {
            ButtonKind::Call => 0,
            ButtonKind::Video => 1,
            ButtonKind::Mic => 2,
            ButtonKind::Vol => 3,
        }
    }

    pub fn size(self) -> egui::Vec2 {
        match self {
            ButtonKind::Call | ButtonKind::Video => egui::vec2(50.0, 40.0),
            ButtonKind::Mic | ButtonKind::Vol => egui::vec2(22.0, 18.0),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ButtonKind::Call => "📞",
            ButtonKind::Video => "📹",
            ButtonKind::Mic => "🎤",
            ButtonKind::Vol => "🔊",
        }
    }

    /// Event sent to the owner when the button is clicked.
    pub fn click_event(self) -> HeaderEvent {
        match self {
            ButtonKind::Call => HeaderEvent::CallTriggered,
            ButtonKind::Video => HeaderEvent::VideoCallTriggered,
            ButtonKind::Mic => HeaderEvent::MicMuteToggle,
            ButtonKind::Vol => HeaderEvent::VolMuteToggle,
        }
    }
}

/// Visual class of a button. Shared by call and tool buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleTag {
    #[default]
    None,
    Green,
    Red,
    Yellow,
}

impl StyleTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTag::None => "",
            StyleTag::Green => "green",
            StyleTag::Red => "red",
            StyleTag::Yellow => "yellow",
        }
    }
}

/// Untranslated tooltip for a call button.
pub fn call_tooltip(state: CallButtonState) -> &'static str {
    match state {
        CallButtonState::Disabled => "Can't start audio call",
        CallButtonState::Available => "Start audio call",
        CallButtonState::InCall => "End audio call",
        CallButtonState::Outgoing => "Cancel audio call",
        CallButtonState::Incoming => "Accept audio call",
    }
}

pub fn video_tooltip(state: CallButtonState) -> &'static str {
    match state {
        CallButtonState::Disabled => "Can't start video call",
        CallButtonState::Available => "Start video call",
        CallButtonState::InCall => "End video call",
        CallButtonState::Outgoing => "Cancel video call",
        CallButtonState::Incoming => "Accept video call",
    }
}

pub fn mic_tooltip(state: ToolButtonState) -> &'static str {
    match state {
        ToolButtonState::Disabled => "Microphone can be muted only during a call",
        ToolButtonState::Off => "Unmute microphone",
        ToolButtonState::On => "Mute microphone",
    }
}

pub fn vol_tooltip(state: ToolButtonState) -> &'static str {
    match state {
        ToolButtonState::Disabled => "Sound can be disabled only during a call",
        ToolButtonState::Off => "Unmute call",
        ToolButtonState::On => "Mute call",
    }
}

/// Everything a frame needs to draw one button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonView {
    pub visible: bool,
    pub enabled: bool,
    pub style: StyleTag,
    pub tooltip: String,
}

/// Notifications from the header to the owning conversation view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderEvent {
    NameChanged(String),
    CallTriggered,
    VideoCallTriggered,
    MicMuteToggle,
    VolMuteToggle,
    CallAccepted,
    CallRejected,
}
