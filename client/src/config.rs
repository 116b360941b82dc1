use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::ui::Mode;

#[derive(Parser, Debug, Clone)]
#[command(name = "chat-header-demo", about = "Chat header widget demo")]
pub struct Config {
    /// Peer display name shown in the header
    #[arg(long, env = "VP_PEER_NAME", default_value = "Peer")]
    pub name: String,

    /// Call capabilities of the conversation
    #[arg(long, value_enum, default_value_t = ModeArg::Av)]
    pub mode: ModeArg,

    /// Avatar image (png, jpeg, gif, webp)
    #[arg(long)]
    pub avatar: Option<PathBuf>,

    /// JSON translation catalog for the header strings
    #[arg(long, env = "VP_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    None,
    Audio,
    Video,
    Av,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::None => Mode::NONE,
            ModeArg::Audio => Mode::AUDIO,
            ModeArg::Video => Mode::VIDEO,
            ModeArg::Av => Mode::AV,
        }
    }
}
