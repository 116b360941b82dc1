//! Reusable GUI widgets composed by the chat header.

pub mod avatar;
pub mod call_confirm;
pub mod cropping_label;
pub mod state_button;

pub use avatar::{Avatar, AVATAR_SIZE};
pub use call_confirm::{CallConfirm, ConfirmOutcome};
pub use cropping_label::{CroppingLabel, EditOutcome};
