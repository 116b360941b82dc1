//! Top-level panels composed from the widgets.

pub mod chat_header;

pub use chat_header::{ChatHeader, NameRegionItem};
