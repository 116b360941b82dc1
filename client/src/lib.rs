//! Chat conversation header for the voice platform client.

pub mod config;
pub mod errors;
pub mod ui;

pub use errors::{HeaderError, HeaderResult};
pub use ui::{ChatHeader, HeaderEvent, Mode};
