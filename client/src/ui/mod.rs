pub mod i18n;
pub mod model;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use i18n::Catalog;
pub use model::{
    ButtonKind, ButtonView, CallButtonState, HeaderEvent, Mode, StyleTag, ToolButtonState,
};
pub use panels::ChatHeader;
