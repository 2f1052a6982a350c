//! Reusable widgets.

pub mod dialog;
pub mod text_input;

pub use dialog::Dialog;
pub use text_input::TextInputWidget;
