//! Reusable TUI widgets.

pub mod nav_bar;
pub mod text_field;

pub use nav_bar::{draw_footer, draw_nav_bar};
pub use text_field::{FIELD_HEIGHT, TextFieldView, draw_text_field};
