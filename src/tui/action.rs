//! Actions returned by screen event handlers.

use crate::model::ContactMessage;

use super::app::Section;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state, switch sections, and
/// spawn background work.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Switch to the given section.
    Navigate(Section),
    /// Start the asynchronous mail dispatch for an accepted submission.
    Dispatch { seq: u64, message: ContactMessage },
    /// Quit the application.
    Quit,
}
