//! Events posted back to the UI loop by background tasks.

use crate::mail::MailError;

/// A completion notice from a spawned task.
///
/// Every variant carries the submission sequence it belongs to; the
/// controller ignores sequences that no longer match, so a settled dispatch
/// or an expired timer from a superseded cycle cannot corrupt current state.
#[derive(Debug)]
pub enum AppEvent {
    /// The mail dispatch for submission `seq` finished.
    MailSettled {
        seq: u64,
        outcome: Result<(), MailError>,
    },
    /// The post-send display window for submission `seq` ran out.
    SentWindowElapsed { seq: u64 },
}
