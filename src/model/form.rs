use std::time::Duration;

use chrono::Utc;

use super::field::{Field, FieldValues};
use super::message::ContactMessage;
use super::validation::{FieldErrors, validate};

/// Notice shown while the form is in [`SubmissionState::Sent`].
pub const SENT_NOTICE: &str = "Message sent successfully! I'll get back to you soon.";

/// Notice shown while the form is in [`SubmissionState::Failed`].
pub const FAILED_NOTICE: &str = "Failed to send message. Please try again later.";

/// How long the success notice stays up before reverting to [`SubmissionState::Idle`].
pub const SENT_WINDOW: Duration = Duration::from_secs(5);

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Accepting edits; submit allowed.
    #[default]
    Idle,
    /// Dispatch in flight; submit disabled.
    Sending,
    /// Dispatch succeeded; success notice showing, submit disabled.
    Sent,
    /// Dispatch failed; retry notice showing, submit allowed.
    Failed,
}

/// Result of a [`ContactForm::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission is disabled in the current state.
    Ignored,
    /// Validation failed; per-field errors were recorded.
    Invalid,
    /// Validation passed. The caller must dispatch `message` asynchronously
    /// and settle the result back with the matching sequence number.
    Dispatch { seq: u64, message: ContactMessage },
}

/// The contact form submission controller.
///
/// Owns the field values, the per-field error map, and the submission state
/// machine. The controller never performs I/O itself: a successful
/// [`submit`](Self::submit) hands back a [`ContactMessage`] snapshot, and the
/// caller reports the dispatch result through the `dispatch_*` methods.
///
/// Every `Sending` cycle gets a fresh sequence number. Settlement calls
/// carrying a stale sequence (or arriving in the wrong state) are ignored,
/// so a superseded dispatch or timer can never corrupt a newer cycle.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FieldValues,
    errors: FieldErrors,
    state: SubmissionState,
    seq: u64,
}

impl ContactForm {
    /// Creates an empty form in [`SubmissionState::Idle`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current field values.
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Returns the current per-field validation errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the current submission state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Returns the notice to display for the current state, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self.state {
            SubmissionState::Sent => Some(SENT_NOTICE),
            SubmissionState::Failed => Some(FAILED_NOTICE),
            SubmissionState::Idle | SubmissionState::Sending => None,
        }
    }

    /// Replaces the value of `field` and optimistically clears its error.
    ///
    /// Only that field's error is touched; no revalidation happens until the
    /// next submit. Allowed in every state.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.remove(&field);
    }

    /// Appends a character to `field`, clearing its error.
    pub fn push_char(&mut self, field: Field, ch: char) {
        let mut value = self.values.get(field).to_string();
        value.push(ch);
        self.set_field(field, value);
    }

    /// Removes the last character of `field`, clearing its error.
    ///
    /// A backspace on an already-empty field is not an edit: the value stays
    /// as it is and any existing error is kept.
    pub fn pop_char(&mut self, field: Field) {
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.set_field(field, value);
        }
    }

    /// Attempts to submit the form.
    ///
    /// Ignored while `Sending` or `Sent`. Otherwise validates every field:
    /// on any error the error map is replaced wholesale and the state
    /// returns to `Idle`; on success the state moves to `Sending` and the
    /// returned [`SubmitOutcome::Dispatch`] carries the payload snapshot
    /// plus the sequence number the settlement must quote.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.state {
            SubmissionState::Sending | SubmissionState::Sent => SubmitOutcome::Ignored,
            SubmissionState::Idle | SubmissionState::Failed => {
                let errors = validate(&self.values);
                if !errors.is_empty() {
                    self.errors = errors;
                    self.state = SubmissionState::Idle;
                    return SubmitOutcome::Invalid;
                }
                self.errors.clear();
                self.state = SubmissionState::Sending;
                self.seq += 1;
                SubmitOutcome::Dispatch {
                    seq: self.seq,
                    message: ContactMessage::new(&self.values, Utc::now()),
                }
            }
        }
    }

    /// Settles a successful dispatch for the given sequence.
    ///
    /// Honored only while `Sending` with a matching sequence: moves to
    /// `Sent` and clears values and errors. Returns `true` if honored, so
    /// the caller knows to arm the [`SENT_WINDOW`] revert timer.
    pub fn dispatch_succeeded(&mut self, seq: u64) -> bool {
        if self.state != SubmissionState::Sending || seq != self.seq {
            return false;
        }
        self.state = SubmissionState::Sent;
        self.values.clear();
        self.errors.clear();
        true
    }

    /// Settles a failed dispatch for the given sequence.
    ///
    /// Honored only while `Sending` with a matching sequence: moves to
    /// `Failed`, keeping the field values so the user can retry without
    /// retyping. Returns `true` if honored.
    pub fn dispatch_failed(&mut self, seq: u64) -> bool {
        if self.state != SubmissionState::Sending || seq != self.seq {
            return false;
        }
        self.state = SubmissionState::Failed;
        true
    }

    /// Reverts `Sent → Idle` when the success notice window for `seq` ends.
    ///
    /// Ignored in any other state or for a stale sequence. Returns `true`
    /// if honored.
    pub fn sent_window_elapsed(&mut self, seq: u64) -> bool {
        if self.state != SubmissionState::Sent || seq != self.seq {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}
