use chrono::{DateTime, Utc};

use super::field::FieldValues;

/// Owned snapshot of the form contents handed to the mail dispatcher.
///
/// Taken at the moment a submit passes validation, so later edits to the
/// form cannot change an in-flight message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub received: DateTime<Utc>,
}

impl ContactMessage {
    /// Snapshots the given field values at `received`.
    pub fn new(values: &FieldValues, received: DateTime<Utc>) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            subject: values.subject.clone(),
            message: values.message.clone(),
            received,
        }
    }

    /// Returns the subject line used for the outgoing email.
    pub fn subject_line(&self) -> String {
        format!("[termfolio] {}", self.subject)
    }

    /// Renders the plain-text email body.
    pub fn body(&self) -> String {
        format!(
            "New contact form submission\n\
             ---------------------------\n\
             \n\
             From:    {} <{}>\n\
             Subject: {}\n\
             Date:    {}\n\
             \n\
             {}\n",
            self.name,
            self.email,
            self.subject,
            self.received.format("%Y-%m-%d %H:%M UTC"),
            self.message,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn make_message() -> ContactMessage {
        let values = FieldValues {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            subject: "Hi".into(),
            message: "Hello there".into(),
        };
        ContactMessage::new(&values, Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn new_snapshots_all_fields() {
        let msg = make_message();
        assert_eq!(msg.name, "Jo");
        assert_eq!(msg.email, "jo@x.com");
        assert_eq!(msg.subject, "Hi");
        assert_eq!(msg.message, "Hello there");
    }

    #[test]
    fn snapshot_is_independent_of_later_edits() {
        let mut values = FieldValues {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        let msg = ContactMessage::new(&values, Utc::now());
        values.name = "Someone else".into();
        assert_eq!(msg.name, "Jo");
    }

    #[test]
    fn subject_line_is_prefixed() {
        assert_eq!(make_message().subject_line(), "[termfolio] Hi");
    }

    #[test]
    fn body_contains_sender_subject_and_text() {
        let body = make_message().body();
        assert!(body.contains("Jo <jo@x.com>"), "should name the sender");
        assert!(body.contains("Subject: Hi"), "should carry the subject");
        assert!(body.contains("Hello there"), "should carry the message");
        assert!(body.contains("2026-03-01 09:30 UTC"), "should carry the date");
    }

    #[test]
    fn body_preserves_multiline_message() {
        let values = FieldValues {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            subject: "Hi".into(),
            message: "line one\nline two".into(),
        };
        let body = ContactMessage::new(&values, Utc::now()).body();
        assert!(body.contains("line one\nline two"));
    }
}
