/// Errors that can occur while building or delivering an email.
///
/// These never reach the user directly: the submission controller collapses
/// any dispatch failure into a single generic retry notice, and the detail
/// goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// An address could not be parsed into a mailbox.
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The outgoing message could not be assembled.
    #[error("message build error: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP conversation failed (connection, auth, delivery).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
