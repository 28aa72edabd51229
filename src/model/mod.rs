mod field;
mod form;
mod message;
mod profile;
mod validation;

pub use field::{Field, FieldValues};
pub use form::{
    ContactForm, FAILED_NOTICE, SENT_NOTICE, SENT_WINDOW, SubmissionState, SubmitOutcome,
};
pub use message::ContactMessage;
pub use profile::{Profile, Project, ProjectCategory, SkillGroup, SocialLink};
pub use validation::{
    FieldError, FieldErrors, validate, validate_email, validate_message, validate_name,
    validate_subject,
};
