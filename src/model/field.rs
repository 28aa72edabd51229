use std::fmt;

/// One of the four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

static ALL_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Subject, Field::Message];

impl Field {
    /// Returns the lowercase wire/key name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Returns the display label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Returns all fields in form order (top to bottom).
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the four contact form fields.
///
/// All fields default to empty. Values are mutated field-by-field as the
/// user types and reset to empty only on successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FieldValues {
    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if every field is the empty string.
    pub fn is_empty(&self) -> bool {
        Field::all().iter().all(|f| self.get(*f).is_empty())
    }
}
