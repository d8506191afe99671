use std::{collections::BTreeMap, fmt, str::FromStr};

use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::nutype_string;

/// Raw values of the contact form, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::Name => &self.name,
            ContactFormField::Email => &self.email,
            ContactFormField::Subject => &self.subject,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, value: String) {
        let slot = match field {
            ContactFormField::Name => &mut self.name,
            ContactFormField::Email => &mut self.email,
            ContactFormField::Subject => &mut self.subject,
            ContactFormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        ContactFormField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Checks every field independently and either returns the trimmed,
    /// validated message or one error per violated field.
    pub fn validate(&self) -> Result<ContactMessage, ContactValidationError> {
        let mut errors = ContactFormErrors::default();

        let name = ContactFormName::try_new(self.name.clone())
            .map_err(|err| errors.insert(ContactFormField::Name, name_error(err)))
            .ok();
        let email = ContactFormEmail::try_new(self.email.clone())
            .map_err(|_| errors.insert(ContactFormField::Email, email_error(&self.email)))
            .ok();
        let subject = ContactFormSubject::try_new(self.subject.clone())
            .map_err(|err| errors.insert(ContactFormField::Subject, subject_error(err)))
            .ok();
        let content = ContactFormMessage::try_new(self.message.clone())
            .map_err(|err| errors.insert(ContactFormField::Message, message_error(err)))
            .ok();

        match (name, email, subject, content) {
            (Some(name), Some(email), Some(subject), Some(content)) => Ok(ContactMessage {
                author: ContactMessageAuthor { name, email },
                subject,
                content,
            }),
            _ => {
                debug_assert!(!errors.is_empty());
                Err(ContactValidationError { errors })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFormField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactFormField {
    /// All fields in the order they appear on the form.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "How can we help?",
            Self::Message => "Tell us what you're thinking...",
        }
    }
}

impl fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field: {0:?}")]
pub struct UnknownContactFormFieldError(pub String);

impl FromStr for ContactFormField {
    type Err = UnknownContactFormFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownContactFormFieldError(s.into()))
    }
}

/// Field error mapping: at most one user facing message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactFormErrors(BTreeMap<ContactFormField, String>);

impl ContactFormErrors {
    pub fn get(&self, field: ContactFormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ContactFormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: ContactFormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: ContactFormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactFormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactFormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(ContactFormField, S)> for ContactFormErrors {
    fn from_iter<T: IntoIterator<Item = (ContactFormField, S)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, message)| (field, message.into()))
                .collect(),
        )
    }
}

impl fmt::Display for ContactFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The contact form is invalid ({errors})")]
pub struct ContactValidationError {
    pub errors: ContactFormErrors,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactFormState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Everything the presentation layer needs to render the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub fields: ContactFormFields,
    pub errors: ContactFormErrors,
    pub state: ContactFormState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactFormSubject,
    pub content: ContactFormMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactFormName,
    pub email: ContactFormEmail,
}

impl From<ContactMessage> for ContactFormFields {
    fn from(value: ContactMessage) -> Self {
        Self {
            name: value.author.name.into_inner(),
            email: value.author.email.into_inner(),
            subject: value.subject.into_inner(),
            message: value.content.into_inner(),
        }
    }
}

nutype_string!(ContactFormName(
    sanitize(trim),
    validate(len_char_min = 1, len_char_max = ContactFormName::MAX_LENGTH)
));
impl ContactFormName {
    pub const MAX_LENGTH: usize = 100;
}

nutype_string!(ContactFormEmail(
    sanitize(trim),
    validate(
        len_char_max = ContactFormEmail::MAX_LENGTH,
        predicate = |email: &str| is_plain_email_address(email)
    )
));
impl ContactFormEmail {
    pub const MAX_LENGTH: usize = 255;
}

/// Accepts a bare `local@domain.tld` address: no display name, no domain
/// literal, no quoted local part.
fn is_plain_email_address(email: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld();
    !email.contains(|c: char| c == '"' || c.is_whitespace())
        && EmailAddress::parse_with_options(email, options).is_ok()
}

nutype_string!(ContactFormSubject(
    sanitize(trim),
    validate(len_char_min = 1, len_char_max = ContactFormSubject::MAX_LENGTH)
));
impl ContactFormSubject {
    pub const MAX_LENGTH: usize = 200;
}

nutype_string!(ContactFormMessage(
    sanitize(trim),
    validate(
        len_char_min = ContactFormMessage::MIN_LENGTH,
        len_char_max = ContactFormMessage::MAX_LENGTH
    )
));
impl ContactFormMessage {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 1000;
}

fn name_error(err: ContactFormNameError) -> String {
    match err {
        ContactFormNameError::LenCharMinViolated => "Name is required".into(),
        ContactFormNameError::LenCharMaxViolated => format!(
            "Name must be less than {} characters",
            ContactFormName::MAX_LENGTH
        ),
    }
}

fn email_error(raw: &str) -> String {
    if raw.trim().chars().count() > ContactFormEmail::MAX_LENGTH {
        format!(
            "Email must be less than {} characters",
            ContactFormEmail::MAX_LENGTH
        )
    } else {
        "Invalid email address".into()
    }
}

fn subject_error(err: ContactFormSubjectError) -> String {
    match err {
        ContactFormSubjectError::LenCharMinViolated => "Subject is required".into(),
        ContactFormSubjectError::LenCharMaxViolated => format!(
            "Subject must be less than {} characters",
            ContactFormSubject::MAX_LENGTH
        ),
    }
}

fn message_error(err: ContactFormMessageError) -> String {
    match err {
        ContactFormMessageError::LenCharMinViolated => format!(
            "Message must be at least {} characters",
            ContactFormMessage::MIN_LENGTH
        ),
        ContactFormMessageError::LenCharMaxViolated => format!(
            "Message must be less than {} characters",
            ContactFormMessage::MAX_LENGTH
        ),
    }
}
