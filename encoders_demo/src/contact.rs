use std::sync::LazyLock;

use encoders_models::contact::{
    ContactFormErrors, ContactFormField, ContactFormFields, ContactMessage, ContactMessageAuthor,
};

pub struct ContactFixture {
    pub fields: ContactFormFields,
    pub message: ContactMessage,
}

pub static MAX: LazyLock<ContactFixture> = LazyLock::new(|| ContactFixture {
    fields: ContactFormFields {
        name: " Max Mustermann ".into(),
        email: "max.mustermann@example.de".into(),
        subject: "Joining the club".into(),
        message: "Hello! I would like to join the next hackathon.".into(),
    },
    message: ContactMessage {
        author: ContactMessageAuthor {
            name: "Max Mustermann".try_into().unwrap(),
            email: "max.mustermann@example.de".try_into().unwrap(),
        },
        subject: "Joining the club".try_into().unwrap(),
        content: "Hello! I would like to join the next hackathon."
            .try_into()
            .unwrap(),
    },
});

pub static EMPTY_NAME_SHORT_MESSAGE: LazyLock<ContactFormFields> =
    LazyLock::new(|| ContactFormFields {
        name: "".into(),
        email: "a@b.com".into(),
        subject: "Hi".into(),
        message: "short".into(),
    });

pub static EMPTY_NAME_SHORT_MESSAGE_ERRORS: LazyLock<ContactFormErrors> = LazyLock::new(|| {
    [
        (ContactFormField::Name, "Name is required"),
        (
            ContactFormField::Message,
            "Message must be at least 10 characters",
        ),
    ]
    .into_iter()
    .collect()
});
