use encoders_core_contact_contracts::{ContactFormService, MockContactSendService};
use encoders_demo::contact::{EMPTY_NAME_SHORT_MESSAGE, EMPTY_NAME_SHORT_MESSAGE_ERRORS, MAX};
use encoders_models::contact::{ContactFormField, ContactFormState};
use encoders_notify_contracts::MockNotificationService;
use pretty_assertions::assert_eq;

use crate::tests::{fill, sut};

#[tokio::test]
async fn clears_error_of_updated_field() {
    // Arrange
    let notify = MockNotificationService::new()
        .with_notify_failure(EMPTY_NAME_SHORT_MESSAGE_ERRORS.clone());

    let sut = sut(MockContactSendService::new(), notify);
    fill(&sut, &EMPTY_NAME_SHORT_MESSAGE);
    sut.submit().await.unwrap_err();

    // Act
    sut.update_field(ContactFormField::Name, "Jo".into());

    // Assert
    let form = sut.form();
    assert_eq!(form.fields.name, "Jo");
    assert_eq!(
        form.errors.fields().collect::<Vec<_>>(),
        [ContactFormField::Message]
    );
}

#[tokio::test]
async fn clears_error_even_if_still_invalid() {
    // Arrange
    let notify = MockNotificationService::new()
        .with_notify_failure(EMPTY_NAME_SHORT_MESSAGE_ERRORS.clone());

    let sut = sut(MockContactSendService::new(), notify);
    fill(&sut, &EMPTY_NAME_SHORT_MESSAGE);
    sut.submit().await.unwrap_err();

    // Act
    sut.update_field(ContactFormField::Message, "still".into());

    // Assert
    let form = sut.form();
    assert_eq!(form.fields.message, "still");
    assert!(!form.errors.contains(ContactFormField::Message));
    assert!(form.errors.contains(ContactFormField::Name));
    assert_eq!(form.state, ContactFormState::Idle);
}

#[tokio::test]
async fn allowed_after_success() {
    // Arrange
    let sender = MockContactSendService::new().with_send(MAX.message.clone(), true);
    let notify = MockNotificationService::new().with_notify_success();

    let sut = sut(sender, notify);
    fill(&sut, &MAX.fields);
    sut.submit().await.unwrap();

    // Act
    sut.update_field(ContactFormField::Subject, "Another one".into());

    // Assert
    let form = sut.form();
    assert_eq!(form.fields.subject, "Another one");
    assert_eq!(form.state, ContactFormState::Succeeded);
}

#[test]
fn notifies_subscribers() {
    // Arrange
    let sut = sut(MockContactSendService::new(), MockNotificationService::new());
    let mut form = sut.subscribe();

    // Act
    sut.update_field(ContactFormField::Email, "jo@example.com".into());

    // Assert
    assert!(form.has_changed().unwrap());
    assert_eq!(form.borrow_and_update().fields.email, "jo@example.com");
    assert!(!form.has_changed().unwrap());
}
