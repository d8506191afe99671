use std::future::Future;

use encoders_models::contact::{
    ContactForm, ContactFormField, ContactMessage, ContactValidationError,
};
use thiserror::Error;
use tokio::sync::watch;

/// Drives the single contact form of a mounted contact page.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Returns a snapshot of the form for rendering.
    fn form(&self) -> ContactForm;

    /// Returns a receiver that is notified after every change of the form.
    fn subscribe(&self) -> watch::Receiver<ContactForm>;

    /// Overwrites a single field and clears its validation error, if any.
    fn update_field(&self, field: ContactFormField, value: String);

    /// Validates the form and, if it is valid, sends the message.
    ///
    /// Only allowed while the form is idle, otherwise
    /// [`ContactSubmitError::NotIdle`] is returned and nothing changes.
    fn submit(&self) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    /// Clears the form after a successful submission. Returns `false` if the
    /// form has not been submitted successfully.
    fn reset(&self) -> bool;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The contact form is not idle.")]
    NotIdle,
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error("Failed to send message.")]
    Send,
}

/// Delivers an accepted contact message.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSendService: Send + Sync + 'static {
    fn send(&self, message: ContactMessage) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactSendService {
    pub fn with_send(mut self, message: ContactMessage, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| {
                Box::pin(std::future::ready(if result {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("Connection refused"))
                }))
            });
        self
    }
}
