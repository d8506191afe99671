use encoders_models::contact::ContactFormErrors;

/// Toast surface of the presentation layer. All methods are fire and forget.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Signals that a contact message has been sent.
    fn notify_success(&self);

    /// Signals that a submission was rejected by validation.
    fn notify_failure(&self, errors: &ContactFormErrors);

    /// Signals that an accepted message could not be delivered.
    fn notify_send_failure(&self);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_notify_success(mut self) -> Self {
        self.expect_notify_success().once().return_const(());
        self
    }

    pub fn with_notify_failure(mut self, errors: ContactFormErrors) -> Self {
        self.expect_notify_failure()
            .once()
            .with(mockall::predicate::eq(errors))
            .return_const(());
        self
    }

    pub fn with_notify_send_failure(mut self) -> Self {
        self.expect_notify_send_failure().once().return_const(());
        self
    }
}
