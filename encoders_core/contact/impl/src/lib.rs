use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use encoders_core_contact_contracts::{ContactFormService, ContactSendService, ContactSubmitError};
use encoders_models::contact::{
    ContactForm, ContactFormField, ContactFormState, ContactMessage, ContactValidationError,
};
use encoders_notify_contracts::NotificationService;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn, Instrument};

pub mod send;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct ContactFormServiceImpl<Sender, Notify> {
    inner: Arc<Inner<Sender, Notify>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormServiceConfig {
    /// Time between a successful submission and the automatic reset.
    pub reset_delay: Duration,
}

#[derive(Debug)]
struct Inner<Sender, Notify> {
    sender: Sender,
    notify: Notify,
    config: ContactFormServiceConfig,
    form: watch::Sender<ContactForm>,
    /// Number of successful submissions so far. Identifies the submission an
    /// auto-reset timer belongs to.
    successes: AtomicU64,
}

impl<Sender, Notify> Clone for ContactFormServiceImpl<Sender, Notify> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Sender, Notify> ContactFormServiceImpl<Sender, Notify> {
    pub fn new(sender: Sender, notify: Notify, config: ContactFormServiceConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                sender,
                notify,
                config,
                form: watch::Sender::new(ContactForm::default()),
                successes: AtomicU64::new(0),
            }),
        }
    }
}

impl<Sender, Notify> ContactFormService for ContactFormServiceImpl<Sender, Notify>
where
    Sender: ContactSendService,
    Notify: NotificationService,
{
    fn form(&self) -> ContactForm {
        self.inner.form.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<ContactForm> {
        self.inner.form.subscribe()
    }

    #[instrument(skip(self, value))]
    fn update_field(&self, field: ContactFormField, value: String) {
        self.inner.form.send_modify(|form| {
            form.fields.set(field, value);
            if form.errors.remove(field).is_some() {
                debug!("Cleared validation error");
            }
        });
    }

    #[instrument(skip(self))]
    async fn submit(&self) -> Result<(), ContactSubmitError> {
        let mut validation = None;
        self.inner.form.send_if_modified(|form| {
            if form.state != ContactFormState::Idle {
                return false;
            }
            let result = form.fields.validate();
            match &result {
                Ok(_) => form.state = ContactFormState::Submitting,
                Err(err) => form.errors = err.errors.clone(),
            }
            validation = Some(result);
            true
        });

        let message = match validation {
            Some(Ok(message)) => message,
            Some(Err(err)) => return Err(self.reject(err)),
            None => {
                debug!("Ignoring submit, the form is not idle");
                return Err(ContactSubmitError::NotIdle);
            }
        };

        // Runs to completion even if the caller drops this future.
        let send = Inner::send(Arc::clone(&self.inner), message).in_current_span();
        match tokio::spawn(send).await {
            Ok(result) => result,
            Err(err) => {
                warn!("Contact message task failed: {err}");
                self.inner
                    .form
                    .send_modify(|form| form.state = ContactFormState::Idle);
                Err(ContactSubmitError::Send)
            }
        }
    }

    #[instrument(skip(self))]
    fn reset(&self) -> bool {
        self.inner.reset(None)
    }
}

impl<Sender, Notify> ContactFormServiceImpl<Sender, Notify>
where
    Sender: ContactSendService,
    Notify: NotificationService,
{
    fn reject(&self, err: ContactValidationError) -> ContactSubmitError {
        debug!(errors = %err.errors, "Contact form rejected");
        self.inner.notify.notify_failure(&err.errors);
        err.into()
    }
}

impl<Sender, Notify> Inner<Sender, Notify>
where
    Sender: ContactSendService,
    Notify: NotificationService,
{
    async fn send(self: Arc<Self>, message: ContactMessage) -> Result<(), ContactSubmitError> {
        info!("Sending contact message");

        if let Err(err) = self.sender.send(message).await {
            warn!("Failed to send contact message: {err:#}");
            self.form.send_modify(|form| form.state = ContactFormState::Idle);
            self.notify.notify_send_failure();
            return Err(ContactSubmitError::Send);
        }

        let success = self.successes.fetch_add(1, Ordering::SeqCst) + 1;
        self.form.send_modify(|form| {
            form.state = ContactFormState::Succeeded;
            form.errors.clear();
        });
        self.notify.notify_success();
        self.schedule_reset(success);

        Ok(())
    }

    fn schedule_reset(self: &Arc<Self>, success: u64) {
        let inner = Arc::downgrade(self);
        let delay = self.config.reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = Weak::upgrade(&inner) {
                inner.reset(Some(success));
            }
        });
    }
}

impl<Sender, Notify> Inner<Sender, Notify> {
    /// Resets the form if it is in the succeeded state and, if `success` is
    /// given, the current success is still that one.
    fn reset(&self, success: Option<u64>) -> bool {
        let reset = self.form.send_if_modified(|form| {
            if form.state != ContactFormState::Succeeded
                || success.is_some_and(|s| s != self.successes.load(Ordering::SeqCst))
            {
                return false;
            }
            *form = ContactForm::default();
            true
        });

        if reset {
            debug!(automatic = success.is_some(), "Contact form reset");
        }
        reset
    }
}
