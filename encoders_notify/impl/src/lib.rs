use std::{
    fmt,
    io::Write,
    sync::{Arc, Mutex},
};

use encoders_models::contact::ContactFormErrors;
use encoders_notify_contracts::NotificationService;
use tracing::{info, warn};

/// Renders toasts as single lines on a terminal (or any other writer).
#[derive(Clone)]
pub struct ToastNotificationServiceImpl {
    sink: Arc<Mutex<dyn Write + Send>>,
    config: ToastNotificationServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ToastNotificationServiceConfig {
    pub success: String,
    pub failure: String,
    pub send_failure: String,
}

impl ToastNotificationServiceImpl {
    pub fn new(config: ToastNotificationServiceConfig, sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
            config,
        }
    }

    pub fn stdout(config: ToastNotificationServiceConfig) -> Self {
        Self::new(config, std::io::stdout())
    }

    fn show(&self, toast: Toast<'_>) {
        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(sink, "{toast}").and_then(|()| sink.flush()) {
            warn!("Failed to show toast: {err}");
        }
    }
}

impl fmt::Debug for ToastNotificationServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastNotificationServiceImpl")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NotificationService for ToastNotificationServiceImpl {
    fn notify_success(&self) {
        info!("Contact message sent");
        self.show(Toast {
            kind: ToastKind::Success,
            title: &self.config.success,
            detail: None,
        });
    }

    fn notify_failure(&self, errors: &ContactFormErrors) {
        let fields = errors
            .fields()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        self.show(Toast {
            kind: ToastKind::Error,
            title: &self.config.failure,
            detail: Some(fields),
        });
    }

    fn notify_send_failure(&self) {
        warn!("Contact message could not be sent");
        self.show(Toast {
            kind: ToastKind::Error,
            title: &self.config.send_failure,
            detail: None,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

struct Toast<'a> {
    kind: ToastKind,
    title: &'a str,
    detail: Option<String>,
}

impl fmt::Display for Toast<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.kind {
            ToastKind::Success => '✔',
            ToastKind::Error => '✖',
        };
        write!(f, "{icon} {}", self.title)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
