use std::time::Duration;

use encoders_core_contact_contracts::ContactSendService;
use encoders_models::contact::ContactMessage;
use tracing::{info, instrument};

/// Stands in for the network call of the contact form: waits for a fixed
/// delay and always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedContactSendServiceImpl {
    pub config: SimulatedContactSendServiceConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedContactSendServiceConfig {
    pub delay: Duration,
}

impl ContactSendService for SimulatedContactSendServiceImpl {
    #[instrument(skip_all, fields(subject = message.subject.as_str()))]
    async fn send(&self, message: ContactMessage) -> anyhow::Result<()> {
        tokio::time::sleep(self.config.delay).await;
        info!(
            content_length = message.content.chars().count(),
            "Delivered contact message"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use encoders_demo::contact::MAX;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_for_delay() {
        // Arrange
        let sut = SimulatedContactSendServiceImpl {
            config: SimulatedContactSendServiceConfig {
                delay: Duration::from_secs(1),
            },
        };
        let start = Instant::now();

        // Act
        let result = sut.send(MAX.message.clone()).await;

        // Assert
        result.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }
}
