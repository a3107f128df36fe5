use std::fmt;

use thiserror::Error as ThisError;
use tracing::{info, warn};

/// Outcome of handing a message to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The transport accepted the message.
    Sent,
    /// No transport is configured, the message was only logged.
    Skipped,
    /// The transport failed. The reason is kept for display.
    Failed(String),
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent)
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivery::Sent => write!(f, "message sent"),
            Delivery::Skipped => write!(f, "message not sent (no SMS transport configured)"),
            Delivery::Failed(reason) => write!(f, "message sending failed: {}", reason),
        }
    }
}

#[derive(ThisError, Debug)]
pub enum NotificationError {
    #[error("no contact number")]
    MissingContact,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rejected by provider with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a text message to a phone number.
#[mockall::automock]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        contact: &str,
        message: &str,
    ) -> Result<Delivery, NotificationError>;
}

/// Send a message and turn any failure into a `Delivery::Failed`.
/// Notification errors never travel further than this.
pub async fn deliver<N>(notifier: &N, contact: &str, message: &str) -> Delivery
where
    N: Notifier + ?Sized,
{
    match notifier.send(contact, message).await {
        Ok(delivery) => delivery,
        Err(err) => {
            warn!(contact, error = %err, "notification failed");
            Delivery::Failed(err.to_string())
        }
    }
}

/// Writes messages to the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn send(
        &self,
        contact: &str,
        message: &str,
    ) -> Result<Delivery, NotificationError> {
        info!(contact, message, "no SMS transport configured, message not sent");
        Ok(Delivery::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[tokio::test]
    async fn test_deliver_sent() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .times(1)
            .withf(|contact, message| {
                contact.trim() == "+919800000001" && message.starts_with("Hello")
            })
            .returning(|_, _| Ok(Delivery::Sent));

        let delivery = deliver(&notifier, "+919800000001", "Hello Asha").await;
        assert_that!(delivery).is_equal_to(Delivery::Sent);
    }

    #[tokio::test]
    async fn test_deliver_failure_is_swallowed() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().times(1).returning(|_, _| {
            Err(NotificationError::Rejected {
                status: 400,
                body: "invalid number".to_string(),
            })
        });

        let delivery = deliver(&notifier, "12", "Hello").await;
        assert_that!(delivery).matches(|d| {
            matches!(d, Delivery::Failed(reason) if reason.contains("400"))
        });
    }

    #[tokio::test]
    async fn test_log_notifier_skips() {
        let delivery = deliver(&LogNotifier, "+919800000001", "Hello").await;
        assert_that!(delivery).is_equal_to(Delivery::Skipped);
        assert!(!delivery.is_sent());
    }
}
