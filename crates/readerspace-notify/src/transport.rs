use crate::{
    Delivery, LogNotifier, NotificationError, Notifier, TwilioConfig,
    TwilioNotifier,
};

/// The transport selected from configuration.
pub enum Transport {
    Twilio(TwilioNotifier),
    Log(LogNotifier),
}

impl Transport {
    /// Twilio when credentials are configured, log only otherwise.
    pub fn from_config(config: Option<TwilioConfig>) -> Self {
        match config {
            Some(config) => Transport::Twilio(TwilioNotifier::new(config)),
            None => Transport::Log(LogNotifier),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transport::Twilio(_) => "twilio",
            Transport::Log(_) => "log",
        }
    }
}

#[async_trait::async_trait]
impl Notifier for Transport {
    async fn send(
        &self,
        contact: &str,
        message: &str,
    ) -> Result<Delivery, NotificationError> {
        match self {
            Transport::Twilio(notifier) => notifier.send(contact, message).await,
            Transport::Log(notifier) => notifier.send(contact, message).await,
        }
    }
}
