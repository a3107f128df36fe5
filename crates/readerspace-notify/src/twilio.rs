use tracing::debug;

use crate::{Delivery, NotificationError, Notifier};

const TWILIO_API: &str = "https://api.twilio.com/2010-04-01";

/// Credentials of a Twilio account and the sending number.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

impl TwilioConfig {
    /// All three settings must be present and non-empty.
    pub fn from_parts(
        account_sid: Option<String>,
        auth_token: Option<String>,
        from_number: Option<String>,
    ) -> Option<Self> {
        let present = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        Some(Self {
            account_sid: present(account_sid)?,
            auth_token: present(auth_token)?,
            from_number: present(from_number)?,
        })
    }
}

/// Sends text messages through the Twilio messages API.
pub struct TwilioNotifier {
    config: TwilioConfig,
    client: reqwest::Client,
    api_base: String,
}

impl TwilioNotifier {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            api_base: TWILIO_API.to_string(),
        }
    }

    /// Use a different API endpoint
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.api_base, self.config.account_sid
        )
    }
}

#[async_trait::async_trait]
impl Notifier for TwilioNotifier {
    async fn send(
        &self,
        contact: &str,
        message: &str,
    ) -> Result<Delivery, NotificationError> {
        let contact = contact.trim();
        if contact.is_empty() {
            return Err(NotificationError::MissingContact);
        }

        let params = [
            ("To", contact),
            ("From", self.config.from_number.as_str()),
            ("Body", message),
        ];
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(contact, "message accepted by twilio");
        Ok(Delivery::Sent)
    }
}
