use async_trait::async_trait;

use crate::user::errors::MailerError;
use crate::user::ports::ConfirmationMailer;

/// Confirmation-mail adapter that emits the confirmation link to the log
/// stream. Actual delivery belongs to an external mail relay; the auth core
/// only produces recipient, display name, and link.
pub struct TracingMailer {
    base_url: String,
}

impl TracingMailer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ConfirmationMailer for TracingMailer {
    async fn send_confirmation(
        &self,
        recipient: &str,
        username: &str,
        token: &str,
    ) -> Result<(), MailerError> {
        let link = format!("{}/api/auth/confirmed_email/{}", self.base_url, token);

        tracing::info!(
            recipient = %recipient,
            username = %username,
            link = %link,
            "Confirmation email scheduled"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_confirmation_succeeds() {
        let mailer = TracingMailer::new("http://localhost:8080");
        let result = mailer
            .send_confirmation("alice@example.com", "alice", "some-token")
            .await;
        assert!(result.is_ok());
    }
}
