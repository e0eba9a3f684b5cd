use std::sync::Arc;

use crate::models::webinar::SignupRequest;
use crate::services::confirmation::{self, SUBJECT};
use crate::services::email::{DeliveryError, MailSender, OutgoingMail};

/// Turns a validated sign-up into one confirmation email.
#[derive(Clone)]
pub struct SignupService {
    mailer: Arc<dyn MailSender>,
    from: String,
}

impl SignupService {
    pub fn new(mailer: Arc<dyn MailSender>, from: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
        }
    }

    pub fn confirmation_for(&self, request: &SignupRequest) -> OutgoingMail {
        let body = confirmation::render(&request.name, &request.date);
        OutgoingMail {
            from: self.from.clone(),
            to: request.email.clone(),
            subject: SUBJECT.to_string(),
            text: body.text,
            html: body.html,
        }
    }

    pub async fn register(&self, request: &SignupRequest) -> Result<(), DeliveryError> {
        self.mailer.send(self.confirmation_for(request)).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::services::email::{DeliveryError, MailSender, OutgoingMail};

    /// Records every message and optionally fails with a fixed description.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<OutgoingMail>>,
        pub failure: Option<String>,
    }

    impl RecordingMailer {
        pub fn failing(description: &str) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                failure: Some(description.to_string()),
            })
        }

        pub fn attempts(&self) -> Vec<OutgoingMail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MailSender for RecordingMailer {
        async fn send(&self, mail: OutgoingMail) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(mail);
            match &self.failure {
                Some(description) => Err(DeliveryError::Other(description.clone())),
                None => Ok(()),
            }
        }
    }
}
