use std::time::Duration;

use thiserror::Error;

use crate::client::api::SubmitError;
use crate::models::webinar::SignupRequest;

/// How long the success notice stays up before the user is sent home.
pub const SUCCESS_NOTICE_DELAY: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        notice: String,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("A sign-up is already being submitted")]
    InFlight,
    #[error("{0} is required")]
    MissingField(&'static str),
}

#[derive(Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub date: String,
    state: FormState,
}

impl SignupForm {
    pub fn new(name: &str, email: &str, date: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            date: date.to_string(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Moves the form into `Submitting` and hands back the request to send.
    /// Any previous error is cleared.
    pub fn begin_submit(&mut self) -> Result<SignupRequest, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }

        for (label, value) in [("Name", &self.name), ("Email", &self.email), ("Date", &self.date)] {
            if value.is_empty() {
                return Err(SubmitBlocked::MissingField(label));
            }
        }

        self.state = FormState::Submitting;
        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            date: self.date.clone(),
        })
    }

    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        self.state = match outcome {
            Ok(()) => {
                let notice = format!(
                    "You have successfully signed up the Polaris Information Session on {}! \
                     We will send you an email shortly with more information.",
                    self.date
                );
                self.name.clear();
                self.email.clear();
                self.date.clear();
                FormState::Succeeded { notice }
            }
            Err(e) => FormState::Failed {
                message: e.message().to_string(),
            },
        };
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.state {
            FormState::Succeeded { notice } => Some(notice),
            _ => None,
        }
    }

    /// The line shown under the form, e.g. `Error: SMTP timeout`.
    pub fn error_text(&self) -> Option<String> {
        match &self.state {
            FormState::Failed { message } => Some(format!("Error: {}", message)),
            _ => None,
        }
    }

    pub fn dismiss_notice(&mut self) {
        if matches!(self.state, FormState::Succeeded { .. }) {
            self.state = FormState::Idle;
        }
    }
}
