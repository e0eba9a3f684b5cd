use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw sign-up body as posted by the form. Every field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct SignupPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub date: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Name, email, and date are required")]
pub struct ValidationError;

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl SignupPayload {
    pub fn validate(self) -> Result<SignupRequest, ValidationError> {
        match (present(self.name), present(self.email), present(self.date)) {
            (Some(name), Some(email), Some(date)) => Ok(SignupRequest { name, email, date }),
            _ => Err(ValidationError),
        }
    }
}
