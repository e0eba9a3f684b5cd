use anyhow::{Context, Result};
use log::warn;
use std::env;

pub const DEFAULT_EMAIL_HOST: &str = "localhost";
pub const DEFAULT_EMAIL_PORT: u16 = 587;
pub const DEFAULT_EMAIL_FROM: &str = "no-reply@example.com";
pub const DEFAULT_SESSION_DATES: [&str; 2] = ["June 25, 2025", "June 29, 2025"];

fn from_process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// SMTP transport settings plus the sender identity used on every confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    /// `true` means implicit TLS from the first byte (port 465 style).
    pub secure: bool,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub from: String,
}

impl EmailSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(from_process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Pages still come up without a relay; sign-ups then fail per request.
        let host = match lookup("EMAIL_HOST").filter(|h| !h.is_empty()) {
            Some(host) => host,
            None => {
                warn!("EMAIL_HOST not set, falling back to {}", DEFAULT_EMAIL_HOST);
                DEFAULT_EMAIL_HOST.to_string()
            }
        };

        let port = match lookup("EMAIL_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid EMAIL_PORT: {:?}", raw))?,
            None => DEFAULT_EMAIL_PORT,
        };

        Ok(Self {
            host,
            port,
            secure: lookup("EMAIL_SECURE").as_deref() == Some("true"),
            user: lookup("EMAIL_USER").filter(|u| !u.is_empty()),
            pass: lookup("EMAIL_PASS"),
            from: lookup("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(from_process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {:?}", raw))?,
            None => 8080,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
        })
    }

    pub fn is_wildcard(&self) -> bool {
        self.host == "0.0.0.0"
    }
}

/// Session dates offered on the sign-up page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCatalog {
    dates: Vec<String>,
}

impl Default for SessionCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_DATES.iter().map(|d| d.to_string()).collect())
    }
}

impl SessionCatalog {
    pub fn new(dates: Vec<String>) -> Self {
        Self { dates }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(from_process_env)
    }

    /// `WEBINAR_DATES` is a `;`-separated list, e.g. `July 2, 2025;July 9, 2025`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dates: Vec<String> = lookup("WEBINAR_DATES")
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if dates.is_empty() {
            Self::default()
        } else {
            Self::new(dates)
        }
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn email_settings_fall_back_to_defaults() {
        let settings =
            EmailSettings::from_lookup(lookup_in(&[("EMAIL_HOST", "smtp.example.com")])).unwrap();

        assert_eq!(settings.host, "smtp.example.com");
        assert_eq!(settings.port, 587);
        assert!(!settings.secure);
        assert_eq!(settings.user, None);
        assert_eq!(settings.from, "no-reply@example.com");
    }

    #[test]
    fn email_secure_only_for_literal_true() {
        let secure = EmailSettings::from_lookup(lookup_in(&[
            ("EMAIL_HOST", "smtp.example.com"),
            ("EMAIL_SECURE", "true"),
            ("EMAIL_PORT", "465"),
        ]))
        .unwrap();
        assert!(secure.secure);
        assert_eq!(secure.port, 465);

        let not_secure = EmailSettings::from_lookup(lookup_in(&[
            ("EMAIL_HOST", "smtp.example.com"),
            ("EMAIL_SECURE", "TRUE"),
        ]))
        .unwrap();
        assert!(!not_secure.secure);
    }

    #[test]
    fn missing_email_host_falls_back_to_localhost() {
        let settings = EmailSettings::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 587);

        let blank = EmailSettings::from_lookup(lookup_in(&[("EMAIL_HOST", "")])).unwrap();
        assert_eq!(blank.host, "localhost");
    }

    #[test]
    fn email_settings_reject_bad_port() {
        let err = EmailSettings::from_lookup(lookup_in(&[
            ("EMAIL_HOST", "smtp.example.com"),
            ("EMAIL_PORT", "smtp"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("EMAIL_PORT"));
    }

    #[test]
    fn email_credentials_and_sender_are_read() {
        let settings = EmailSettings::from_lookup(lookup_in(&[
            ("EMAIL_HOST", "smtp.example.com"),
            ("EMAIL_USER", "mailer@polarisconsult.org"),
            ("EMAIL_PASS", "hunter2"),
            ("EMAIL_FROM", "Polaris <consultants.polaris@gmail.com>"),
        ]))
        .unwrap();

        assert_eq!(settings.user.as_deref(), Some("mailer@polarisconsult.org"));
        assert_eq!(settings.pass.as_deref(), Some("hunter2"));
        assert_eq!(settings.from, "Polaris <consultants.polaris@gmail.com>");
    }

    #[test]
    fn server_settings_default_to_loopback_8080() {
        let settings = ServerSettings::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert!(!settings.is_wildcard());
    }

    #[test]
    fn catalog_uses_override_when_present() {
        let catalog = SessionCatalog::from_lookup(lookup_in(&[(
            "WEBINAR_DATES",
            "July 2, 2025; July 9, 2025;",
        )]));
        assert_eq!(catalog.dates(), ["July 2, 2025", "July 9, 2025"]);

        let fallback = SessionCatalog::from_lookup(lookup_in(&[("WEBINAR_DATES", " ; ")]));
        assert_eq!(fallback.dates(), ["June 25, 2025", "June 29, 2025"]);
    }
}
