use std::{env, fmt};

use crate::email::SmtpConfig;

pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  Missing(&'static str),
  Invalid { var: &'static str, value: String },
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Missing(var) => write!(f, "{} environment variable must be set", var),
      ConfigError::Invalid { var, value } => write!(f, "{} has an invalid value: {:?}", var, value),
    }
  }
}

/// Outbound mail settings read from `EMAIL_*` and `CONTACT_EMAIL`.
#[derive(Debug, Clone)]
pub struct MailSettings {
  pub smtp: SmtpConfig,
  pub contact_email: Option<String>,
}

impl MailSettings {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let required = |key: &'static str| read(key).ok_or(ConfigError::Missing(key));

    let host = required("EMAIL_HOST")?;
    let username = required("EMAIL_USERNAME")?;
    let password = required("EMAIL_PASSWORD")?;
    let port: u16 = match read("EMAIL_PORT") {
      Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
        var: "EMAIL_PORT",
        value: value.clone(),
      })?,
      None => DEFAULT_SMTP_PORT,
    };

    Ok(MailSettings {
      smtp: SmtpConfig {
        host,
        port,
        username,
        password,
      },
      contact_email: read("CONTACT_EMAIL"),
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
  pub address: String,
  pub cors_allowed_origin: Option<String>,
}

impl ServerSettings {
  pub fn from_env() -> Self {
    let read = |key: &str| env::var(key).ok().filter(|value| !value.trim().is_empty());

    ServerSettings {
      address: read("APP_ADDRESS").unwrap_or_else(|| DEFAULT_APP_ADDRESS.to_string()),
      cors_allowed_origin: read("CORS_ALLOWED_ORIGIN"),
    }
  }
}
