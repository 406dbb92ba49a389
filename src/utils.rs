use std::sync::{Arc, LazyLock};

use lettre::Address;
use regex::Regex;

use crate::{
  config::MailSettings,
  email::{EmailService, MailContext},
};

pub mod error;

static EMAIL_SHAPE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` shape check, narrowed to addresses the SMTP transport
/// will accept as a recipient. Deliverability is the relay's problem.
pub fn is_valid_email(email: &str) -> bool {
  EMAIL_SHAPE.is_match(email) && email.parse::<Address>().is_ok()
}

/// Builds the SMTP-backed mail context from the environment.
///
/// Returns `None` when the mail settings are incomplete; the server still
/// starts and the mail endpoints answer with a configuration error.
pub async fn init_mail_context() -> Option<MailContext> {
  let settings = match MailSettings::from_env() {
    Ok(settings) => settings,
    Err(e) => {
      tracing::warn!("Email service disabled: {}", e);
      return None;
    }
  };

  let sender_address = settings.smtp.username.clone();
  let email_service = match EmailService::new(settings.smtp) {
    Ok(service) => service,
    Err(e) => {
      tracing::error!("Failed to build SMTP transport: {:?}", e);
      return None;
    }
  };

  match email_service.test_connection().await {
    Ok(true) => tracing::info!("SMTP relay reachable"),
    Ok(false) => tracing::warn!("SMTP relay did not accept the connection check"),
    Err(e) => tracing::warn!("{:?}", e),
  }

  Some(MailContext::new(
    Arc::new(email_service),
    sender_address,
    settings.contact_email,
  ))
}
