use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl fmt::Debug for SmtpConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SmtpConfig")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"[REDACTED]")
      .finish()
  }
}

/// A single transactional message with both an HTML and a plain-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub from_name: String,
  pub from_address: String,
  pub to: String,
  pub reply_to: Option<String>,
  pub subject: String,
  pub html_body: String,
  pub text_body: String,
}

impl EmailMessage {
  pub fn new(
    from_name: impl Into<String>,
    from_address: impl Into<String>,
    to: impl Into<String>,
    subject: impl Into<String>,
    html_body: String,
    text_body: String,
  ) -> Self {
    EmailMessage {
      from_name: from_name.into(),
      from_address: from_address.into(),
      to: to.into(),
      reply_to: None,
      subject: subject.into(),
      html_body,
      text_body,
    }
  }

  pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
    self.reply_to = Some(reply_to.into());
    self
  }
}
