//! Email sending functionality module
//!
//! Outbound mail goes through the [`Mailer`] trait. [`EmailService`] is the
//! lettre-backed SMTP implementation used in production; handlers only ever
//! see a [`MailContext`], which pairs a mailer with the addresses the site
//! sends from and notifies.

mod service;
mod types;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

pub use service::EmailService;
pub use types::{EmailMessage, SmtpConfig};

#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<()>;
}

#[derive(Clone)]
pub struct MailContext {
  mailer: Arc<dyn Mailer>,
  sender_address: String,
  operator_address: Option<String>,
}

impl MailContext {
  pub fn new(mailer: Arc<dyn Mailer>, sender_address: impl Into<String>, operator_address: Option<String>) -> Self {
    Self {
      mailer,
      sender_address: sender_address.into(),
      operator_address,
    }
  }

  pub fn sender_address(&self) -> &str {
    &self.sender_address
  }

  /// The explicitly configured notification address, if any.
  pub fn operator_address(&self) -> Option<&str> {
    self.operator_address.as_deref()
  }

  /// Where operator-facing mail goes when it must always be delivered.
  pub fn operator_or_sender(&self) -> &str {
    self.operator_address().unwrap_or(&self.sender_address)
  }

  /// Sends `primary` and, when present, `secondary` concurrently. Both sends
  /// run to completion before this returns; the first failure is reported.
  pub async fn deliver(&self, primary: &EmailMessage, secondary: Option<&EmailMessage>) -> Result<()> {
    let (first, second) = tokio::join!(self.send_logged(primary), async {
      match secondary {
        Some(message) => self.send_logged(message).await,
        None => Ok(()),
      }
    });

    first.and(second)
  }

  async fn send_logged(&self, message: &EmailMessage) -> Result<()> {
    match self.mailer.send(message).await {
      Ok(()) => {
        tracing::info!(to = %message.to, subject = %message.subject, "email sent");
        Ok(())
      }
      Err(e) => {
        tracing::error!(to = %message.to, subject = %message.subject, "failed to send email: {:?}", e);
        Err(e)
      }
    }
  }
}
