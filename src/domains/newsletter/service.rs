use async_trait::async_trait;
use chrono::Utc;
use std::error::Error;

use super::{
  model::{NewsletterPayload, SubscriptionRequest},
  templates,
};
use crate::{email::MailContext, models::ApiResponse};

pub const SUBSCRIBE_SUCCESS_MESSAGE: &str = "Successfully subscribed to newsletter!";

#[derive(Debug)]
pub enum NewsletterServiceError {
  ValidationError(String),
  NotConfigured,
  DeliveryFailed(String),
}

impl Error for NewsletterServiceError {}

impl std::fmt::Display for NewsletterServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      NewsletterServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      NewsletterServiceError::NotConfigured => write!(f, "Email service is not configured"),
      NewsletterServiceError::DeliveryFailed(msg) => write!(f, "Delivery Failed: {}", msg),
    }
  }
}

#[async_trait]
pub trait NewsletterService: Send + Sync {
  async fn subscribe(&self, payload: NewsletterPayload) -> Result<ApiResponse, NewsletterServiceError>;
}

pub struct NewsletterServiceImpl {
  mail: Option<MailContext>,
}

impl NewsletterServiceImpl {
  pub fn new(mail: Option<MailContext>) -> Self {
    Self { mail }
  }
}

#[async_trait]
impl NewsletterService for NewsletterServiceImpl {
  async fn subscribe(&self, payload: NewsletterPayload) -> Result<ApiResponse, NewsletterServiceError> {
    let request = SubscriptionRequest::try_from(payload)?;

    let mail = self.mail.as_ref().ok_or_else(|| {
      tracing::error!("Missing email configuration");
      NewsletterServiceError::NotConfigured
    })?;

    let welcome = templates::welcome_message(mail, &request.email);
    let notification = templates::admin_notification(mail, &request.email, Utc::now());

    mail
      .deliver(&welcome, notification.as_ref())
      .await
      .map_err(|e| {
        tracing::error!("Newsletter subscription error: {:?}", e);
        NewsletterServiceError::DeliveryFailed(e.to_string())
      })?;

    tracing::info!(subscriber = %request.email, "new newsletter subscription");
    Ok(ApiResponse::ok(SUBSCRIBE_SUCCESS_MESSAGE))
  }
}
