use super::client::NewsletterEndpoint;
use crate::{domains::newsletter::model::SubscriptionRequest, utils::is_valid_email};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscribeStatus {
  #[default]
  Idle,
  Loading,
  Success,
  Error,
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
  email: String,
  status: SubscribeStatus,
  message: String,
}

impl NewsletterForm {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  pub fn status(&self) -> SubscribeStatus {
    self.status
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn set_email(&mut self, email: impl Into<String>) {
    self.email = email.into();
  }

  /// Drops the outcome notice; the caller decides when it has been shown long enough.
  pub fn reset(&mut self) {
    self.status = SubscribeStatus::Idle;
    self.message.clear();
  }

  pub async fn subscribe<E>(&mut self, endpoint: &E) -> SubscribeStatus
  where
    E: NewsletterEndpoint + ?Sized,
  {
    if !is_valid_email(&self.email) {
      self.status = SubscribeStatus::Error;
      self.message = "Please enter a valid email address".to_string();
      return self.status;
    }

    self.status = SubscribeStatus::Loading;
    self.message.clear();

    let request = SubscriptionRequest::new(self.email.clone());
    match endpoint.post_subscription(&request).await {
      Ok(reply) if reply.ok => {
        self.email.clear();
        self.status = SubscribeStatus::Success;
        self.message = "Successfully subscribed!".to_string();
      }
      Ok(reply) => {
        self.status = SubscribeStatus::Error;
        self.message = reply
          .body
          .error
          .filter(|msg| !msg.is_empty())
          .unwrap_or_else(|| "Something went wrong".to_string());
      }
      Err(e) => {
        tracing::warn!("Newsletter subscription request failed: {:?}", e);
        self.status = SubscribeStatus::Error;
        self.message = "Network error. Please try again.".to_string();
      }
    }

    self.status
  }
}
