use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::service::NewsletterServiceError;
use crate::utils::is_valid_email;

/// Raw request body. `email` stays untyped so a missing or non-string value
/// is reported as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterPayload {
  #[serde(default)]
  pub email: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubscriptionRequest {
  pub email: String,
}

impl SubscriptionRequest {
  pub fn new(email: impl Into<String>) -> Self {
    Self { email: email.into() }
  }
}

impl TryFrom<NewsletterPayload> for SubscriptionRequest {
  type Error = NewsletterServiceError;

  fn try_from(payload: NewsletterPayload) -> Result<Self, Self::Error> {
    let email = match payload.email {
      Some(Value::String(email)) if !email.is_empty() => email,
      _ => return Err(NewsletterServiceError::ValidationError("Email is required".to_string())),
    };

    if !is_valid_email(&email) {
      return Err(NewsletterServiceError::ValidationError(
        "Please provide a valid email address".to_string(),
      ));
    }

    Ok(SubscriptionRequest { email })
  }
}
