use std::{collections::BTreeMap, error::Error};

use async_trait::async_trait;
use chrono::Utc;
use validator::Validate;

use super::{
  model::{field_errors, ContactField, ContactRequest},
  templates,
};
use crate::{email::MailContext, models::ApiResponse};

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(BTreeMap<ContactField, String>),
  NotConfigured,
  DeliveryFailed(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(fields) => {
        let names: Vec<&str> = fields.keys().map(|field| field.as_str()).collect();
        write!(f, "Validation Error: {}", names.join(", "))
      }
      ContactServiceError::NotConfigured => write!(f, "Email service is not configured"),
      ContactServiceError::DeliveryFailed(msg) => write!(f, "Delivery Failed: {}", msg),
    }
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, req: ContactRequest) -> Result<ApiResponse, ContactServiceError>;
}

pub struct ContactServiceImpl {
  mail: Option<MailContext>,
}

impl ContactServiceImpl {
  pub fn new(mail: Option<MailContext>) -> Self {
    Self { mail }
  }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
  async fn submit(&self, req: ContactRequest) -> Result<ApiResponse, ContactServiceError> {
    req
      .validate()
      .map_err(|e| ContactServiceError::ValidationError(field_errors(&e)))?;

    let mail = self.mail.as_ref().ok_or_else(|| {
      tracing::error!("Missing email configuration");
      ContactServiceError::NotConfigured
    })?;

    let notification = templates::operator_notification(mail, &req, Utc::now());
    let acknowledgement = templates::acknowledgement(mail, &req);

    mail
      .deliver(&notification, Some(&acknowledgement))
      .await
      .map_err(|e| {
        tracing::error!("Contact form error: {:?}", e);
        ContactServiceError::DeliveryFailed(e.to_string())
      })?;

    Ok(ApiResponse::ok(CONTACT_SUCCESS_MESSAGE))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{mail_context, FailingMailer, RecordingMailer};
  use std::sync::Arc;

  fn request() -> ContactRequest {
    ContactRequest {
      name: "Grace Hopper".to_string(),
      email: "grace@example.com".to_string(),
      subject: "Compilers".to_string(),
      message: "Let's talk about compilers sometime.".to_string(),
    }
  }

  #[tokio::test]
  async fn sends_notification_and_acknowledgement() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactServiceImpl::new(Some(mail_context(mailer.clone(), Some("owner@example.com"))));

    let response = service.submit(request()).await.unwrap();

    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some(CONTACT_SUCCESS_MESSAGE));
    let mut recipients = mailer.recipients();
    recipients.sort();
    assert_eq!(recipients, vec!["grace@example.com", "owner@example.com"]);
  }

  #[tokio::test]
  async fn validation_runs_before_configuration_check() {
    let service = ContactServiceImpl::new(None);
    let req = ContactRequest {
      subject: "Hi".to_string(),
      ..request()
    };

    match service.submit(req).await {
      Err(ContactServiceError::ValidationError(fields)) => {
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key(&ContactField::Subject));
      }
      other => panic!("expected validation error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn missing_configuration_is_reported() {
    let service = ContactServiceImpl::new(None);

    let result = service.submit(request()).await;
    assert!(matches!(result, Err(ContactServiceError::NotConfigured)));
  }

  #[tokio::test]
  async fn transport_failure_is_reported() {
    let service = ContactServiceImpl::new(Some(mail_context(Arc::new(FailingMailer), None)));

    let result = service.submit(request()).await;
    assert!(matches!(result, Err(ContactServiceError::DeliveryFailed(_))));
  }
}
