use std::collections::BTreeMap;

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};

use crate::models::ApiResponse;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
  pub field_errors: Option<BTreeMap<String, String>>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      field_errors: None,
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn with_field_errors(mut self, field_errors: BTreeMap<String, String>) -> Self {
    self.field_errors = Some(field_errors);
    self
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = ApiResponse {
      errors: self.field_errors,
      ..ApiResponse::failure(self.message)
    };

    (self.status_code, Json(body)).into_response()
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::warn!("JSON error: {:?}", error);
    AppError::bad_request("Invalid JSON format")
  }
}

impl From<crate::domains::newsletter::service::NewsletterServiceError> for AppError {
  fn from(error: crate::domains::newsletter::service::NewsletterServiceError) -> Self {
    use crate::domains::newsletter::service::NewsletterServiceError;
    match error {
      NewsletterServiceError::ValidationError(msg) => AppError::bad_request(msg),
      NewsletterServiceError::NotConfigured => AppError::internal_server_error("Email service is not configured"),
      NewsletterServiceError::DeliveryFailed(_) => {
        AppError::internal_server_error("Failed to subscribe. Please try again later.")
      }
    }
  }
}

impl From<crate::domains::contact::service::ContactServiceError> for AppError {
  fn from(error: crate::domains::contact::service::ContactServiceError) -> Self {
    use crate::domains::contact::service::ContactServiceError;
    match error {
      ContactServiceError::ValidationError(fields) => AppError::bad_request("Please correct the highlighted fields")
        .with_field_errors(
          fields
            .into_iter()
            .map(|(field, msg)| (field.as_str().to_string(), msg))
            .collect(),
        ),
      ContactServiceError::NotConfigured => AppError::internal_server_error("Email service is not configured"),
      ContactServiceError::DeliveryFailed(_) => {
        AppError::internal_server_error("Failed to send message. Please try again later.")
      }
    }
  }
}
