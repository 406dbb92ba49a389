//! Contact form state: field values, per-field errors and submission status.
//!
//! Field errors clear as soon as the field is edited and come back on blur or
//! submit. A submission is a single request; nothing is retried.

use std::collections::BTreeMap;

use super::client::ContactEndpoint;
use crate::domains::contact::model::{ContactField, ContactRequest};

pub const SUBMIT_SUCCESS_NOTICE: &str = "Message sent successfully!";
pub const SUBMIT_FALLBACK_ERROR: &str = "Something went wrong.";
pub const SUBMIT_NETWORK_ERROR: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
  #[default]
  Idle,
  Validating,
  Submitting,
  Success,
  Error,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
  data: ContactRequest,
  errors: BTreeMap<ContactField, String>,
  status: FormStatus,
  status_message: Option<String>,
  notice: Option<String>,
}

impl ContactForm {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn value(&self, field: ContactField) -> &str {
    self.data.value(field)
  }

  pub fn data(&self) -> &ContactRequest {
    &self.data
  }

  pub fn status(&self) -> FormStatus {
    self.status
  }

  pub fn status_message(&self) -> Option<&str> {
    self.status_message.as_deref()
  }

  pub fn error(&self, field: ContactField) -> Option<&str> {
    self.errors.get(&field).map(String::as_str)
  }

  pub fn errors(&self) -> &BTreeMap<ContactField, String> {
    &self.errors
  }

  pub fn is_submitting(&self) -> bool {
    self.status == FormStatus::Submitting
  }

  /// Hands out the success notice once.
  pub fn take_notice(&mut self) -> Option<String> {
    self.notice.take()
  }

  pub fn handle_change(&mut self, field: ContactField, value: impl Into<String>) {
    *self.data.value_mut(field) = value.into();
    self.errors.remove(&field);
  }

  /// Re-checks only `field`: records its message when invalid and clears any
  /// earlier message when it now passes.
  pub fn handle_blur(&mut self, field: ContactField) {
    match field.check(self.data.value(field)) {
      Ok(()) => {
        self.errors.remove(&field);
      }
      Err(msg) => {
        self.errors.insert(field, msg.to_string());
      }
    }
  }

  /// Re-checks every field; returns `true` when none are invalid.
  pub fn validate_all(&mut self) -> bool {
    self.errors = ContactField::ALL
      .into_iter()
      .filter_map(|field| {
        field
          .check(self.data.value(field))
          .err()
          .map(|msg| (field, msg.to_string()))
      })
      .collect();
    self.errors.is_empty()
  }

  pub async fn submit<E>(&mut self, endpoint: &E) -> FormStatus
  where
    E: ContactEndpoint + ?Sized,
  {
    self.status = FormStatus::Validating;
    self.status_message = None;

    if !self.validate_all() {
      self.status = FormStatus::Idle;
      return self.status;
    }

    self.status = FormStatus::Submitting;
    match endpoint.post_contact(&self.data).await {
      Ok(reply) if reply.ok => {
        self.data = ContactRequest::default();
        self.errors.clear();
        self.status = FormStatus::Success;
        self.status_message = Some(SUBMIT_SUCCESS_NOTICE.to_string());
        self.notice = Some(SUBMIT_SUCCESS_NOTICE.to_string());
      }
      Ok(reply) => {
        if let Some(fields) = &reply.body.errors {
          self.errors = fields
            .iter()
            .filter_map(|(name, msg)| ContactField::from_name(name).map(|field| (field, msg.clone())))
            .collect();
        }
        self.status = FormStatus::Error;
        self.status_message = Some(reply.body.user_message().unwrap_or(SUBMIT_FALLBACK_ERROR).to_string());
      }
      Err(e) => {
        tracing::warn!("Contact submission failed: {:?}", e);
        self.status = FormStatus::Error;
        self.status_message = Some(SUBMIT_NETWORK_ERROR.to_string());
      }
    }

    self.status
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{forms::client::EndpointReply, models::ApiResponse};
  use anyhow::anyhow;
  use async_trait::async_trait;
  use std::sync::Mutex;

  #[derive(Default)]
  struct FakeEndpoint {
    reply: Option<EndpointReply>,
    calls: Mutex<Vec<ContactRequest>>,
  }

  impl FakeEndpoint {
    fn replying(ok: bool, body: ApiResponse) -> Self {
      Self {
        reply: Some(EndpointReply { ok, body }),
        calls: Mutex::new(Vec::new()),
      }
    }

    fn calls(&self) -> Vec<ContactRequest> {
      self.calls.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl ContactEndpoint for FakeEndpoint {
    async fn post_contact(&self, request: &ContactRequest) -> anyhow::Result<EndpointReply> {
      self.calls.lock().unwrap().push(request.clone());
      self.reply.clone().ok_or_else(|| anyhow!("network down"))
    }
  }

  fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.handle_change(ContactField::Name, "Ada Lovelace");
    form.handle_change(ContactField::Email, "ada@example.com");
    form.handle_change(ContactField::Subject, "Engines");
    form.handle_change(ContactField::Message, "Shall we discuss the engine?");
    form
  }

  #[tokio::test]
  async fn short_message_blocks_submission_with_one_error() {
    let endpoint = FakeEndpoint::replying(true, ApiResponse::ok("ok"));
    let mut form = filled_form();
    form.handle_change(ContactField::Message, "too short");

    let status = form.submit(&endpoint).await;

    assert_eq!(status, FormStatus::Idle);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(
      form.error(ContactField::Message),
      Some("Message must be at least 10 characters")
    );
    assert!(endpoint.calls().is_empty());
  }

  #[test]
  fn editing_a_field_clears_only_its_error() {
    let mut form = ContactForm::new();
    form.handle_change(ContactField::Name, "A");
    form.handle_change(ContactField::Email, "bad");
    assert!(!form.validate_all());
    assert!(form.error(ContactField::Name).is_some());
    assert!(form.error(ContactField::Email).is_some());

    form.handle_change(ContactField::Email, "");
    form.handle_change(ContactField::Email, "ada@example.com");

    assert_eq!(form.error(ContactField::Email), None);
    assert_eq!(form.error(ContactField::Name), Some("Name must be at least 2 characters"));
    assert_eq!(form.error(ContactField::Subject), Some("Subject is required"));
    assert_eq!(form.error(ContactField::Message), Some("Message is required"));
  }

  #[test]
  fn blur_validates_just_that_field() {
    let mut form = ContactForm::new();

    form.handle_blur(ContactField::Subject);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(ContactField::Subject), Some("Subject is required"));

    form.handle_change(ContactField::Subject, "Hey there");
    form.handle_blur(ContactField::Subject);
    assert!(form.errors().is_empty());
  }

  #[tokio::test]
  async fn successful_submission_clears_form_and_sets_notice() {
    let endpoint = FakeEndpoint::replying(true, ApiResponse::ok("Message sent successfully!"));
    let mut form = filled_form();

    let status = form.submit(&endpoint).await;

    assert_eq!(status, FormStatus::Success);
    assert_eq!(endpoint.calls().len(), 1);
    assert_eq!(endpoint.calls()[0].name, "Ada Lovelace");
    assert_eq!(form.data(), &ContactRequest::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.take_notice().as_deref(), Some(SUBMIT_SUCCESS_NOTICE));
    assert_eq!(form.take_notice(), None);
  }

  #[tokio::test]
  async fn server_message_is_shown_on_failure() {
    let endpoint = FakeEndpoint::replying(
      false,
      ApiResponse {
        message: Some("Mailbox full".to_string()),
        ..ApiResponse::default()
      },
    );
    let mut form = filled_form();

    let status = form.submit(&endpoint).await;

    assert_eq!(status, FormStatus::Error);
    assert_eq!(form.status_message(), Some("Mailbox full"));
    assert_eq!(form.value(ContactField::Name), "Ada Lovelace");
  }

  #[tokio::test]
  async fn generic_message_when_server_gives_none() {
    let endpoint = FakeEndpoint::replying(false, ApiResponse::default());
    let mut form = filled_form();

    form.submit(&endpoint).await;

    assert_eq!(form.status(), FormStatus::Error);
    assert_eq!(form.status_message(), Some(SUBMIT_FALLBACK_ERROR));
  }

  #[tokio::test]
  async fn server_field_errors_are_applied() {
    let mut body = ApiResponse::failure("Please correct the highlighted fields");
    body.errors = Some(
      [("subject".to_string(), "Subject must be at least 3 characters".to_string())]
        .into_iter()
        .collect(),
    );
    let endpoint = FakeEndpoint::replying(false, body);
    let mut form = filled_form();

    form.submit(&endpoint).await;

    assert_eq!(form.error(ContactField::Subject), Some("Subject must be at least 3 characters"));
    assert_eq!(form.status_message(), Some("Please correct the highlighted fields"));
  }

  #[tokio::test]
  async fn network_failure_sets_retry_message() {
    let endpoint = FakeEndpoint::default();
    let mut form = filled_form();

    let status = form.submit(&endpoint).await;

    assert_eq!(status, FormStatus::Error);
    assert_eq!(form.status_message(), Some(SUBMIT_NETWORK_ERROR));
    assert!(!form.is_submitting());
  }
}
