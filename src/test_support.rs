use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailMessage, MailContext, Mailer},
  state::SharedAppState,
};

#[derive(Default)]
pub struct RecordingMailer {
  sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().expect("mailer lock").clone()
  }

  pub fn recipients(&self) -> Vec<String> {
    self.sent().into_iter().map(|message| message.to).collect()
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, message: &EmailMessage) -> anyhow::Result<()> {
    self.sent.lock().expect("mailer lock").push(message.clone());
    Ok(())
  }
}

pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, _message: &EmailMessage) -> anyhow::Result<()> {
    Err(anyhow!("connection refused"))
  }
}

pub fn mail_context(mailer: Arc<dyn Mailer>, operator: Option<&str>) -> MailContext {
  MailContext::new(mailer, "site@example.com", operator.map(str::to_string))
}

pub fn app_with_mail(mail: Option<MailContext>) -> Router {
  create_app(SharedAppState::new(mail))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send_post(app, uri, Body::from(body)).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  send_post(app, uri, Body::from(body)).await
}

/// Posts `body` with no `content-type` header, as a bare `fetch` or `curl -d` might.
pub async fn post_untyped(app: Router, uri: &str, body: &'static str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .body(Body::from(body))
    .expect("build request");
  read_response(app, request).await
}

async fn send_post(app: Router, uri: &str, body: Body) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body)
    .expect("build request");
  read_response(app, request).await
}

async fn read_response(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
