use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::{
  domains::{contact::model::ContactRequest, newsletter::model::SubscriptionRequest},
  models::ApiResponse,
};

/// What came back from the site API: whether the status was 2xx, and the
/// envelope (empty when the body was not one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
  pub ok: bool,
  pub body: ApiResponse,
}

#[async_trait]
pub trait ContactEndpoint: Send + Sync {
  async fn post_contact(&self, request: &ContactRequest) -> Result<EndpointReply>;
}

#[async_trait]
pub trait NewsletterEndpoint: Send + Sync {
  async fn post_subscription(&self, request: &SubscriptionRequest) -> Result<EndpointReply>;
}

#[derive(Debug, Clone)]
pub struct SiteApiClient {
  http_client: reqwest::Client,
  base_url: String,
}

impl SiteApiClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      http_client: reqwest::Client::new(),
      base_url: base_url.into().trim_end_matches('/').to_string(),
    }
  }

  async fn post_json<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<EndpointReply> {
    let url = format!("{}{}", self.base_url, path);
    let response = self
      .http_client
      .post(&url)
      .json(body)
      .send()
      .await
      .with_context(|| format!("request to {} failed", url))?;

    let ok = response.status().is_success();
    let bytes = response
      .bytes()
      .await
      .with_context(|| format!("reading response from {} failed", url))?;
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
      tracing::debug!("Response from {} is not an API envelope: {}", url, e);
      ApiResponse::default()
    });

    Ok(EndpointReply { ok, body })
  }
}

#[async_trait]
impl ContactEndpoint for SiteApiClient {
  async fn post_contact(&self, request: &ContactRequest) -> Result<EndpointReply> {
    self.post_json("/api/contact", request).await
  }
}

#[async_trait]
impl NewsletterEndpoint for SiteApiClient {
  async fn post_subscription(&self, request: &SubscriptionRequest) -> Result<EndpointReply> {
    self.post_json("/api/newsletter", request).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
  };

  #[tokio::test]
  async fn post_contact_sends_json_and_parses_success() {
    let server = MockServer::start().await;
    let request = ContactRequest {
      name: "Ada".to_string(),
      email: "ada@example.com".to_string(),
      subject: "Hello".to_string(),
      message: "A long enough message".to_string(),
    };

    Mock::given(method("POST"))
      .and(path("/api/contact"))
      .and(header("content-type", "application/json"))
      .and(body_json(&request))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "Message sent successfully!" })))
      .expect(1)
      .mount(&server)
      .await;

    let client = SiteApiClient::new(format!("{}/", server.uri()));
    let reply = client.post_contact(&request).await.unwrap();

    assert!(reply.ok);
    assert_eq!(reply.body.message.as_deref(), Some("Message sent successfully!"));
  }

  #[tokio::test]
  async fn post_subscription_reports_error_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/newsletter"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "success": false, "error": "Email is required" })))
      .expect(1)
      .mount(&server)
      .await;

    let client = SiteApiClient::new(server.uri());
    let reply = client.post_subscription(&SubscriptionRequest::new("")).await.unwrap();

    assert!(!reply.ok);
    assert_eq!(reply.body.user_message(), Some("Email is required"));
  }

  #[tokio::test]
  async fn non_json_body_yields_empty_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
      .mount(&server)
      .await;

    let client = SiteApiClient::new(server.uri());
    let reply = client.post_subscription(&SubscriptionRequest::new("a@b.co")).await.unwrap();

    assert!(!reply.ok);
    assert_eq!(reply.body, ApiResponse::default());
  }

  #[tokio::test]
  async fn unreachable_server_is_an_error() {
    let client = SiteApiClient::new("http://127.0.0.1:1");

    let result = client.post_subscription(&SubscriptionRequest::new("a@b.co")).await;
    assert!(result.is_err());
  }
}
