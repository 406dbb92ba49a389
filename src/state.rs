use std::sync::Arc;

use crate::{
  domains::{
    contact::{
      model::ContactRequest,
      service::{ContactService, ContactServiceError, ContactServiceImpl},
    },
    newsletter::{
      model::NewsletterPayload,
      service::{NewsletterService, NewsletterServiceError, NewsletterServiceImpl},
    },
  },
  email::MailContext,
  models::ApiResponse,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn subscribe(
    &self,
    payload: NewsletterPayload,
  ) -> impl std::future::Future<Output = Result<ApiResponse, NewsletterServiceError>> + Send;
  fn submit_contact(
    &self,
    req: ContactRequest,
  ) -> impl std::future::Future<Output = Result<ApiResponse, ContactServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub newsletter_service: Arc<NewsletterServiceImpl>,
  pub contact_service: Arc<ContactServiceImpl>,
}

impl SharedAppState {
  /// `mail` is `None` when the transport is not configured.
  pub fn new(mail: Option<MailContext>) -> Self {
    let newsletter_service = Arc::new(NewsletterServiceImpl::new(mail.clone()));
    let contact_service = Arc::new(ContactServiceImpl::new(mail));

    Self {
      newsletter_service,
      contact_service,
    }
  }
}

impl AppState for SharedAppState {
  async fn subscribe(&self, payload: NewsletterPayload) -> Result<ApiResponse, NewsletterServiceError> {
    self.newsletter_service.subscribe(payload).await
  }

  async fn submit_contact(&self, req: ContactRequest) -> Result<ApiResponse, ContactServiceError> {
    self.contact_service.submit(req).await
  }
}
