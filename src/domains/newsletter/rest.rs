use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::NewsletterPayload;
use crate::{
  models::ApiResponse,
  state::{AppState, SharedAppState},
  AppError,
};

pub fn newsletter_routes() -> Router<SharedAppState> {
  Router::new().route("/newsletter", post(subscribe_handler))
}

pub async fn subscribe_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<ApiResponse>, AppError> {
  let payload: NewsletterPayload = serde_json::from_slice(&body)?;
  state.subscribe(payload).await.map(JsonResponse).map_err(AppError::from)
}
