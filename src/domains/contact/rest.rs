use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::ContactRequest;
use crate::{
  models::ApiResponse,
  state::{AppState, SharedAppState},
  AppError,
};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(contact_handler))
}

pub async fn contact_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<ApiResponse>, AppError> {
  let payload: ContactRequest = serde_json::from_slice(&body)?;
  state.submit_contact(payload).await.map(JsonResponse).map_err(AppError::from)
}
