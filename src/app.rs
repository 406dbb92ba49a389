use anyhow::Context;
use axum::{
  http::{header, HeaderValue, Method},
  response::Json,
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
  domains::{contact::rest::contact_routes, newsletter::rest::newsletter_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api", newsletter_routes().merge(contact_routes()))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}

/// Restricts cross-origin calls to `origin` when given; otherwise any origin may call.
pub fn cors_layer(origin: Option<&str>) -> anyhow::Result<CorsLayer> {
  let Some(origin) = origin else {
    return Ok(CorsLayer::permissive());
  };

  let origin: HeaderValue = origin
    .parse()
    .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN: {}", origin))?;

  Ok(
    CorsLayer::new()
      .allow_origin(origin)
      .allow_methods([Method::GET, Method::POST])
      .allow_headers([header::CONTENT_TYPE]),
  )
}
