use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use site_mailer::app::{cors_layer, create_app};
use site_mailer::config::ServerSettings;
use site_mailer::state::SharedAppState;
use site_mailer::utils::init_mail_context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let settings = ServerSettings::from_env();

  let mail_context = init_mail_context().await;
  let app_state = SharedAppState::new(mail_context);
  let app = create_app(app_state).layer(cors_layer(settings.cors_allowed_origin.as_deref())?);

  let listener = tokio::net::TcpListener::bind(&settings.address).await?;

  tracing::info!("Server running on http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
