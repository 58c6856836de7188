//! strangler-api server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), builds the
//! remote service client and the strangler router, and serves the JSON
//! boundary over HTTP.
//!
//! # Configuration
//!
//! Every setting has a default; `STRANGLER_*` environment variables override
//! the file, e.g. `STRANGLER_API_BASE_URL=http://new-api:8000`.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use strangler_api::{AppState, ServerConfig};
use strangler_client::{ApiClient, ClientConfig};
use strangler_router::StranglerRouter;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Strangler demo request server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("STRANGLER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Build the remote client and router.
  let client = ApiClient::new(ClientConfig {
    base_url: server_cfg.api_base_url.clone(),
    timeout:  Duration::from_secs(server_cfg.request_timeout_secs),
  })
  .context("failed to build remote service client")?;

  let state = AppState { router: Arc::new(StranglerRouter::new(client)) };

  let app = strangler_api::api_router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!(
    remote = %server_cfg.api_base_url,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
