//! inquiry-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus the
//! environment, opens the SQLite-backed inquiry table once, and serves the
//! submission endpoint over HTTP.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use inquiry_api::{AppState, config::ServiceConfig};
use inquiry_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Inquiry submission server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = ServiceConfig::load(&cli.config)
    .context("failed to load configuration")?;

  let store_path = expand_tilde(&cfg.store_path);

  let store = SqliteStore::open(&store_path, &cfg.table_name)
    .await
    .with_context(|| {
      format!("failed to open table {:?} at {store_path:?}", cfg.table_name)
    })?;

  let state = AppState {
    store: Arc::new(store),
    cors:  Arc::new(cfg.cors()),
  };

  let app = inquiry_api::router(state);
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!(
    table = %cfg.table_name,
    cors_origin = %cfg.cors_origin,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
