//! Service configuration and the CORS header set.

use std::{collections::BTreeMap, path::{Path, PathBuf}};

use axum::http::HeaderValue;
use inquiry_store_sqlite::DEFAULT_TABLE_NAME;
use serde::Deserialize;

/// Allowed origin used when none is configured.
pub const DEFAULT_CORS_ORIGIN: &str = "https://xxxx.com";

// ─── Service configuration ───────────────────────────────────────────────────

/// Runtime configuration, deserialised from `config.toml` and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
  pub host:        String,
  pub port:        u16,
  pub store_path:  PathBuf,
  pub table_name:  String,
  pub cors_origin: String,
}

impl ServiceConfig {
  /// Load from the file at `path` and the process environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    Self::load_with_env(path, std::env::vars().collect())
  }

  /// Layer, lowest priority first: built-in defaults, the optional TOML file
  /// at `path`, `INQUIRY_*` variables, then the bare `TABLE_NAME` and
  /// `CORS_ORIGIN` variables. Variables are read from `env`.
  ///
  /// Fails if `cors_origin` is not a valid header value.
  pub fn load_with_env(
    path: &Path,
    env: config::Map<String, String>,
  ) -> Result<Self, config::ConfigError> {
    let table_name = env.get("TABLE_NAME").cloned();
    let cors_origin = env.get("CORS_ORIGIN").cloned();

    let cfg: Self = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 3000)?
      .set_default("store_path", "inquiries.db")?
      .set_default("table_name", DEFAULT_TABLE_NAME)?
      .set_default("cors_origin", DEFAULT_CORS_ORIGIN)?
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("INQUIRY")
          .try_parsing(true)
          .source(Some(env)),
      )
      .set_override_option("table_name", table_name)?
      .set_override_option("cors_origin", cors_origin)?
      .build()?
      .try_deserialize()?;

    HeaderValue::from_str(&cfg.cors_origin).map_err(|e| {
      config::ConfigError::Message(format!(
        "cors_origin {:?} is not a valid header value: {e}",
        cfg.cors_origin
      ))
    })?;

    Ok(cfg)
  }

  pub fn cors(&self) -> CorsConfig {
    CorsConfig {
      allow_origin: self.cors_origin.clone(),
    }
  }
}

// ─── CORS ────────────────────────────────────────────────────────────────────

/// Cross-origin headers attached to every response.
#[derive(Debug, Clone)]
pub struct CorsConfig {
  pub allow_origin: String,
}

impl Default for CorsConfig {
  fn default() -> Self {
    Self {
      allow_origin: DEFAULT_CORS_ORIGIN.to_owned(),
    }
  }
}

impl CorsConfig {
  pub fn headers(&self) -> BTreeMap<String, String> {
    BTreeMap::from([
      ("Access-Control-Allow-Origin".to_owned(), self.allow_origin.clone()),
      ("Access-Control-Allow-Headers".to_owned(), "Content-Type".to_owned()),
      ("Access-Control-Allow-Methods".to_owned(), "OPTIONS,POST".to_owned()),
      ("Content-Type".to_owned(), "application/json".to_owned()),
    ])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
    vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  fn temp_toml(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("inquiry-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
  }

  #[test]
  fn default_cors_uses_placeholder_origin() {
    let headers = CorsConfig::default().headers();
    assert_eq!(headers["Access-Control-Allow-Origin"], DEFAULT_CORS_ORIGIN);
    assert_eq!(headers["Content-Type"], "application/json");
  }

  #[test]
  fn missing_file_and_empty_env_give_defaults() {
    let cfg = ServiceConfig::load_with_env(Path::new("/nonexistent/inquiry.toml"), env(&[]))
      .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.store_path, PathBuf::from("inquiries.db"));
    assert_eq!(cfg.table_name, DEFAULT_TABLE_NAME);
    assert_eq!(cfg.cors_origin, DEFAULT_CORS_ORIGIN);
  }

  #[test]
  fn file_values_override_defaults() {
    let path = temp_toml("host = \"0.0.0.0\"\nport = 8080\n");
    let cfg = ServiceConfig::load_with_env(&path, env(&[])).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("inquiries.db"));
  }

  #[test]
  fn prefixed_env_overrides_file() {
    let path = temp_toml("table_name = \"FileTable\"\nport = 8080\n");
    let cfg = ServiceConfig::load_with_env(
      &path,
      env(&[("INQUIRY_TABLE_NAME", "PrefixedTable"), ("INQUIRY_PORT", "9090")]),
    )
    .unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(cfg.table_name, "PrefixedTable");
    assert_eq!(cfg.port, 9090);
  }

  #[test]
  fn bare_env_overrides_prefixed_env_and_file() {
    let path = temp_toml(
      "table_name = \"FileTable\"\ncors_origin = \"https://file.example.org\"\n",
    );
    let cfg = ServiceConfig::load_with_env(
      &path,
      env(&[
        ("INQUIRY_TABLE_NAME", "PrefixedTable"),
        ("INQUIRY_CORS_ORIGIN", "https://prefixed.example.org"),
        ("TABLE_NAME", "BareTable"),
        ("CORS_ORIGIN", "https://bare.example.org"),
      ]),
    )
    .unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(cfg.table_name, "BareTable");
    assert_eq!(cfg.cors_origin, "https://bare.example.org");
    assert_eq!(cfg.cors().headers()["Access-Control-Allow-Origin"], "https://bare.example.org");
  }

  #[test]
  fn origin_with_control_characters_is_rejected() {
    let result = ServiceConfig::load_with_env(
      Path::new("/nonexistent/inquiry.toml"),
      env(&[("CORS_ORIGIN", "https://a.example.org\nX-Injected: 1")]),
    );
    assert!(
      matches!(result, Err(config::ConfigError::Message(ref m)) if m.contains("cors_origin")),
      "{result:?}"
    );
  }
}
