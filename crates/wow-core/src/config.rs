//! Configuration management for the WoW game data client
//!
//! Credentials follow a fixed precedence: values set on the [`Config`] win,
//! then the `WOW_API_ID` / `WOW_API_SECRET` environment variables, and if
//! neither supplies both halves client construction fails with
//! [`Error::Config`].

use crate::error::{Error, Result};
use crate::types::Region;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Client id/secret pair for the client-credentials exchange
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
  pub client_id: String,
  #[serde(default, skip_serializing)]
  pub client_secret: String,
}

impl Credentials {
  pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
    Self { client_id: client_id.into(), client_secret: client_secret.into() }
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("client_id", &self.client_id)
      .field("client_secret", &"<redacted>")
      .finish()
  }
}

/// Main configuration struct for the WoW client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// API region; selects hosts and the namespace suffix
  pub region: Region,

  /// Response language, e.g. `en_US`. `None` returns every supported locale.
  pub locale: Option<String>,

  /// Explicit credentials. Takes precedence over the environment.
  pub credentials: Option<Credentials>,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Client-side rate limit (requests per second)
  pub rate_limit: u32,

  /// Override for the game data API base URL
  pub api_base_url: Option<String>,

  /// Override for the OAuth token endpoint
  pub oauth_url: Option<String>,
}

impl Config {
  /// Create a config for a region with default settings
  pub fn new(region: Region) -> Self {
    Config {
      region,
      locale: None,
      credentials: None,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      api_base_url: None,
      oauth_url: None,
    }
  }

  /// Load configuration from environment variables
  ///
  /// Reads a `.env` file first if one exists. Credentials are not copied
  /// into the config; they are looked up when the client is built.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_env_with(|key| env::var(key).ok())
  }

  /// Build a config using `lookup` in place of the process environment
  ///
  /// Unset or empty variables fall back to the defaults: region `us`, no
  /// locale, [`crate::DEFAULT_TIMEOUT_SECS`] and [`crate::DEFAULT_RATE_LIMIT`].
  pub fn from_env_with<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let region = match var(crate::ENV_REGION) {
      Some(region) => region.parse::<Region>()?,
      None => Region::Us,
    };

    let locale = var(crate::ENV_LOCALE);

    let timeout_secs = match var(crate::ENV_TIMEOUT_SECS) {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(format!("Invalid {}: {}", crate::ENV_TIMEOUT_SECS, raw)))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    let rate_limit = match var(crate::ENV_RATE_LIMIT) {
      Some(raw) => raw
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::Config(format!("Invalid {}: {}", crate::ENV_RATE_LIMIT, raw)))?,
      None => crate::DEFAULT_RATE_LIMIT,
    };

    Ok(Config {
      region,
      locale,
      credentials: None,
      timeout_secs,
      rate_limit,
      api_base_url: None,
      oauth_url: None,
    })
  }

  pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
    self.locale = Some(locale.into());
    self
  }

  pub fn with_credentials(
    mut self,
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
  ) -> Self {
    self.credentials = Some(Credentials::new(client_id, client_secret));
    self
  }

  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
    self.rate_limit = rate_limit;
    self
  }

  /// Point data requests at another host (a proxy or a test server)
  pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
    self.api_base_url = Some(url.into());
    self
  }

  /// Point the client-credentials exchange at another endpoint
  pub fn with_oauth_url(mut self, url: impl Into<String>) -> Self {
    self.oauth_url = Some(url.into());
    self
  }

  /// Effective API base URL, without a trailing slash
  pub fn api_base_url(&self) -> String {
    match &self.api_base_url {
      Some(url) => url.trim_end_matches('/').to_string(),
      None => self.region.api_base_url(),
    }
  }

  /// Effective OAuth token endpoint
  pub fn oauth_url(&self) -> String {
    self.oauth_url.clone().unwrap_or_else(|| self.region.oauth_url())
  }

  /// Resolve credentials from the config, falling back to the process environment
  ///
  /// A `.env` file, if present, is loaded into the environment first.
  pub fn resolve_credentials(&self) -> Result<Credentials> {
    if self.credentials.is_none() {
      dotenv().ok();
    }
    self.resolve_credentials_with(|key| env::var(key).ok())
  }

  /// Resolve credentials using `lookup` in place of the process environment
  pub fn resolve_credentials_with<F>(&self, lookup: F) -> Result<Credentials>
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(credentials) = &self.credentials {
      if !credentials.client_id.is_empty() && !credentials.client_secret.is_empty() {
        return Ok(credentials.clone());
      }
    }

    let id = lookup(crate::ENV_CLIENT_ID).filter(|v| !v.is_empty());
    let secret = lookup(crate::ENV_CLIENT_SECRET).filter(|v| !v.is_empty());

    match (id, secret) {
      (Some(id), Some(secret)) => Ok(Credentials::new(id, secret)),
      _ => Err(Error::Config(format!(
        "No client credentials found. Set {} and {} or pass them to Config::with_credentials",
        crate::ENV_CLIENT_ID,
        crate::ENV_CLIENT_SECRET
      ))),
    }
  }

  /// Check numeric limits and URL overrides
  pub fn validate(&self) -> Result<()> {
    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
    }
    if self.rate_limit == 0 {
      return Err(Error::Config("rate_limit must be greater than zero".to_string()));
    }
    Url::parse(&self.api_base_url())
      .map_err(|e| Error::Config(format!("Invalid API base URL: {}", e)))?;
    Url::parse(&self.oauth_url()).map_err(|e| Error::Config(format!("Invalid OAuth URL: {}", e)))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn fake_env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_explicit_credentials_win_over_env() {
    let config = Config::new(Region::Us).with_credentials("arg_id", "arg_secret");
    let env = fake_env(&[("WOW_API_ID", "env_id"), ("WOW_API_SECRET", "env_secret")]);

    let creds = config.resolve_credentials_with(env).unwrap();
    assert_eq!(creds.client_id, "arg_id");
    assert_eq!(creds.client_secret, "arg_secret");
  }

  #[test]
  fn test_env_fallback() {
    let config = Config::new(Region::Eu);
    let env = fake_env(&[("WOW_API_ID", "env_id"), ("WOW_API_SECRET", "env_secret")]);

    let creds = config.resolve_credentials_with(env).unwrap();
    assert_eq!(creds.client_id, "env_id");
  }

  #[test]
  fn test_missing_credentials_is_config_error() {
    let config = Config::new(Region::Us);
    let result = config.resolve_credentials_with(fake_env(&[("WOW_API_ID", "only_id")]));
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_empty_explicit_credentials_fall_through() {
    let config = Config::new(Region::Us).with_credentials("", "");
    let env = fake_env(&[("WOW_API_ID", "env_id"), ("WOW_API_SECRET", "env_secret")]);
    assert_eq!(config.resolve_credentials_with(env).unwrap().client_id, "env_id");
  }

  #[test]
  fn test_base_url_overrides() {
    let config = Config::new(Region::Kr);
    assert_eq!(config.api_base_url(), "https://kr.api.blizzard.com");
    assert_eq!(config.oauth_url(), "https://kr.battle.net/oauth/token");

    let config = config
      .with_api_base_url("http://127.0.0.1:9000/")
      .with_oauth_url("http://127.0.0.1:9000/oauth/token");
    assert_eq!(config.api_base_url(), "http://127.0.0.1:9000");
    assert_eq!(config.oauth_url(), "http://127.0.0.1:9000/oauth/token");
  }

  #[test]
  fn test_validate() {
    assert!(Config::new(Region::Us).validate().is_ok());
    assert!(Config::new(Region::Us).with_rate_limit(0).validate().is_err());
    assert!(Config::new(Region::Us).with_api_base_url("not a url").validate().is_err());
  }

  #[test]
  fn test_from_env_defaults() {
    let config = Config::from_env_with(fake_env(&[("WOW_LOCALE", "")])).unwrap();
    assert_eq!(config.region, Region::Us);
    assert_eq!(config.locale, None);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.rate_limit, 100);
    assert!(config.credentials.is_none());
  }

  #[test]
  fn test_from_env_overrides() {
    let config = Config::from_env_with(fake_env(&[
      ("WOW_REGION", "eu"),
      ("WOW_LOCALE", "de_DE"),
      ("WOW_TIMEOUT_SECS", "5"),
      ("WOW_RATE_LIMIT", "10"),
    ]))
    .unwrap();

    assert_eq!(config.region, Region::Eu);
    assert_eq!(config.locale.as_deref(), Some("de_DE"));
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.rate_limit, 10);
    assert_eq!(config.api_base_url(), "https://eu.api.blizzard.com");
  }

  #[test]
  fn test_from_env_invalid_values() {
    let unknown_region = Config::from_env_with(fake_env(&[("WOW_REGION", "moon")]));
    assert!(matches!(unknown_region, Err(Error::Config(_))));

    let bad_timeout = Config::from_env_with(fake_env(&[("WOW_TIMEOUT_SECS", "soon")]));
    assert!(matches!(bad_timeout, Err(Error::Config(msg)) if msg.contains("WOW_TIMEOUT_SECS")));

    let bad_rate = Config::from_env_with(fake_env(&[("WOW_RATE_LIMIT", "-1")]));
    assert!(matches!(bad_rate, Err(Error::Config(msg)) if msg.contains("WOW_RATE_LIMIT")));
  }

  #[test]
  fn test_serialized_config_reads_back_without_secret() {
    let config = Config::new(Region::Tw).with_credentials("id", "hunter2");
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("hunter2"));

    let restored: Config = serde_json::from_str(&json).unwrap();
    let creds = restored.credentials.unwrap();
    assert_eq!(creds.client_id, "id");
    assert!(creds.client_secret.is_empty());
    assert_eq!(restored.region, Region::Tw);
  }

  #[test]
  fn test_credentials_debug_redacts_secret() {
    let creds = Credentials::new("id", "hunter2");
    let debug = format!("{:?}", creds);
    assert!(debug.contains("id"));
    assert!(!debug.contains("hunter2"));
  }
}
