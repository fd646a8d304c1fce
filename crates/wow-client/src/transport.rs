//! HTTP transport layer for game data and OAuth requests

use crate::params::QueryParams;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;
use wow_core::{Config, Credentials, Error, Result};

/// HTTP transport layer for making requests to the game data API
#[derive(Debug)]
pub struct Transport {
  client: Client,
  api_base_url: String,
  oauth_url: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("wow-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, api_base_url: config.api_base_url(), oauth_url: config.oauth_url(), timeout })
  }

  /// Build the full URL for an API path and its query parameters
  pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<Url> {
    let url = Url::parse(&format!("{}{}", self.api_base_url, path))
      .map_err(|e| Error::Config(format!("Invalid API URL: {}", e)))?;
    Ok(with_query(url, params))
  }

  /// Make a GET request and deserialize the JSON body
  #[instrument(skip(self, url, bearer), fields(url = %redact(&url)))]
  pub async fn get_json<T>(
    &self,
    url: Url,
    bearer: Option<&str>,
    timeout: Option<Duration>,
  ) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let mut request = self.client.get(url.clone()).timeout(timeout.unwrap_or(self.timeout));
    if let Some(token) = bearer {
      request = request.bearer_auth(token);
    }

    let response = self.send(request, &url).await?;
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());
    decode_body(&text)
  }

  /// Make a GET request and return the raw body
  #[instrument(skip(self, url), fields(url = %redact(&url)))]
  pub async fn get_bytes(&self, url: Url, timeout: Option<Duration>) -> Result<Vec<u8>> {
    let request = self.client.get(url.clone()).timeout(timeout.unwrap_or(self.timeout));
    let response = self.send(request, &url).await?;
    let bytes = response
      .bytes()
      .await
      .map_err(|e| map_reqwest_error(e, &url))?;

    debug!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
  }

  /// POST a client-credentials form to the OAuth endpoint
  #[instrument(skip(self, credentials), fields(client_id = %credentials.client_id))]
  pub async fn post_token_form<T>(&self, credentials: &Credentials, timeout: Option<Duration>) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = Url::parse(&self.oauth_url)
      .map_err(|e| Error::Config(format!("Invalid OAuth URL: {}", e)))?;

    let request = self
      .client
      .post(url.clone())
      .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
      .form(&[("grant_type", "client_credentials")])
      .timeout(timeout.unwrap_or(self.timeout));

    let response = self.send(request, &url).await?;
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read token response: {}", e)))?;
    decode_body(&text)
  }

  /// Send the request and reject non-2xx statuses
  async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response> {
    let response = request.send().await.map_err(|e| map_reqwest_error(e, url))?;

    let status = response.status();
    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      error!("Request failed with status: {}", status);
      Err(Error::Status { status: status.as_u16(), url: redact(url) })
    }
  }

  /// Get the API base URL being used
  pub fn api_base_url(&self) -> &str {
    &self.api_base_url
  }

  /// Get the OAuth endpoint being used
  pub fn oauth_url(&self) -> &str {
    &self.oauth_url
  }

  /// Get default request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

/// Decode a response body into `T`.
///
/// A body that is not JSON at all is [`Error::Parse`]; JSON that does not fit
/// `T` is [`Error::Serde`].
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T> {
  let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Parse(format!(
      "Failed to parse response: {}. Response: {}",
      e,
      &text[..floor_char_boundary(text, 200)]
    ))
  })?;
  Ok(serde_json::from_value(value)?)
}

/// Append `params` to the URL.
///
/// Pairs already on the URL are kept unless `params` has the same key, in
/// which case the new value replaces them.
pub fn with_query(mut url: Url, params: &QueryParams) -> Url {
  if params.is_empty() {
    return url;
  }

  let kept: Vec<(String, String)> = url
    .query_pairs()
    .filter(|(k, _)| !params.contains_key(k))
    .map(|(k, v)| (k.into_owned(), v.into_owned()))
    .collect();

  url.set_query(None);
  {
    let mut pairs = url.query_pairs_mut();
    pairs.extend_pairs(kept);
    for (key, value) in params.iter() {
      pairs.append_pair(key, value);
    }
  }
  url
}

/// URL as a string with the access token masked, for logs and errors
pub fn redact(url: &Url) -> String {
  if !url.query_pairs().any(|(k, _)| k == "access_token") {
    return url.to_string();
  }

  let pairs: Vec<(String, String)> = url
    .query_pairs()
    .map(|(k, v)| {
      let value = if k == "access_token" { "***".to_string() } else { v.into_owned() };
      (k.into_owned(), value)
    })
    .collect();

  let mut masked = url.clone();
  masked.query_pairs_mut().clear().extend_pairs(pairs);
  masked.to_string()
}

fn map_reqwest_error(e: reqwest::Error, url: &Url) -> Error {
  if e.is_timeout() {
    Error::Timeout(format!("{} ({})", redact(url), e.without_url()))
  } else {
    Error::Http(format!("Request failed: {}", e.without_url()))
  }
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
  let mut idx = std::cmp::min(max, text.len());
  while !text.is_char_boundary(idx) {
    idx -= 1;
  }
  idx
}

#[cfg(test)]
mod tests {
  use super::*;
  use wow_core::Region;

  fn mock_transport() -> Transport {
    let config = Config::new(Region::Us)
      .with_api_base_url("https://mock.api.blizzard.com")
      .with_oauth_url("https://mock.battle.net/oauth/token");
    Transport::new(&config).unwrap()
  }

  #[test]
  fn test_build_url() {
    let transport = mock_transport();
    let params = QueryParams::new()
      .with("namespace", "dynamic-us")
      .with("data.realms.slug", "illidan");

    let url = transport.build_url("/data/wow/search/connected-realm", &params).unwrap();

    assert!(url.as_str().starts_with("https://mock.api.blizzard.com/data/wow/search/connected-realm?"));
    assert!(url.as_str().contains("namespace=dynamic-us"));
    assert!(url.as_str().contains("data.realms.slug=illidan"));
  }

  #[test]
  fn test_with_query_keeps_existing_pairs() {
    let url = Url::parse("https://us.api.blizzard.com/data/wow/connected-realm/4?namespace=dynamic-us").unwrap();
    let url = with_query(url, &QueryParams::new().with("locale", "en_US"));
    assert_eq!(url.query(), Some("namespace=dynamic-us&locale=en_US"));
  }

  #[test]
  fn test_with_query_replaces_overridden_pairs() {
    let url = Url::parse(
      "https://us.api.blizzard.com/data/wow/connected-realm/4?namespace=dynamic-us&locale=en_US",
    )
    .unwrap();
    let url = with_query(url, &QueryParams::new().with("namespace", "dynamic-eu"));

    let namespaces: Vec<_> = url.query_pairs().filter(|(k, _)| k == "namespace").collect();
    assert_eq!(namespaces.len(), 1);
    assert_eq!(namespaces[0].1, "dynamic-eu");
    assert_eq!(url.query(), Some("locale=en_US&namespace=dynamic-eu"));
  }

  #[test]
  fn test_decode_body_errors() {
    let not_json = decode_body::<wow_models::WowTokenPrice>("<html>gateway timeout</html>");
    assert!(matches!(not_json, Err(Error::Parse(_))));

    let wrong_shape = decode_body::<wow_models::WowTokenPrice>(r#"{"price": "lots"}"#);
    assert!(matches!(wrong_shape, Err(Error::Serde(_))));

    let price: wow_models::WowTokenPrice =
      decode_body(r#"{"last_updated_timestamp": 1653847530000, "price": 1656890000}"#).unwrap();
    assert_eq!(price.price, 1656890000);
  }

  #[test]
  fn test_redact_masks_access_token() {
    let url = Url::parse("https://us.api.blizzard.com/data/wow/token/index?namespace=dynamic-us&access_token=secret").unwrap();
    let shown = redact(&url);
    assert!(!shown.contains("secret"));
    assert!(shown.contains("access_token=***") || shown.contains("access_token=%2A%2A%2A"));
    assert!(shown.contains("namespace=dynamic-us"));
  }

  #[test]
  fn test_redact_without_token_is_identity() {
    let url = Url::parse("https://render.worldofwarcraft.com/us/icons/56/inv_sword_39.jpg").unwrap();
    assert_eq!(redact(&url), url.to_string());
  }

  #[test]
  fn test_floor_char_boundary() {
    assert_eq!(floor_char_boundary("abc", 200), 3);
    assert_eq!(floor_char_boundary("héllo", 2), 1);
  }

  #[test]
  fn test_transport_settings() {
    let transport = mock_transport();
    assert_eq!(transport.api_base_url(), "https://mock.api.blizzard.com");
    assert_eq!(transport.oauth_url(), "https://mock.battle.net/oauth/token");
    assert_eq!(transport.timeout(), Duration::from_secs(30));
  }
}
