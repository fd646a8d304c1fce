/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Client-credentials token acquisition and caching
//!
//! The token is fetched eagerly when the client is built. It is reused for
//! every request until the deadline reported by `expires_in` (less a small
//! skew) has passed, at which point the next request runs the exchange again.

use crate::transport::Transport;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use wow_core::{Credentials, Error, Result};
use wow_models::AccessTokenResponse;

/// Seconds shaved off `expires_in` so a token is not used right at its deadline
pub const EXPIRY_SKEW_SECS: i64 = 60;

/// A bearer token and, when the server reported one, its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
  pub token: String,
  pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
  pub fn is_expired(&self) -> bool {
    self.expires_at.map(|at| Utc::now() >= at).unwrap_or(false)
  }

  fn from_response(response: AccessTokenResponse) -> Result<Self> {
    let token = response.access_token.filter(|t| !t.is_empty()).ok_or_else(|| {
      Error::MissingField(
        "access_token not found in token response. The response format may have changed."
          .to_string(),
      )
    })?;

    let expires_at = response.expires_in.and_then(expiry_from_lifetime);

    Ok(Self { token, expires_at })
  }
}

/// Deadline for a token that lives `secs` seconds, less the skew.
///
/// Lifetimes at or below the skew are stale on arrival. A lifetime too large
/// to represent as a timestamp is treated as no expiry at all.
fn expiry_from_lifetime(secs: i64) -> Option<DateTime<Utc>> {
  let now = Utc::now();
  if secs <= EXPIRY_SKEW_SECS {
    return Some(now);
  }
  ChronoDuration::try_seconds(secs - EXPIRY_SKEW_SECS).and_then(|ttl| now.checked_add_signed(ttl))
}

/// Run the client-credentials exchange once
pub async fn fetch_access_token(transport: &Transport, credentials: &Credentials) -> Result<CachedToken> {
  let response: AccessTokenResponse = transport.post_token_form(credentials, None).await?;
  let token = CachedToken::from_response(response)?;
  info!("Obtained access token (expires_at: {:?})", token.expires_at);
  Ok(token)
}

/// Owns the credentials and the cached token for one client
pub struct TokenManager {
  transport: Arc<Transport>,
  credentials: Credentials,
  cached: RwLock<CachedToken>,
}

impl TokenManager {
  /// Fetch the first token. Fails the same way [`fetch_access_token`] does.
  pub async fn new(transport: Arc<Transport>, credentials: Credentials) -> Result<Self> {
    let token = fetch_access_token(&transport, &credentials).await?;
    Ok(Self { transport, credentials, cached: RwLock::new(token) })
  }

  /// Current token, re-running the exchange first if it has expired
  pub async fn token(&self) -> Result<String> {
    {
      let cached = self.cached.read().await;
      if !cached.is_expired() {
        return Ok(cached.token.clone());
      }
    }

    let mut cached = self.cached.write().await;

    // Another caller may have refreshed while we waited for the write lock
    if !cached.is_expired() {
      return Ok(cached.token.clone());
    }

    debug!("Access token expired, requesting a new one");
    let fresh = fetch_access_token(&self.transport, &self.credentials).await?;
    let token = fresh.token.clone();
    *cached = fresh;
    Ok(token)
  }

  /// Snapshot of the cached token without refreshing
  pub async fn cached(&self) -> CachedToken {
    self.cached.read().await.clone()
  }

  pub fn client_id(&self) -> &str {
    &self.credentials.client_id
  }
}

impl std::fmt::Debug for TokenManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenManager")
      .field("credentials", &self.credentials)
      .field("cached", &"<token>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use wiremock::matchers::{body_string_contains, header_exists, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};
  use wow_core::{Config, Region};

  fn transport_for(server: &MockServer) -> Arc<Transport> {
    let config = Config::new(Region::Us)
      .with_api_base_url(server.uri())
      .with_oauth_url(format!("{}/oauth/token", server.uri()));
    Arc::new(Transport::new(&config).unwrap())
  }

  #[test]
  fn test_cached_token_expiry() {
    let fresh = CachedToken { token: "t".into(), expires_at: Some(Utc::now() + ChronoDuration::hours(1)) };
    let stale = CachedToken { token: "t".into(), expires_at: Some(Utc::now() - ChronoDuration::seconds(1)) };
    let forever = CachedToken { token: "t".into(), expires_at: None };

    assert!(!fresh.is_expired());
    assert!(stale.is_expired());
    assert!(!forever.is_expired());
  }

  #[test]
  fn test_missing_token_is_missing_field() {
    let response = AccessTokenResponse { access_token: None, token_type: None, expires_in: None, sub: None };
    assert!(matches!(CachedToken::from_response(response), Err(Error::MissingField(_))));
  }

  #[test]
  fn test_out_of_range_lifetimes_do_not_panic() {
    let huge = AccessTokenResponse {
      access_token: Some("t".into()),
      token_type: None,
      expires_in: Some(i64::MAX),
      sub: None,
    };
    let token = CachedToken::from_response(huge).unwrap();
    assert_eq!(token.expires_at, None);
    assert!(!token.is_expired());

    let negative = AccessTokenResponse {
      access_token: Some("t".into()),
      token_type: None,
      expires_in: Some(i64::MIN),
      sub: None,
    };
    let token = CachedToken::from_response(negative).unwrap();
    assert!(token.is_expired());
  }

  #[test]
  fn test_expiry_applies_skew() {
    let before = Utc::now();
    let at = expiry_from_lifetime(3600).unwrap();
    assert!(at >= before + ChronoDuration::seconds(3600 - EXPIRY_SKEW_SECS));
    assert!(at <= Utc::now() + ChronoDuration::seconds(3600 - EXPIRY_SKEW_SECS));
  }

  #[tokio::test]
  async fn test_fetch_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/oauth/token"))
      .and(header_exists("authorization"))
      .and(body_string_contains("grant_type=client_credentials"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "access_token": "0000000000000000000000000000000000",
        "token_type": "bearer",
        "expires_in": 86399
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let transport = transport_for(&mock_server);
    let token = fetch_access_token(&transport, &Credentials::new("id", "secret")).await.unwrap();

    assert_eq!(token.token.len(), 34);
    assert!(!token.is_expired());
  }

  #[tokio::test]
  async fn test_fetch_access_token_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/oauth/token"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid_client"})))
      .mount(&mock_server)
      .await;

    let transport = transport_for(&mock_server);
    let result = fetch_access_token(&transport, &Credentials::new("id", "wrong")).await;

    assert!(matches!(result, Err(Error::Status { status: 401, .. })));
  }

  #[tokio::test]
  async fn test_token_manager_refreshes_expired_token() {
    let mock_server = MockServer::start().await;

    // expires_in below the skew makes the token stale on arrival
    Mock::given(method("POST"))
      .and(path("/oauth/token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "access_token": "short-lived",
        "expires_in": 0
      })))
      .expect(2)
      .mount(&mock_server)
      .await;

    let manager = TokenManager::new(transport_for(&mock_server), Credentials::new("id", "secret"))
      .await
      .unwrap();
    assert_eq!(manager.token().await.unwrap(), "short-lived");
  }

  #[tokio::test]
  async fn test_token_manager_reuses_token_without_expiry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/oauth/token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "long-lived"})))
      .expect(1)
      .mount(&mock_server)
      .await;

    let manager = TokenManager::new(transport_for(&mock_server), Credentials::new("id", "secret"))
      .await
      .unwrap();
    for _ in 0..3 {
      assert_eq!(manager.token().await.unwrap(), "long-lived");
    }
    assert_eq!(manager.cached().await.expires_at, None);
    assert_eq!(manager.client_id(), "id");
  }
}
