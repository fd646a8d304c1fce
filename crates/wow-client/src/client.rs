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

use crate::auth::{CachedToken, TokenManager};
use crate::endpoints::{
  item::ItemEndpoints, media::MediaEndpoints, profession::ProfessionEndpoints,
  realm::RealmEndpoints, token::TokenEndpoints, DirectRateLimiter, EndpointContext,
};
use crate::transport::Transport;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::info;
use wow_core::{Config, Credentials, Region, Result};

/// Main World of Warcraft game data API client
///
/// Provides access to the game data endpoints through grouped endpoint
/// handles. Construction runs the client-credentials exchange, so a client
/// that exists always holds a token.
///
/// # Examples
///
/// ```ignore
/// use wow_client::WowClient;
/// use wow_core::{Config, Region};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::new(Region::Us).with_locale("en_US");
///     let client = WowClient::new(config).await?;
///
///     // Winterhoof's connected realm
///     let auctions = client.realms().auctions(4).await?;
///     println!("{}", auctions["auctions"].as_array().map(|a| a.len()).unwrap_or(0));
///
///     Ok(())
/// }
/// ```
pub struct WowClient {
  context: EndpointContext,
}

impl WowClient {
  /// Create a new client and fetch its first access token
  ///
  /// # Errors
  ///
  /// * [`wow_core::Error::Config`] - no credentials in the config or the environment
  /// * [`wow_core::Error::MissingField`] - the token response had no `access_token`
  /// * [`wow_core::Error::Status`] / [`wow_core::Error::Timeout`] - the exchange itself failed
  pub async fn new(config: Config) -> Result<Self> {
    let credentials = config.resolve_credentials()?;
    Self::with_credentials(config, credentials).await
  }

  /// Create a client with already-resolved credentials, ignoring the environment
  pub async fn with_credentials(config: Config, credentials: Credentials) -> Result<Self> {
    config.validate()?;

    // validate() rejects a zero rate limit
    let rate_limit = NonZeroU32::new(config.rate_limit).unwrap_or(NonZeroU32::MIN);
    let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(rate_limit)));

    Self::with_rate_limiter(config, credentials, rate_limiter).await
  }

  /// Create a client sharing an existing rate limiter
  pub async fn with_rate_limiter(
    config: Config,
    credentials: Credentials,
    rate_limiter: Arc<DirectRateLimiter>,
  ) -> Result<Self> {
    config.validate()?;
    let transport = Arc::new(Transport::new(&config)?);
    let auth = Arc::new(TokenManager::new(transport.clone(), credentials).await?);

    info!("Client ready for region {} (locale: {:?})", config.region, config.locale);

    Ok(Self {
      context: EndpointContext::new(transport, auth, rate_limiter, config.region, config.locale),
    })
  }

  /// Get access to connected realm, auction and realm search endpoints
  pub fn realms(&self) -> RealmEndpoints {
    RealmEndpoints::new(self.context.clone())
  }

  /// Get access to profession, skill tier and recipe endpoints
  pub fn professions(&self) -> ProfessionEndpoints {
    ProfessionEndpoints::new(self.context.clone())
  }

  /// Get access to item class, item set, item media and item search endpoints
  pub fn items(&self) -> ItemEndpoints {
    ItemEndpoints::new(self.context.clone())
  }

  /// Get access to media search
  pub fn media(&self) -> MediaEndpoints {
    MediaEndpoints::new(self.context.clone())
  }

  /// Get access to the WoW Token price endpoint
  pub fn token(&self) -> TokenEndpoints {
    TokenEndpoints::new(self.context.clone())
  }

  /// The current access token, refreshed first if it has expired
  pub async fn access_token(&self) -> Result<String> {
    self.context.auth.token().await
  }

  /// The cached token and its expiry, without refreshing
  pub async fn cached_token(&self) -> CachedToken {
    self.context.auth.cached().await
  }

  pub fn region(&self) -> Region {
    self.context.region
  }

  pub fn locale(&self) -> Option<&str> {
    self.context.locale.as_deref()
  }
}

impl std::fmt::Debug for WowClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WowClient")
      .field("transport", &self.context.transport)
      .field("auth", &self.context.auth)
      .field("region", &self.context.region)
      .field("locale", &self.context.locale)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
