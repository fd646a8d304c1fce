pub mod item;
pub mod media;
pub mod profession;
pub mod realm;
pub mod token;

use crate::auth::TokenManager;
use crate::params::{base_params, QueryParams};
use crate::transport::{with_query, Transport};
use governor::{
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
  RateLimiter,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;
use wow_core::{Endpoint, Error, Region, Result};
use wow_models::Media;

/// Rate limiter shared by a client and all of its endpoint groups
pub type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Per-call options carried by an endpoint group
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
  /// Overrides the client's default timeout
  pub timeout: Option<Duration>,
  /// Layered over the base parameters of every request
  pub params: QueryParams,
}

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the shared request context
  fn context(&self) -> &EndpointContext;

  /// Get a reference to the per-call options
  fn options(&self) -> &RequestOptions;
}

/// Macro to implement the EndpointBase trait and the option builders for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $struct_name {
      pub(crate) fn new(context: EndpointContext) -> Self {
        Self { context, options: RequestOptions::default() }
      }

      /// Use `timeout` instead of the client default for calls made through this handle
      pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
      }

      /// Add a query parameter that overrides any base parameter of the same name
      pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.options.params.insert(key, value);
        self
      }

      /// Add several overriding query parameters
      pub fn params(mut self, params: &QueryParams) -> Self {
        self.options.params.overlay(params);
        self
      }
    }

    impl EndpointBase for $struct_name {
      fn context(&self) -> &EndpointContext {
        &self.context
      }

      fn options(&self) -> &RequestOptions {
        &self.options
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Common endpoint structure
///
/// Everything an endpoint group needs to issue a request: the transport, the
/// token cache, the rate limiter and the session's region/locale. Every API
/// request made through a context waits on the shared rate limiter first.
#[derive(Clone)]
pub struct EndpointContext {
  pub transport: Arc<Transport>,
  pub auth: Arc<TokenManager>,
  pub rate_limiter: Arc<DirectRateLimiter>,
  pub region: Region,
  pub locale: Option<String>,
}

impl EndpointContext {
  /// Create a new endpoint context
  pub fn new(
    transport: Arc<Transport>,
    auth: Arc<TokenManager>,
    rate_limiter: Arc<DirectRateLimiter>,
    region: Region,
    locale: Option<String>,
  ) -> Self {
    Self { transport, auth, rate_limiter, region, locale }
  }

  /// Base parameters for `endpoint` with caller options and filters layered on top
  pub fn query_for(
    &self,
    endpoint: Endpoint,
    token: &str,
    options: &RequestOptions,
    filters: Option<&QueryParams>,
  ) -> QueryParams {
    let namespace = endpoint.namespace().for_region(self.region);
    let mut params = base_params(&namespace, self.locale.as_deref(), token);
    params.overlay(&options.params);
    if let Some(filters) = filters {
      params.overlay(filters);
    }
    params
  }

  /// Fill the template for `endpoint`, issue the GET and decode the JSON body
  pub async fn get(
    &self,
    endpoint: Endpoint,
    ids: &[(&str, u64)],
    options: &RequestOptions,
    filters: Option<&QueryParams>,
  ) -> Result<Value> {
    self.rate_limiter.until_ready().await;

    let token = self.auth.token().await?;
    let path = endpoint.render(ids)?;
    let params = self.query_for(endpoint, &token, options, filters);
    let url = self.transport.build_url(&path, &params)?;

    debug!("Requesting endpoint: {}", endpoint);
    self.transport.get_json(url, Some(&token), options.timeout).await
  }

  /// GET an absolute link returned by the API (e.g. a search result's `key.href`)
  pub async fn follow(&self, href: &str, options: &RequestOptions) -> Result<Value> {
    self.rate_limiter.until_ready().await;

    let token = self.auth.token().await?;
    let url = Url::parse(href)
      .map_err(|e| Error::MissingField(format!("Link is not a valid URL ({}): {}", e, href)))?;

    let mut params = QueryParams::new().with("access_token", &token);
    if let Some(locale) = &self.locale {
      params.insert("locale", locale);
    }
    params.overlay(&options.params);

    self.transport.get_json(with_query(url, &params), Some(&token), options.timeout).await
  }

  /// Fetch a media document, then download the icon asset it points to.
  ///
  /// Exactly two requests: the media metadata and the asset bytes.
  pub async fn icon(
    &self,
    endpoint: Endpoint,
    ids: &[(&str, u64)],
    options: &RequestOptions,
  ) -> Result<Vec<u8>> {
    let document = self.get(endpoint, ids, options, None).await?;
    let media: Media = serde_json::from_value(document)
      .map_err(|e| Error::MissingField(format!("assets missing from {} response: {}", endpoint, e)))?;

    let asset = media
      .icon_url()
      .ok_or_else(|| Error::MissingField(format!("{} response has an empty assets list", endpoint)))?;
    let asset_url = Url::parse(asset)
      .map_err(|e| Error::MissingField(format!("Asset value is not a valid URL ({}): {}", e, asset)))?;

    self.transport.get_bytes(asset_url, options.timeout).await
  }
}

impl std::fmt::Debug for EndpointContext {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EndpointContext")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .field("region", &self.region)
      .field("locale", &self.locale)
      .finish()
  }
}
