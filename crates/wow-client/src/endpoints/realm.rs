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

use super::{impl_endpoint_base, EndpointBase, EndpointContext, RequestOptions};
use crate::params::QueryParams;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};
use wow_core::{Endpoint, Error, Result};
use wow_models::{ConnectedRealm, SearchPage};

/// Connected realm and auction house endpoints (dynamic namespace)
#[derive(Debug, Clone)]
pub struct RealmEndpoints {
  context: EndpointContext,
  options: RequestOptions,
}

impl RealmEndpoints {
  /// List every connected realm as links to their documents
  #[instrument(skip(self))]
  pub async fn index(&self) -> Result<Value> {
    self.context().get(Endpoint::ConnectedRealmIndex, &[], self.options(), None).await
  }

  /// Get the realms that share a connected realm id
  ///
  /// # Arguments
  ///
  /// * `connected_realm_id` - Found with [`RealmEndpoints::index`] or [`RealmEndpoints::search`]
  #[instrument(skip(self))]
  pub async fn connected_realm(&self, connected_realm_id: u64) -> Result<Value> {
    self
      .context()
      .get(
        Endpoint::ConnectedRealm,
        &[("connected_realm_id", connected_realm_id)],
        self.options(),
        None,
      )
      .await
  }

  /// Get the current auction house snapshot for a connected realm
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use wow_client::WowClient;
  /// # async fn run(client: &WowClient) -> wow_core::Result<()> {
  /// let auctions = client.realms().auctions(4).await?;
  /// let count = auctions["auctions"].as_array().map(|a| a.len()).unwrap_or(0);
  /// println!("{} listings", count);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn auctions(&self, connected_realm_id: u64) -> Result<Value> {
    self
      .context()
      .get(Endpoint::Auctions, &[("connected_realm_id", connected_realm_id)], self.options(), None)
      .await
  }

  /// Search connected realms.
  ///
  /// Filters are passed through untouched and override base parameters of the
  /// same name. Nested fields use dotted keys, e.g. `data.realms.slug`;
  /// `_page`, `_pageSize` and `orderby` control paging and sorting.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use wow_client::{QueryParams, WowClient};
  /// # async fn run(client: &WowClient) -> wow_core::Result<()> {
  /// let filters = QueryParams::new().with("data.realms.slug", "illidan");
  /// let found = client.realms().search(&filters).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self), fields(filter_count = filters.len()))]
  pub async fn search(&self, filters: &QueryParams) -> Result<Value> {
    self
      .context()
      .get(Endpoint::ConnectedRealmSearch, &[], self.options(), Some(filters))
      .await
  }

  /// Build a realm name to connected realm id map.
  ///
  /// Runs a realm search, then fetches each hit's connected realm document
  /// and records every realm listed in it. Ids are returned as strings.
  #[instrument(skip(self))]
  pub async fn realm_index(&self) -> Result<BTreeMap<String, String>> {
    let response = self.search(&QueryParams::new()).await?;
    let page: SearchPage = serde_json::from_value(response)
      .map_err(|e| Error::MissingField(format!("results missing from realm search: {}", e)))?;

    let locale = self.context().locale.as_deref();
    let mut index = BTreeMap::new();

    for result in &page.results {
      debug!("Resolving connected realm: {}", result.key.href);
      let document = self.context().follow(&result.key.href, self.options()).await?;
      let connected: ConnectedRealm = serde_json::from_value(document)
        .map_err(|e| Error::MissingField(format!("realms missing from connected realm: {}", e)))?;

      for realm in &connected.realms {
        let name = realm
          .name
          .resolve(locale)
          .ok_or_else(|| Error::MissingField("realm name".to_string()))?;
        let id = realm.connected_realm_id().ok_or_else(|| {
          Error::MissingField(format!("connected realm id in {}", realm.connected_realm.href))
        })?;
        index.insert(name.to_string(), id);
      }
    }

    info!("Indexed {} realms across {} connected realms", index.len(), page.results.len());
    Ok(index)
  }
}

impl_endpoint_base!(RealmEndpoints);
