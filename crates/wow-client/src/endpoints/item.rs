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
use tracing::instrument;
use wow_core::{Endpoint, Result};

/// Item class, item set and item endpoints (static namespace)
#[derive(Debug, Clone)]
pub struct ItemEndpoints {
  context: EndpointContext,
  options: RequestOptions,
}

impl ItemEndpoints {
  /// List all item classes (consumable, container, weapon, ...)
  #[instrument(skip(self))]
  pub async fn classes(&self) -> Result<Value> {
    self.context().get(Endpoint::ItemClassIndex, &[], self.options(), None).await
  }

  /// Get an item class and its subclasses (class consumable: potion, elixir, ...)
  #[instrument(skip(self))]
  pub async fn class(&self, item_class_id: u64) -> Result<Value> {
    self
      .context()
      .get(Endpoint::ItemClass, &[("item_class_id", item_class_id)], self.options(), None)
      .await
  }

  /// List all item sets, e.g. tier sets
  #[instrument(skip(self))]
  pub async fn set_index(&self) -> Result<Value> {
    self.context().get(Endpoint::ItemSetIndex, &[], self.options(), None).await
  }

  /// Get an item's media document
  #[instrument(skip(self))]
  pub async fn media(&self, item_id: u64) -> Result<Value> {
    self.context().get(Endpoint::ItemMedia, &[("item_id", item_id)], self.options(), None).await
  }

  /// Download an item's icon image
  #[instrument(skip(self))]
  pub async fn icon(&self, item_id: u64) -> Result<Vec<u8>> {
    self.context().icon(Endpoint::ItemMedia, &[("item_id", item_id)], self.options()).await
  }

  /// Search items.
  ///
  /// Any indexed field can be filtered, e.g. `required_level` or
  /// `name.en_US`. An id range is written `[start,end]` or `[start,]`.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use wow_client::{QueryParams, WowClient};
  /// # async fn run(client: &WowClient) -> wow_core::Result<()> {
  /// let filters = QueryParams::new()
  ///   .with("quality.name.en_US", "Legendary")
  ///   .with("_pageSize", 100)
  ///   .with("orderby", "id");
  /// let legendaries = client.items().search(&filters).await?;
  /// println!("{}", legendaries["pageCount"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self), fields(filter_count = filters.len()))]
  pub async fn search(&self, filters: &QueryParams) -> Result<Value> {
    self.context().get(Endpoint::ItemSearch, &[], self.options(), Some(filters)).await
  }
}

impl_endpoint_base!(ItemEndpoints);
