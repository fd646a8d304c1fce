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

/// WoW Token price endpoint (dynamic namespace)
#[derive(Debug, Clone)]
pub struct TokenEndpoints {
  context: EndpointContext,
  options: RequestOptions,
}

impl TokenEndpoints {
  /// Current WoW Token price in copper and the time it was last updated.
  ///
  /// Decode into [`wow_models::WowTokenPrice`] for typed access.
  #[instrument(skip(self))]
  pub async fn price(&self) -> Result<Value> {
    self.context().get(Endpoint::WowToken, &[], self.options(), None).await
  }
}

impl_endpoint_base!(TokenEndpoints);
