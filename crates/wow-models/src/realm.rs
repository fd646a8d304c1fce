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

//! Search pages and connected realm documents

use crate::common::{Link, LocalizedString};
use serde::{Deserialize, Serialize};

/// One page of a search endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
  #[serde(default)]
  pub page: Option<u32>,
  #[serde(default)]
  pub page_size: Option<u32>,
  #[serde(default)]
  pub max_page_size: Option<u32>,
  #[serde(default)]
  pub page_count: Option<u32>,
  pub results: Vec<SearchResult>,
}

/// A search hit: the self link of the document plus its indexed data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
  pub key: Link,
  #[serde(default)]
  pub data: serde_json::Value,
}

/// Connected realm document, `/data/wow/connected-realm/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedRealm {
  #[serde(default)]
  pub id: Option<u64>,
  pub realms: Vec<RealmSummary>,
}

/// A realm as listed inside its connected realm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmSummary {
  #[serde(default)]
  pub id: Option<u64>,
  pub name: LocalizedString,
  #[serde(default)]
  pub slug: Option<String>,
  pub connected_realm: Link,
}

impl RealmSummary {
  /// Connected realm id taken from the last path segment of `connected_realm.href`
  pub fn connected_realm_id(&self) -> Option<String> {
    trailing_id(&self.connected_realm.href)
  }
}

/// Numeric last path segment of an API link, ignoring any query string
pub fn trailing_id(href: &str) -> Option<String> {
  let path = href.split(['?', '#']).next()?;
  let segment = path.trim_end_matches('/').rsplit('/').next()?;
  if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
    Some(segment.to_string())
  } else {
    None
  }
}
