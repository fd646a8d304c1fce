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

//! Common types and structures used across different game data API responses

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale used when a localized name has no entry for the requested locale
pub const FALLBACK_LOCALE: &str = "en_US";

/// Hypermedia link, e.g. `{"href": "https://us.api.blizzard.com/..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
  pub href: String,
}

/// Reference to another document with an optional numeric id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRef {
  pub key: Link,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,
}

/// A name field. The API returns a plain string when a locale is requested
/// and a map of every locale otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
  Plain(String),
  Localized(BTreeMap<String, String>),
}

impl LocalizedString {
  /// Pick the text for `locale`, falling back to `en_US`, then to any entry
  pub fn resolve(&self, locale: Option<&str>) -> Option<&str> {
    match self {
      LocalizedString::Plain(s) => Some(s.as_str()),
      LocalizedString::Localized(map) => locale
        .and_then(|l| map.get(l))
        .or_else(|| map.get(FALLBACK_LOCALE))
        .or_else(|| map.values().next())
        .map(String::as_str),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_plain_name() {
    let name: LocalizedString = serde_json::from_value(json!("Illidan")).unwrap();
    assert_eq!(name.resolve(Some("de_DE")), Some("Illidan"));
  }

  #[test]
  fn test_localized_name_resolution() {
    let name: LocalizedString = serde_json::from_value(json!({
      "de_DE": "Blutkessel",
      "en_US": "Blood Furnace"
    }))
    .unwrap();

    assert_eq!(name.resolve(Some("de_DE")), Some("Blutkessel"));
    assert_eq!(name.resolve(Some("ko_KR")), Some("Blood Furnace"));
    assert_eq!(name.resolve(None), Some("Blood Furnace"));
  }

  #[test]
  fn test_localized_name_without_en_us() {
    let name: LocalizedString = serde_json::from_value(json!({"fr_FR": "Hyjal"})).unwrap();
    assert_eq!(name.resolve(None), Some("Hyjal"));

    let empty = LocalizedString::Localized(BTreeMap::new());
    assert_eq!(empty.resolve(None), None);
  }
}
