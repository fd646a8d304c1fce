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

//! OAuth token exchange and WoW Token price models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a successful client-credentials exchange.
///
/// `access_token` is optional here so a missing field can be reported as a
/// schema change instead of a generic decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
  #[serde(default)]
  pub access_token: Option<String>,

  #[serde(default)]
  pub token_type: Option<String>,

  /// Lifetime in seconds
  #[serde(default)]
  pub expires_in: Option<i64>,

  #[serde(default)]
  pub sub: Option<String>,
}

/// Response of the WoW Token index endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WowTokenPrice {
  /// Milliseconds since the Unix epoch
  pub last_updated_timestamp: i64,

  /// Price in copper
  pub price: u64,
}

impl WowTokenPrice {
  pub fn last_updated(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(self.last_updated_timestamp)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_access_token_response() {
    let body = json!({
      "access_token": "USVb1nGO9kwQlhNRRnI4iWVy2UV5j7M6h7",
      "token_type": "bearer",
      "expires_in": 86399,
      "sub": "client-id"
    });
    let parsed: AccessTokenResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.access_token.as_deref(), Some("USVb1nGO9kwQlhNRRnI4iWVy2UV5j7M6h7"));
    assert_eq!(parsed.expires_in, Some(86399));
  }

  #[test]
  fn test_access_token_missing_field_still_parses() {
    let parsed: AccessTokenResponse =
      serde_json::from_value(json!({"access_token_not_found": "0000"})).unwrap();
    assert!(parsed.access_token.is_none());
  }

  #[test]
  fn test_wow_token_price() {
    let body = json!({
      "_links": {"self": {"href": "https://us.api.blizzard.com/data/wow/token/?namespace=dynamic-us"}},
      "last_updated_timestamp": 1653847530000i64,
      "price": 1656890000u64
    });
    let token: WowTokenPrice = serde_json::from_value(body).unwrap();
    assert_eq!(token.price, 1_656_890_000);
    let updated = token.last_updated().unwrap();
    assert_eq!(updated.timestamp(), 1_653_847_530);
  }
}
