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

//! Media documents (profession, recipe and item icons)

use serde::{Deserialize, Serialize};

/// Asset key the API uses for icon images
pub const ICON_ASSET_KEY: &str = "icon";

/// A single rendered asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
  pub key: String,

  /// Absolute URL of the asset on the render CDN
  pub value: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub file_data_id: Option<u64>,
}

/// Media document, e.g. `/data/wow/media/item/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,

  pub assets: Vec<MediaAsset>,
}

impl Media {
  /// URL of the icon asset, or of the first asset if none is keyed `icon`
  pub fn icon_url(&self) -> Option<&str> {
    self
      .assets
      .iter()
      .find(|a| a.key == ICON_ASSET_KEY)
      .or_else(|| self.assets.first())
      .map(|a| a.value.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_icon_url_prefers_icon_key() {
    let media: Media = serde_json::from_value(json!({
      "id": 19019,
      "assets": [
        {"key": "zoom", "value": "https://render.worldofwarcraft.com/zoom.jpg"},
        {"key": "icon", "value": "https://render.worldofwarcraft.com/icon.jpg", "file_data_id": 135349}
      ]
    }))
    .unwrap();
    assert_eq!(media.icon_url(), Some("https://render.worldofwarcraft.com/icon.jpg"));
  }

  #[test]
  fn test_icon_url_falls_back_to_first_asset() {
    let media: Media = serde_json::from_value(json!({
      "assets": [{"key": "image", "value": "https://render.worldofwarcraft.com/a.jpg"}]
    }))
    .unwrap();
    assert_eq!(media.icon_url(), Some("https://render.worldofwarcraft.com/a.jpg"));

    let empty = Media { id: None, assets: vec![] };
    assert_eq!(empty.icon_url(), None);
  }

  #[test]
  fn test_missing_assets_fails_to_parse() {
    assert!(serde_json::from_value::<Media>(json!({"id": 1})).is_err());
  }
}
