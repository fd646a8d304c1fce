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

//! Auction House Valuation Example
//!
//! Sums every listing on a connected realm's auction house and prints the
//! total in gold. Credentials come from `WOW_API_ID` / `WOW_API_SECRET`,
//! either exported or in a `.env` file.
//!
//! ```text
//! cargo run -p wow-client --example auction_value -- 4
//! ```

use serde_json::Value;
use tracing_subscriber::EnvFilter;
use wow_client::{as_gold, Config, WowClient, WowTokenPrice};

/// Unit price for commodities, buyout for gear, bid as a last resort
fn listing_value(listing: &Value) -> u64 {
  ["unit_price", "buyout", "bid"]
    .iter()
    .find_map(|field| listing.get(*field).and_then(Value::as_u64))
    .unwrap_or(0)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  // 4 == Winterhoof
  let connected_realm_id = std::env::args().nth(1).and_then(|a| a.parse().ok()).unwrap_or(4);

  let mut config = Config::from_env()?;
  if config.locale.is_none() {
    config = config.with_locale("en_US");
  }
  let client = WowClient::new(config).await?;

  let auctions = client.realms().auctions(connected_realm_id).await?;
  let listings = auctions["auctions"].as_array().cloned().unwrap_or_default();
  let total: u64 = listings.iter().map(listing_value).sum();

  println!("{} listings on connected realm {}", listings.len(), connected_realm_id);
  println!("Total value: {}", as_gold(total));

  let token: WowTokenPrice = serde_json::from_value(client.token().price().await?)?;
  println!("WoW Token: {} (updated {:?})", as_gold(token.price), token.last_updated());

  Ok(())
}
