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

//! In-game currency helpers. Prices from the API are in copper.

use serde::{Deserialize, Serialize};

pub const COPPER_PER_SILVER: u64 = 100;
pub const COPPER_PER_GOLD: u64 = 10_000;

/// A copper amount split into gold, silver and copper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
  pub gold: u64,
  pub silver: u8,
  pub copper: u8,
}

impl Money {
  pub fn from_copper(copper: u64) -> Self {
    Money {
      gold: copper / COPPER_PER_GOLD,
      silver: ((copper / COPPER_PER_SILVER) % 100) as u8,
      copper: (copper % COPPER_PER_SILVER) as u8,
    }
  }

  pub fn to_copper(&self) -> u64 {
    self.gold * COPPER_PER_GOLD + self.silver as u64 * COPPER_PER_SILVER + self.copper as u64
  }
}

impl std::fmt::Display for Money {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}g {:02}s {:02}c", group_thousands(self.gold), self.silver, self.copper)
  }
}

/// Format a copper amount as `430,846,968g 67s 00c`
pub fn as_gold(copper: u64) -> String {
  Money::from_copper(copper).to_string()
}

fn group_thousands(value: u64) -> String {
  let digits = value.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_as_gold() {
    assert_eq!(as_gold(4_308_469_686_700), "430,846,968g 67s 00c");
    assert_eq!(as_gold(1_656_890_000), "165,689g 00s 00c");
    assert_eq!(as_gold(12_345), "1g 23s 45c");
    assert_eq!(as_gold(0), "0g 00s 00c");
    assert_eq!(as_gold(999), "0g 09s 99c");
  }

  #[test]
  fn test_money_round_trip_split() {
    let money = Money::from_copper(1_000_000_101);
    assert_eq!(money, Money { gold: 100_000, silver: 1, copper: 1 });
    assert_eq!(money.to_copper(), 1_000_000_101);
  }
}
