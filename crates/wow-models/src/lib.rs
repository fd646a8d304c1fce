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

//! # wow-models
//!
//! Data models for the parts of World of Warcraft game data API responses the
//! client has to look inside.
//!
//! Most endpoints are returned to callers as untyped `serde_json::Value`; the
//! types here cover the token exchange, media asset lists, search pages and
//! connected realm documents, plus helpers for formatting copper amounts.
//!
//! ## Usage
//!
//! ```ignore
//! use wow_models::{as_gold, WowTokenPrice};
//!
//! let token: WowTokenPrice = serde_json::from_value(client.token().price().await?)?;
//! println!("Token costs {}", as_gold(token.price));
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod media;
pub mod money;
pub mod realm;
pub mod token;

// Re-export common types for convenience
pub use common::*;

pub use media::*;
pub use money::*;
pub use realm::*;
pub use token::*;
