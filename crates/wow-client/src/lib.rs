//! # wow-client
//!
//! A World of Warcraft game data API client for Rust.
//!
//! ## Features
//!
//! - **Credential handling**: client-credentials exchange on construction,
//!   token cached and reused, refreshed once it expires
//! - **Endpoint groups**: realms and auctions, professions and recipes, items,
//!   media search and the WoW Token price
//! - **Search composition**: open filter maps layered over the base
//!   `namespace` / `locale` / `access_token` parameters
//! - **Icons**: media lookups that follow the asset link and return raw bytes
//! - **Configurable**: explicit [`Config`] with environment fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wow_client::{QueryParams, WowClient};
//! use wow_core::{Config, Region};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new(Region::Eu).with_locale("en_US");
//!     let client = WowClient::new(config).await?;
//!
//!     let filters = QueryParams::new()
//!         .with("quality.name.en_US", "Legendary")
//!         .with("name.en_US", "Thunderfury, Blessed");
//!     let items = client.items().search(&filters).await?;
//!     println!("{}", items);
//!
//!     let realms = client.realms().realm_index().await?;
//!     println!("Illidan is connected realm {:?}", realms.get("Illidan"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, wow_core::Error>`. Missing credentials are a
//! `Config` error, a changed response shape is `MissingField`, and failed
//! requests are `Status`, `Timeout` or `Http`. Nothing is retried.

#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod params;
pub mod transport;

// Re-export the main client and common types
pub use client::WowClient;
pub use params::QueryParams;
pub use wow_core::{Config, Credentials, Error, Region, Result};
pub use wow_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  item::ItemEndpoints, media::MediaEndpoints, profession::ProfessionEndpoints,
  realm::RealmEndpoints, token::TokenEndpoints, RequestOptions,
};
