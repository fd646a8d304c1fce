//! Region and namespace types shared by the client and its configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Battle.net API region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
  Us,
  Eu,
  Kr,
  Tw,
  /// China uses separate hosts and does not accept tokens from other regions
  Cn,
}

impl std::fmt::Display for Region {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Region::Us => write!(f, "us"),
      Region::Eu => write!(f, "eu"),
      Region::Kr => write!(f, "kr"),
      Region::Tw => write!(f, "tw"),
      Region::Cn => write!(f, "cn"),
    }
  }
}

impl FromStr for Region {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "us" => Ok(Region::Us),
      "eu" => Ok(Region::Eu),
      "kr" => Ok(Region::Kr),
      "tw" => Ok(Region::Tw),
      "cn" => Ok(Region::Cn),
      other => Err(Error::Config(format!("Unknown region: {}", other))),
    }
  }
}

impl Region {
  /// Base URL of the game data API for this region
  pub fn api_base_url(&self) -> String {
    match self {
      Region::Cn => "https://gateway.battlenet.com.cn".to_string(),
      region => format!("https://{}.api.blizzard.com", region),
    }
  }

  /// OAuth token endpoint for this region
  pub fn oauth_url(&self) -> String {
    match self {
      Region::Cn => "https://oauth.battlenet.com.cn/oauth/token".to_string(),
      region => format!("https://{}.battle.net/oauth/token", region),
    }
  }
}

/// API partition. Static data changes with patches, dynamic data changes continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
  Static,
  Dynamic,
}

impl Namespace {
  /// Namespace query value for a region, e.g. `dynamic-us`
  pub fn for_region(&self, region: Region) -> String {
    match self {
      Namespace::Static => format!("static-{}", region),
      Namespace::Dynamic => format!("dynamic-{}", region),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_region_parse() {
    assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
    assert_eq!(" eu ".parse::<Region>().unwrap(), Region::Eu);
    assert!(matches!("xx".parse::<Region>(), Err(Error::Config(_))));
  }

  #[test]
  fn test_region_hosts() {
    assert_eq!(Region::Us.api_base_url(), "https://us.api.blizzard.com");
    assert_eq!(Region::Eu.oauth_url(), "https://eu.battle.net/oauth/token");
    assert_eq!(Region::Cn.api_base_url(), "https://gateway.battlenet.com.cn");
    assert_eq!(Region::Cn.oauth_url(), "https://oauth.battlenet.com.cn/oauth/token");
  }

  #[test]
  fn test_namespace_for_region() {
    assert_eq!(Namespace::Static.for_region(Region::Kr), "static-kr");
    assert_eq!(Namespace::Dynamic.for_region(Region::Us), "dynamic-us");
  }
}
