pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use types::{Namespace, Region};

/// The supported game data API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Connected realm endpoints
  ConnectedRealmIndex,
  ConnectedRealm,
  Auctions,

  // Profession and recipe endpoints
  ProfessionIndex,
  Profession,
  ProfessionSkillTier,
  ProfessionMedia,
  Recipe,
  RecipeMedia,

  // Item endpoints
  ItemClassIndex,
  ItemClass,
  ItemSetIndex,
  ItemMedia,

  // Token price
  WowToken,

  // Search
  ConnectedRealmSearch,
  ItemSearch,
  MediaSearch,
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::ConnectedRealmIndex => write!(f, "connected_realm_index"),
      Endpoint::ConnectedRealm => write!(f, "connected_realm"),
      Endpoint::Auctions => write!(f, "auctions"),
      Endpoint::ProfessionIndex => write!(f, "profession_index"),
      Endpoint::Profession => write!(f, "profession"),
      Endpoint::ProfessionSkillTier => write!(f, "profession_skill_tier"),
      Endpoint::ProfessionMedia => write!(f, "profession_media"),
      Endpoint::Recipe => write!(f, "recipe"),
      Endpoint::RecipeMedia => write!(f, "recipe_media"),
      Endpoint::ItemClassIndex => write!(f, "item_class_index"),
      Endpoint::ItemClass => write!(f, "item_class"),
      Endpoint::ItemSetIndex => write!(f, "item_set_index"),
      Endpoint::ItemMedia => write!(f, "item_media"),
      Endpoint::WowToken => write!(f, "wow_token"),
      Endpoint::ConnectedRealmSearch => write!(f, "connected_realm_search"),
      Endpoint::ItemSearch => write!(f, "item_search"),
      Endpoint::MediaSearch => write!(f, "media_search"),
    }
  }
}

impl Endpoint {
  /// Path template relative to the API base URL. `{name}` marks a path parameter.
  pub fn template(&self) -> &'static str {
    match self {
      Endpoint::ConnectedRealmIndex => "/data/wow/connected-realm/index",
      Endpoint::ConnectedRealm => "/data/wow/connected-realm/{connected_realm_id}",
      Endpoint::Auctions => "/data/wow/connected-realm/{connected_realm_id}/auctions",
      Endpoint::ProfessionIndex => "/data/wow/profession/index",
      Endpoint::Profession => "/data/wow/profession/{profession_id}",
      Endpoint::ProfessionSkillTier => {
        "/data/wow/profession/{profession_id}/skill-tier/{skill_tier_id}"
      }
      Endpoint::ProfessionMedia => "/data/wow/media/profession/{profession_id}",
      Endpoint::Recipe => "/data/wow/recipe/{recipe_id}",
      Endpoint::RecipeMedia => "/data/wow/media/recipe/{recipe_id}",
      Endpoint::ItemClassIndex => "/data/wow/item-class/index",
      Endpoint::ItemClass => "/data/wow/item-class/{item_class_id}",
      Endpoint::ItemSetIndex => "/data/wow/item-set/index",
      Endpoint::ItemMedia => "/data/wow/media/item/{item_id}",
      Endpoint::WowToken => "/data/wow/token/index",
      Endpoint::ConnectedRealmSearch => "/data/wow/search/connected-realm",
      Endpoint::ItemSearch => "/data/wow/search/item",
      Endpoint::MediaSearch => "/data/wow/search/media",
    }
  }

  /// Namespace the endpoint lives in
  pub fn namespace(&self) -> Namespace {
    match self {
      Endpoint::ConnectedRealmIndex
      | Endpoint::ConnectedRealm
      | Endpoint::Auctions
      | Endpoint::WowToken
      | Endpoint::ConnectedRealmSearch => Namespace::Dynamic,
      _ => Namespace::Static,
    }
  }

  /// Fill the path template with `ids`.
  ///
  /// Every placeholder must be supplied; leftovers are a programming error
  /// reported as [`Error::Config`].
  pub fn render(&self, ids: &[(&str, u64)]) -> Result<String> {
    let mut path = self.template().to_string();
    for (name, value) in ids {
      path = path.replace(&format!("{{{}}}", name), &value.to_string());
    }
    if path.contains('{') {
      return Err(Error::Config(format!("Unfilled path parameter in {} for endpoint {}", path, self)));
    }
    Ok(path)
  }
}

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default client-side rate limit (requests per second)
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Environment variables read by [`Config`]
pub const ENV_CLIENT_ID: &str = "WOW_API_ID";
pub const ENV_CLIENT_SECRET: &str = "WOW_API_SECRET";
pub const ENV_REGION: &str = "WOW_REGION";
pub const ENV_LOCALE: &str = "WOW_LOCALE";
pub const ENV_TIMEOUT_SECS: &str = "WOW_TIMEOUT_SECS";
pub const ENV_RATE_LIMIT: &str = "WOW_RATE_LIMIT";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_fills_placeholders() {
    let path = Endpoint::ProfessionSkillTier
      .render(&[("profession_id", 164), ("skill_tier_id", 2437)])
      .unwrap();
    assert_eq!(path, "/data/wow/profession/164/skill-tier/2437");

    assert_eq!(Endpoint::WowToken.render(&[]).unwrap(), "/data/wow/token/index");
  }

  #[test]
  fn test_render_rejects_missing_placeholder() {
    let result = Endpoint::Auctions.render(&[]);
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_endpoint_namespaces() {
    assert_eq!(Endpoint::Auctions.namespace(), Namespace::Dynamic);
    assert_eq!(Endpoint::ConnectedRealmSearch.namespace(), Namespace::Dynamic);
    assert_eq!(Endpoint::WowToken.namespace(), Namespace::Dynamic);
    assert_eq!(Endpoint::ItemSearch.namespace(), Namespace::Static);
    assert_eq!(Endpoint::RecipeMedia.namespace(), Namespace::Static);
  }
}
