//! Query parameter composition
//!
//! Every data request starts from a base set (`namespace`, `locale`,
//! `access_token`) and layers caller-supplied parameters on top. Later layers
//! win on key collision, so a caller can override the namespace or locale of a
//! single request without touching the client.

use std::collections::{BTreeMap, HashMap};

/// Ordered string-to-string query parameter map.
///
/// Values may be given as anything `ToString`, so `_page` can be passed as an
/// integer and `data.realms.slug` as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
  inner: BTreeMap<String, String>,
}

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert
  pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
    self.insert(key, value);
    self
  }

  /// Insert or replace a parameter
  pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
    self.inner.insert(key.into(), value.to_string())
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.inner.get(key).map(String::as_str)
  }

  pub fn remove(&mut self, key: &str) -> Option<String> {
    self.inner.remove(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.inner.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Copy every entry of `overrides` into `self`, replacing same-named keys
  pub fn overlay(&mut self, overrides: &QueryParams) {
    for (key, value) in &overrides.inner {
      self.inner.insert(key.clone(), value.clone());
    }
  }

  /// `self` layered over `base`: entries of `self` win
  pub fn merged_over(&self, base: &QueryParams) -> QueryParams {
    let mut merged = base.clone();
    merged.overlay(self);
    merged
  }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
  K: Into<String>,
  V: ToString,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = QueryParams::new();
    for (key, value) in iter {
      params.insert(key, value);
    }
    params
  }
}

impl<K, V> From<HashMap<K, V>> for QueryParams
where
  K: Into<String>,
  V: ToString,
{
  fn from(map: HashMap<K, V>) -> Self {
    map.into_iter().collect()
  }
}

impl<'a> IntoIterator for &'a QueryParams {
  type Item = (&'a String, &'a String);
  type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.inner.iter()
  }
}

/// Base parameters carried by every data request.
///
/// A `None` locale is left out so the API returns every locale.
pub fn base_params(namespace: &str, locale: Option<&str>, access_token: &str) -> QueryParams {
  let mut params = QueryParams::new()
    .with("namespace", namespace)
    .with("access_token", access_token);
  if let Some(locale) = locale {
    params.insert("locale", locale);
  }
  params
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_params_with_locale() {
    let params = base_params("dynamic-us", Some("en_US"), "tok");
    assert_eq!(params.get("namespace"), Some("dynamic-us"));
    assert_eq!(params.get("locale"), Some("en_US"));
    assert_eq!(params.get("access_token"), Some("tok"));
    assert_eq!(params.len(), 3);
  }

  #[test]
  fn test_base_params_without_locale() {
    let params = base_params("static-eu", None, "tok");
    assert!(!params.contains_key("locale"));
    assert_eq!(params.len(), 2);
  }

  #[test]
  fn test_caller_keys_override_base() {
    let base = base_params("static-us", Some("en_US"), "tok");
    let filters = QueryParams::new()
      .with("locale", "de_DE")
      .with("_page", 2)
      .with("name.en_US", "Thunderfury, Blessed Blade of the Windseeker");

    let merged = filters.merged_over(&base);
    assert_eq!(merged.get("locale"), Some("de_DE"));
    assert_eq!(merged.get("namespace"), Some("static-us"));
    assert_eq!(merged.get("_page"), Some("2"));
    assert_eq!(merged.get("access_token"), Some("tok"));
    assert_eq!(merged.len(), 5);
  }

  #[test]
  fn test_from_hash_map_mixed_values() {
    let mut map = HashMap::new();
    map.insert("data.realms.slug", "illidan".to_string());
    map.insert("_pageSize", 100.to_string());

    let params = QueryParams::from(map);
    assert_eq!(params.get("data.realms.slug"), Some("illidan"));
    assert_eq!(params.get("_pageSize"), Some("100"));
  }

  #[test]
  fn test_collect_from_pairs() {
    let params: QueryParams = vec![("orderby", "id"), ("id", "[1,]")].into_iter().collect();
    let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["id", "orderby"]);
  }
}
