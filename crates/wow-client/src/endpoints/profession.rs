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

use super::{impl_endpoint_base, EndpointBase, EndpointContext, RequestOptions};
use crate::params::QueryParams;
use serde_json::Value;
use tracing::instrument;
use wow_core::{Endpoint, Result};

/// Profession, skill tier and recipe endpoints (static namespace)
#[derive(Debug, Clone)]
pub struct ProfessionEndpoints {
  context: EndpointContext,
  options: RequestOptions,
}

impl ProfessionEndpoints {
  /// List all professions with their names and ids
  #[instrument(skip(self))]
  pub async fn index(&self) -> Result<Value> {
    self.context().get(Endpoint::ProfessionIndex, &[], self.options(), None).await
  }

  /// Get a profession, including its skill tiers (Classic, Burning Crusade, ...)
  #[instrument(skip(self))]
  pub async fn profession(&self, profession_id: u64) -> Result<Value> {
    self
      .context()
      .get(Endpoint::Profession, &[("profession_id", profession_id)], self.options(), None)
      .await
  }

  /// Get a skill tier: its recipe categories and the recipes (id, name) in them
  ///
  /// # Arguments
  ///
  /// * `profession_id` - Found with [`ProfessionEndpoints::index`]
  /// * `skill_tier_id` - Found with [`ProfessionEndpoints::profession`]
  #[instrument(skip(self))]
  pub async fn skill_tier(&self, profession_id: u64, skill_tier_id: u64) -> Result<Value> {
    self
      .context()
      .get(
        Endpoint::ProfessionSkillTier,
        &[("profession_id", profession_id), ("skill_tier_id", skill_tier_id)],
        self.options(),
        None,
      )
      .await
  }

  /// Get a profession's media document
  #[instrument(skip(self))]
  pub async fn media(&self, profession_id: u64) -> Result<Value> {
    self
      .context()
      .get(Endpoint::ProfessionMedia, &[("profession_id", profession_id)], self.options(), None)
      .await
  }

  /// Download a profession's icon image
  #[instrument(skip(self))]
  pub async fn icon(&self, profession_id: u64) -> Result<Vec<u8>> {
    self
      .context()
      .icon(Endpoint::ProfessionMedia, &[("profession_id", profession_id)], self.options())
      .await
  }

  /// Get a recipe's details
  #[instrument(skip(self))]
  pub async fn recipe(&self, recipe_id: u64) -> Result<Value> {
    self.context().get(Endpoint::Recipe, &[("recipe_id", recipe_id)], self.options(), None).await
  }

  /// Get a recipe's media document
  #[instrument(skip(self))]
  pub async fn recipe_media(&self, recipe_id: u64) -> Result<Value> {
    self
      .context()
      .get(Endpoint::RecipeMedia, &[("recipe_id", recipe_id)], self.options(), None)
      .await
  }

  /// Download a recipe's icon image
  #[instrument(skip(self))]
  pub async fn recipe_icon(&self, recipe_id: u64) -> Result<Vec<u8>> {
    self.context().icon(Endpoint::RecipeMedia, &[("recipe_id", recipe_id)], self.options()).await
  }
}

impl_endpoint_base!(ProfessionEndpoints);
