//! Favorite recipes: an ordered id index plus an id -> recipe snapshot map.
//!
//! Both keys are loaded into one [`FavoritesRecord`] and written back from it
//! together, so every mutation updates the index and the snapshots as a unit.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{KeyValueStore, STORAGE_FAVORITES, STORAGE_SAVED_RECIPES};
use crate::models::Recipe;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesRecord {
    /// Favorite ids in insertion order.
    index: Vec<String>,
    /// Snapshots keyed by recipe id.
    recipes: BTreeMap<String, Recipe>,
}

impl FavoritesRecord {
    /// Load both keys. Missing or corrupt data reads as empty.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let index: Vec<String> = store.load(STORAGE_FAVORITES).unwrap_or_default();
        let recipes: BTreeMap<String, Recipe> =
            store.load(STORAGE_SAVED_RECIPES).unwrap_or_default();
        debug!(ids = index.len(), snapshots = recipes.len(), "Loaded favorites");
        Self { index, recipes }
    }

    /// Write the index and the snapshot map in the same turn.
    pub fn save<S: KeyValueStore>(&self, store: &S) {
        store.save(STORAGE_FAVORITES, &self.index);
        store.save(STORAGE_SAVED_RECIPES, &self.recipes);
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.index.iter().any(|id| id == recipe_id)
    }

    /// Flip the favorite state of `recipe`, returning the new state.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        let id = &recipe.recipe_id;
        if self.contains(id) {
            self.index.retain(|fid| fid != id);
            self.recipes.remove(id);
            false
        } else {
            self.index.push(id.clone());
            self.recipes.insert(id.clone(), recipe.clone());
            true
        }
    }

    #[cfg(test)]
    pub fn ids(&self) -> &[String] {
        &self.index
    }

    /// Index order mapped through the snapshots. Ids without a snapshot are
    /// skipped.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.index
            .iter()
            .filter_map(|id| self.recipes.get(id).cloned())
            .collect()
    }
}

/// Whether `recipe_id` is in the favorites index.
pub fn is_favorite<S: KeyValueStore>(store: &S, recipe_id: &str) -> bool {
    FavoritesRecord::load(store).contains(recipe_id)
}

/// Add or remove `recipe` from favorites and persist. Returns the new state.
pub fn toggle_favorite<S: KeyValueStore>(store: &S, recipe: &Recipe) -> bool {
    let mut record = FavoritesRecord::load(store);
    let favorited = record.toggle(recipe);
    record.save(store);
    info!(recipe_id = %recipe.recipe_id, favorited, "Toggled favorite");
    favorited
}

/// Saved recipes in the order they were favorited.
pub fn list_favorites<S: KeyValueStore>(store: &S) -> Vec<Recipe> {
    FavoritesRecord::load(store).recipes()
}
