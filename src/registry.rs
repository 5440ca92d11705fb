//! Meal registry - the canonical in-memory meal list
//!
//! Owns the list, the edit selection, and the id sequence. Every mutation is
//! written through to the store before it returns, so the stored blob and the
//! in-memory list never diverge.

use serde::{Deserialize, Serialize};

use crate::ids::IdSource;
use crate::storage::MealStore;

/// A single meal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique within the current list, assigned at creation, never changed
    pub id: u32,
    pub name: String,
    pub calories: u32,
}

/// By-value copy of the list plus its aggregate total, handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub meals: Vec<Meal>,
    pub total_calories: u32,
}

/// Registry holding the meal list and the active edit selection
#[derive(Debug)]
pub struct MealRegistry {
    meals: Vec<Meal>,
    /// Id of the meal staged for editing, if any
    active: Option<u32>,
    ids: IdSource,
    store: MealStore,
}

impl MealRegistry {
    /// Build the registry from whatever the store holds
    pub fn load() -> Self {
        let store = MealStore::new();
        Self::from_saved(store.load(), store)
    }

    /// Seed the id sequence past the largest stored id so new meals cannot
    /// collide with persisted ones
    fn from_saved(meals: Vec<Meal>, store: MealStore) -> Self {
        let next = meals.iter().map(|m| m.id + 1).max().unwrap_or(0);
        Self {
            meals,
            active: None,
            ids: IdSource::starting_at(next),
            store,
        }
    }

    /// Read-only copy of the list plus the recomputed total
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            meals: self.meals.clone(),
            total_calories: self.total_calories(),
        }
    }

    fn total_calories(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    /// Append a new meal and persist
    pub fn add(&mut self, name: String, calories: u32) -> Snapshot {
        let id = self.ids.next();
        self.meals.push(Meal { id, name, calories });
        self.store.save(&self.meals);
        self.snapshot()
    }

    /// Stage the meal with the given id for editing and return a copy.
    /// Leaves the selection untouched when no such meal exists.
    pub fn begin_edit(&mut self, id: u32) -> Option<Meal> {
        let meal = self.meals.iter().find(|m| m.id == id)?.clone();
        self.active = Some(id);
        Some(meal)
    }

    /// Replace the staged meal's name and calories (id unchanged), clear the
    /// selection, persist. Without a selection this is a no-op.
    pub fn update(&mut self, name: String, calories: u32) -> Snapshot {
        let Some(id) = self.active.take() else {
            log::warn!("update called with no meal staged for edit");
            return self.snapshot();
        };
        if let Some(meal) = self.meals.iter_mut().find(|m| m.id == id) {
            meal.name = name;
            meal.calories = calories;
            self.store.save(&self.meals);
        }
        self.snapshot()
    }

    /// Remove the staged meal, clear the selection, persist. Without a
    /// selection this is a no-op.
    pub fn delete(&mut self) -> Snapshot {
        let Some(id) = self.active.take() else {
            log::warn!("delete called with no meal staged for edit");
            return self.snapshot();
        };
        self.meals.retain(|m| m.id != id);
        self.store.save(&self.meals);
        self.snapshot()
    }

    /// Empty the list, drop the selection, wipe storage, restart ids at 0
    pub fn clear_all(&mut self) {
        self.meals.clear();
        self.active = None;
        self.store.clear();
        self.ids.reset();
    }

    /// Drop the selection without touching the list
    pub fn cancel_edit(&mut self) {
        self.active = None;
    }

    /// Whether a meal is currently staged for editing
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }
}
