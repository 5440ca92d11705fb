//! LocalStorage persistence for the meal list
//!
//! One key holds the whole list as a JSON array of `{id, name, calories}`
//! records. A blob that is missing or fails to parse reads as an empty list.

use crate::registry::Meal;

/// LocalStorage gateway for the meal list
#[derive(Debug, Clone, Copy, Default)]
pub struct MealStore;

impl MealStore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "meal_tracker_meals";

    pub fn new() -> Self {
        Self
    }

    /// Load the stored meal list from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(&self) -> Vec<Meal> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let meals = decode(&json);
                log::info!("Loaded {} meals", meals.len());
                return meals;
            }
        }

        log::info!("No stored meals, starting fresh");
        Vec::new()
    }

    /// Save the meal list to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, meals: &[Meal]) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Some(json) = encode(meals) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Meals saved ({} entries)", meals.len());
            }
        }
    }

    /// Remove the stored meal list (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn clear(&self) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(Self::STORAGE_KEY);
            log::info!("Stored meals cleared");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&self) -> Vec<Meal> {
        Vec::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, _meals: &[Meal]) {
        // No-op for native
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear(&self) {
        // No-op for native
    }
}

/// Serialize the meal list for storage
pub fn encode(meals: &[Meal]) -> Option<String> {
    serde_json::to_string(meals).ok()
}

/// Parse a stored blob; anything unreadable is an empty list
pub fn decode(json: &str) -> Vec<Meal> {
    serde_json::from_str(json).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Meal> {
        vec![
            Meal {
                id: 0,
                name: "Soup".to_string(),
                calories: 120,
            },
            Meal {
                id: 1,
                name: "Salad".to_string(),
                calories: 0,
            },
        ]
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let meals = sample();
        let first = encode(&meals).unwrap();
        let second = encode(&decode(&first)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_preserves_fields() {
        let json = encode(&sample()).unwrap();
        let meals = decode(&json);
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].id, 0);
        assert_eq!(meals[0].name, "Soup");
        assert_eq!(meals[1].calories, 0);
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode("not json").is_empty());
        assert!(decode("").is_empty());
        assert!(decode("{\"id\":1}").is_empty());
    }
}
