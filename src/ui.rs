//! DOM rendering for the meal list and the entry form
//!
//! The renderer keeps no state of its own: it reads the form fields, rebuilds
//! the list markup from a registry snapshot, and toggles which form buttons
//! are visible. Markup building and id parsing are plain functions so they
//! run on the host too.

use crate::registry::Meal;

/// Element ids for every control on the page
pub mod selectors {
    pub const MEAL_LIST: &str = "meal-list";
    pub const MEAL_INPUT: &str = "meal-name";
    pub const CALORIES_INPUT: &str = "meal-calories";
    pub const TOTAL_CALORIES: &str = "total-calories";
    pub const ADD_BTN: &str = "add-btn";
    pub const UPDATE_BTN: &str = "update-btn";
    pub const DELETE_BTN: &str = "delete-btn";
    pub const BACK_BTN: &str = "back-btn";
    pub const CLEAR_BTN: &str = "clear-btn";
    /// Wrapper rows toggled between add mode and edit mode
    pub const ADD_CONTROLS: &str = "add-controls";
    pub const EDIT_CONTROLS: &str = "edit-controls";
    /// Class marking the per-row edit affordance
    pub const EDIT_ICON_CLASS: &str = "meal-edit-btn";
}

/// Raw form field values as read from the DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    /// `None` when the calories field is empty or not a number
    pub calories: Option<u32>,
}

impl FormInput {
    /// A submission is valid when the trimmed name is non-empty and the
    /// calories field parsed. Presence is decided by the parse, so 0 is a
    /// valid value.
    pub fn validate(&self) -> Option<(String, u32)> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), self.calories?))
    }
}

/// Parse the calories field; empty or non-numeric input is `None`
pub fn parse_calories(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// DOM id for a meal's list row
pub fn item_dom_id(meal_id: u32) -> String {
    format!("item-{meal_id}")
}

/// Recover the meal id from a row's DOM id
pub fn meal_id_from_dom(dom_id: &str) -> Option<u32> {
    dom_id.strip_prefix("item-")?.parse().ok()
}

/// Build the list markup, one row per meal
pub fn render_rows(meals: &[Meal]) -> String {
    let mut html = String::new();
    for meal in meals {
        html.push_str(&format!(
            "<li class=\"collection-item\" id=\"{}\">\
             <strong class=\"meal-name\">{}</strong>\
             <em class=\"meal-calories\">{} calories</em>\
             <i class=\"{}\">edit</i>\
             </li>",
            item_dom_id(meal.id),
            meal.name,
            meal.calories,
            selectors::EDIT_ICON_CLASS,
        ));
    }
    html
}

#[cfg(target_arch = "wasm32")]
pub use dom::Ui;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlInputElement};

    use super::*;
    use crate::registry::Snapshot;

    /// Handle on the page's form and list elements
    pub struct Ui {
        document: Document,
    }

    impl Ui {
        pub fn new() -> Self {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");
            Self { document }
        }

        fn element(&self, id: &str) -> Option<Element> {
            self.document.get_element_by_id(id)
        }

        fn input(&self, id: &str) -> Option<HtmlInputElement> {
            self.element(id).and_then(|el| el.dyn_into().ok())
        }

        /// Read the current form field values
        pub fn read_form(&self) -> FormInput {
            let name = self
                .input(selectors::MEAL_INPUT)
                .map(|i| i.value())
                .unwrap_or_default();
            let calories = self
                .input(selectors::CALORIES_INPUT)
                .and_then(|i| parse_calories(&i.value()));
            FormInput { name, calories }
        }

        /// Rebuild the list markup and the total display; the list container
        /// is hidden while the list is empty
        pub fn render_list(&self, snapshot: &Snapshot) {
            if let Some(list) = self.element(selectors::MEAL_LIST) {
                list.set_inner_html(&render_rows(&snapshot.meals));
                if snapshot.meals.is_empty() {
                    let _ = list.class_list().add_1("hidden");
                } else {
                    let _ = list.class_list().remove_1("hidden");
                }
            }
            if let Some(total) = self.element(selectors::TOTAL_CALORIES) {
                total.set_text_content(Some(&snapshot.total_calories.to_string()));
            }
        }

        /// Populate the form with the staged meal and switch to edit buttons
        pub fn show_edit_form(&self, meal: &Meal) {
            if let Some(input) = self.input(selectors::MEAL_INPUT) {
                input.set_value(&meal.name);
            }
            if let Some(input) = self.input(selectors::CALORIES_INPUT) {
                input.set_value(&meal.calories.to_string());
            }
            self.toggle_buttons(true);
        }

        /// Clear the form and switch back to the add button
        pub fn reset_form(&self) {
            if let Some(input) = self.input(selectors::MEAL_INPUT) {
                input.set_value("");
            }
            if let Some(input) = self.input(selectors::CALORIES_INPUT) {
                input.set_value("");
            }
            self.toggle_buttons(false);
        }

        fn toggle_buttons(&self, edit: bool) {
            let (hide, show) = if edit {
                (selectors::ADD_CONTROLS, selectors::EDIT_CONTROLS)
            } else {
                (selectors::EDIT_CONTROLS, selectors::ADD_CONTROLS)
            };
            if let Some(el) = self.element(hide) {
                let _ = el.class_list().add_1("hidden");
            }
            if let Some(el) = self.element(show) {
                let _ = el.class_list().remove_1("hidden");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calories_zero_is_present() {
        assert_eq!(parse_calories("0"), Some(0));
        assert_eq!(parse_calories(" 120 "), Some(120));
        assert_eq!(parse_calories(""), None);
        assert_eq!(parse_calories("abc"), None);
        assert_eq!(parse_calories("-5"), None);
    }

    #[test]
    fn test_validate_requires_name_and_calories() {
        let ok = FormInput {
            name: "Soup".to_string(),
            calories: Some(120),
        };
        assert_eq!(ok.validate(), Some(("Soup".to_string(), 120)));

        let zero = FormInput {
            name: "Water".to_string(),
            calories: Some(0),
        };
        assert_eq!(zero.validate(), Some(("Water".to_string(), 0)));

        let no_name = FormInput {
            name: "   ".to_string(),
            calories: Some(120),
        };
        assert_eq!(no_name.validate(), None);

        let no_calories = FormInput {
            name: "Soup".to_string(),
            calories: None,
        };
        assert_eq!(no_calories.validate(), None);
    }

    #[test]
    fn test_dom_id_round_trip() {
        assert_eq!(item_dom_id(12), "item-12");
        assert_eq!(meal_id_from_dom("item-12"), Some(12));
        assert_eq!(meal_id_from_dom("item-0"), Some(0));
        assert_eq!(meal_id_from_dom("item-"), None);
        assert_eq!(meal_id_from_dom("row-3"), None);
    }

    #[test]
    fn test_render_rows_tags_each_meal() {
        let meals = vec![
            Meal {
                id: 0,
                name: "Soup".to_string(),
                calories: 120,
            },
            Meal {
                id: 10,
                name: "Salad".to_string(),
                calories: 0,
            },
        ];
        let html = render_rows(&meals);
        assert!(html.contains("id=\"item-0\""));
        assert!(html.contains("id=\"item-10\""));
        assert!(html.contains("Soup"));
        assert!(html.contains("0 calories"));
        assert_eq!(html.matches(selectors::EDIT_ICON_CLASS).count(), 2);
    }

    #[test]
    fn test_render_rows_empty_list() {
        assert!(render_rows(&[]).is_empty());
    }
}
