//! Meal tracker entry point
//!
//! Wires DOM events to the registry and renderer. The wasm build is the real
//! app (serve with `trunk`); the native build is a stub.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, MouseEvent};

    use meal_tracker::registry::MealRegistry;
    use meal_tracker::ui::{Ui, meal_id_from_dom, selectors};

    /// App instance holding the registry and the renderer
    struct App {
        registry: MealRegistry,
        ui: Ui,
    }

    impl App {
        fn new() -> Self {
            Self {
                registry: MealRegistry::load(),
                ui: Ui::new(),
            }
        }

        /// Render the loaded list and put the form in add mode
        fn init_view(&self) {
            self.ui.render_list(&self.registry.snapshot());
            self.ui.reset_form();
        }

        /// Add from the form; an invalid form is a silent no-op
        fn handle_add(&mut self) {
            if let Some((name, calories)) = self.ui.read_form().validate() {
                let snapshot = self.registry.add(name, calories);
                self.ui.render_list(&snapshot);
                self.ui.reset_form();
            }
        }

        /// Stage the clicked meal for editing
        fn handle_edit_request(&mut self, id: u32) {
            if let Some(meal) = self.registry.begin_edit(id) {
                self.ui.show_edit_form(&meal);
            }
        }

        fn handle_update(&mut self) {
            if let Some((name, calories)) = self.ui.read_form().validate() {
                let snapshot = self.registry.update(name, calories);
                self.ui.render_list(&snapshot);
                self.ui.reset_form();
            }
        }

        fn handle_delete(&mut self) {
            let snapshot = self.registry.delete();
            self.ui.render_list(&snapshot);
            self.ui.reset_form();
        }

        fn handle_back(&mut self) {
            self.registry.cancel_edit();
            self.ui.reset_form();
        }

        fn handle_clear_all(&mut self) {
            self.registry.clear_all();
            self.ui.render_list(&self.registry.snapshot());
            self.ui.reset_form();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Meal tracker starting...");

        let app = Rc::new(RefCell::new(App::new()));
        app.borrow().init_view();

        setup_form_buttons(app.clone());
        setup_list_delegation(app.clone());

        log::info!("Meal tracker running!");
    }

    /// Register a click handler on the element with the given id
    fn bind_click(id: &str, closure: Closure<dyn FnMut(MouseEvent)>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    fn setup_form_buttons(app: Rc<RefCell<App>>) {
        // Add
        {
            let app = app.clone();
            bind_click(
                selectors::ADD_BTN,
                Closure::new(move |event: MouseEvent| {
                    event.prevent_default();
                    app.borrow_mut().handle_add();
                }),
            );
        }

        // Update
        {
            let app = app.clone();
            bind_click(
                selectors::UPDATE_BTN,
                Closure::new(move |event: MouseEvent| {
                    event.prevent_default();
                    app.borrow_mut().handle_update();
                }),
            );
        }

        // Delete
        {
            let app = app.clone();
            bind_click(
                selectors::DELETE_BTN,
                Closure::new(move |event: MouseEvent| {
                    event.prevent_default();
                    app.borrow_mut().handle_delete();
                }),
            );
        }

        // Back (cancel edit)
        {
            let app = app.clone();
            bind_click(
                selectors::BACK_BTN,
                Closure::new(move |event: MouseEvent| {
                    event.prevent_default();
                    app.borrow_mut().handle_back();
                }),
            );
        }

        // Clear all
        bind_click(
            selectors::CLEAR_BTN,
            Closure::new(move |event: MouseEvent| {
                event.prevent_default();
                app.borrow_mut().handle_clear_all();
            }),
        );
    }

    /// Delegated click listener on the list container: only clicks on the
    /// per-row edit affordance count as edit requests
    fn setup_list_delegation(app: Rc<RefCell<App>>) {
        bind_click(
            selectors::MEAL_LIST,
            Closure::new(move |event: MouseEvent| {
                event.prevent_default();
                let target: Option<Element> = event.target().and_then(|t| t.dyn_into().ok());
                let Some(target) = target else { return };
                if !target.class_list().contains(selectors::EDIT_ICON_CLASS) {
                    return;
                }
                let Some(row) = target.parent_element() else { return };
                if let Some(id) = meal_id_from_dom(&row.id()) {
                    app.borrow_mut().handle_edit_request(id);
                }
            }),
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Meal tracker (native) starting...");
    log::info!("The tracker is a browser app - run with `trunk serve` for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
