//! WASM bindings for the header: scroll styling and section navigation
//!
//! The window scroll listener feeds positions into the core header state and
//! only notifies JavaScript on transitions, so the page repaints the header
//! class once per crossing instead of once per scroll tick.

use std::cell::RefCell;
use std::rc::Rc;

use claritycouncil_core::header::HeaderState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[wasm_bindgen]
#[derive(Default)]
pub struct HeaderController {
    state: Rc<RefCell<HeaderState>>,
}

#[wasm_bindgen]
impl HeaderController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = isScrolled)]
    pub fn is_scrolled(&self) -> bool {
        self.state.borrow().is_scrolled()
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.state.borrow().is_menu_open()
    }

    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&self) -> bool {
        self.state.borrow_mut().toggle_menu()
    }

    #[wasm_bindgen(js_name = closeMenu)]
    pub fn close_menu(&self) {
        self.state.borrow_mut().close_menu();
    }

    /// Attach the window scroll listener.
    ///
    /// Callback signature: (scrolled: boolean) => void, invoked only when
    /// the flag flips. The closure is leaked on purpose; it lives as long
    /// as the page.
    pub fn attach(&self, callback: js_sys::Function) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let state = Rc::clone(&self.state);

        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let y = window.scroll_y().unwrap_or(0.0);
            let mut state = state.borrow_mut();
            if state.observe_scroll(y) {
                let _ = callback.call1(&JsValue::NULL, &JsValue::from(state.is_scrolled()));
            }
        });

        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();

        Ok(())
    }

    /// Navigate to a page section: close the mobile menu, then smooth-scroll
    /// the element into view. Returns false when no such element exists.
    #[wasm_bindgen(js_name = navigateToSection)]
    pub fn navigate_to_section(&self, section_id: &str) -> bool {
        self.state.borrow_mut().close_menu();
        scroll_to_section(section_id)
    }
}

/// Smooth-scroll the element with the given id into view.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };

    match document.get_element_by_id(section_id) {
        Some(element) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        None => false,
    }
}
