//! WASM bindings for the login and signup forms
//!
//! Submission is stubbed pending the account backend: the forms validate
//! locally, guard against duplicate submits, and resolve with a canned
//! outcome. Only the email is ever logged.

use std::cell::RefCell;

use claritycouncil_core::auth::{LoginForm, SignupForm};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Default)]
pub struct LoginController {
    form: RefCell<LoginForm>,
}

#[wasm_bindgen]
impl LoginController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = setEmail)]
    pub fn set_email(&self, email: &str) {
        self.form.borrow_mut().set_email(email);
    }

    #[wasm_bindgen(js_name = setPassword)]
    pub fn set_password(&self, password: &str) {
        self.form.borrow_mut().set_password(password);
    }

    #[wasm_bindgen(js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.form.borrow().is_submitting()
    }

    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        self.form.borrow().error_message().map(str::to_string)
    }

    /// Validate and resolve the stubbed submission.
    pub fn submit(&self) -> Result<JsValue, JsValue> {
        let mut form = self.form.borrow_mut();
        if !form.begin_submit() {
            return Err(JsValue::from_str(
                form.error_message().unwrap_or("Submission rejected"),
            ));
        }

        web_sys::console::log_1(&format!("login requested for {}", form.email()).into());

        let outcome = form.finish_submit();
        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[wasm_bindgen]
#[derive(Default)]
pub struct SignupController {
    form: RefCell<SignupForm>,
}

#[wasm_bindgen]
impl SignupController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&self, name: &str) {
        self.form.borrow_mut().set_name(name);
    }

    #[wasm_bindgen(js_name = setEmail)]
    pub fn set_email(&self, email: &str) {
        self.form.borrow_mut().set_email(email);
    }

    #[wasm_bindgen(js_name = setPassword)]
    pub fn set_password(&self, password: &str) {
        self.form.borrow_mut().set_password(password);
    }

    #[wasm_bindgen(js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.form.borrow().is_submitting()
    }

    #[wasm_bindgen(js_name = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        self.form.borrow().error_message().map(str::to_string)
    }

    /// Validate and resolve the stubbed submission.
    pub fn submit(&self) -> Result<JsValue, JsValue> {
        let mut form = self.form.borrow_mut();
        if !form.begin_submit() {
            return Err(JsValue::from_str(
                form.error_message().unwrap_or("Submission rejected"),
            ));
        }

        web_sys::console::log_1(&format!("signup requested for {}", form.email()).into());

        let outcome = form.finish_submit();
        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
