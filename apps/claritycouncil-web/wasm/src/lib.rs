//! WASM bindings for the Clarity Council front end
//!
//! All UI state is held in Rust; JavaScript only wires DOM events to the
//! controllers and renders the snapshots they return.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { UploadController } from './pkg/claritycouncil_wasm.js';
//!
//! await init();
//!
//! const upload = new UploadController();
//! input.onchange = (e) => render(upload.selectFile(e.target.files[0]));
//! area.ondrop = (e) => render(upload.onDrop(e));
//! button.onclick = async () => render(await upload.submit(ANALYZE_URL));
//! ```

pub mod auth;
pub mod header;
pub mod upload;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use auth::{LoginController, SignupController};
pub use header::{scroll_to_section, HeaderController};
pub use upload::{UploadController, DEFAULT_ANALYZE_ENDPOINT};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_default_endpoint_is_analyze_route() {
        assert!(DEFAULT_ANALYZE_ENDPOINT.ends_with("/analyze"));
    }
}
