//! WASM bindings for the document upload widget
//!
//! Wraps the core upload session and performs the one multipart POST to the
//! analysis endpoint. State mutations happen in sync borrows on either side
//! of the single await point, so the exported async `submit` can take `&self`.

use std::cell::RefCell;
use std::rc::Rc;

use claritycouncil_core::error::TransportError;
use claritycouncil_core::upload::{AnalysisResult, UploadSession};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, FormData, Request, RequestInit, RequestMode, Response};

/// Default analysis endpoint; callers pass their own in production.
pub const DEFAULT_ANALYZE_ENDPOINT: &str = "http://localhost:8000/analyze";

/// Controller for one upload widget instance.
///
/// The core session holds the file descriptor; the live `web_sys::File`
/// handle is kept beside it for the eventual upload. Both live behind
/// `Rc<RefCell<..>>` because the browser runtime is single-threaded and the
/// async submit needs to mutate around its suspension point.
#[wasm_bindgen]
pub struct UploadController {
    session: Rc<RefCell<UploadSession>>,
    file: Rc<RefCell<Option<File>>>,
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UploadController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(UploadSession::new())),
            file: Rc::new(RefCell::new(None)),
        }
    }

    /// Handle a file chosen through the file input.
    /// Returns the updated snapshot for rendering.
    #[wasm_bindgen(js_name = selectFile)]
    pub fn select_file(&self, file: File) -> Result<JsValue, JsValue> {
        self.accept_candidate(file);
        self.snapshot()
    }

    /// Clear the selection and any rendered result.
    #[wasm_bindgen(js_name = clearFile)]
    pub fn clear_file(&self) -> Result<JsValue, JsValue> {
        self.session.borrow_mut().clear_file();
        self.file.borrow_mut().take();
        self.snapshot()
    }

    #[wasm_bindgen(js_name = onDragEnter)]
    pub fn on_drag_enter(&self, event: &DragEvent) {
        event.prevent_default();
        self.session.borrow_mut().drag_enter();
    }

    #[wasm_bindgen(js_name = onDragLeave)]
    pub fn on_drag_leave(&self, event: &DragEvent) {
        event.prevent_default();
        self.session.borrow_mut().drag_leave();
    }

    /// Required so the browser allows the drop; no state change.
    #[wasm_bindgen(js_name = onDragOver)]
    pub fn on_drag_over(&self, event: &DragEvent) {
        event.prevent_default();
    }

    /// Handle a drop; the payload goes through the same validation path as
    /// a regular selection.
    #[wasm_bindgen(js_name = onDrop)]
    pub fn on_drop(&self, event: &DragEvent) -> Result<JsValue, JsValue> {
        event.prevent_default();

        let dropped = event
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));

        match dropped {
            Some(file) => {
                let accepted = self.session.borrow_mut().drop_file(
                    &file.name(),
                    file.size() as u64,
                    &file.type_(),
                );
                *self.file.borrow_mut() = accepted.then_some(file);
            }
            // Empty drop: just end the drag.
            None => self.session.borrow_mut().drag_leave(),
        }
        self.snapshot()
    }

    /// Whether the analyze button should be enabled.
    #[wasm_bindgen(js_name = canSubmit)]
    pub fn can_submit(&self) -> bool {
        let session = self.session.borrow();
        session.file().is_some()
            && session.state() != claritycouncil_core::SubmissionState::Submitting
    }

    /// Submit the selected document to the analysis endpoint.
    ///
    /// One multipart POST with a single part named `file`; no retries, no
    /// timeout, no cancellation. Duplicate calls while a submission is in
    /// flight are no-ops. The session always leaves the Submitting state
    /// when this resolves, whichever way the transport went.
    pub async fn submit(&self, endpoint: &str) -> Result<JsValue, JsValue> {
        let file = {
            let mut session = self.session.borrow_mut();
            if session.begin_submission().is_err() {
                // Rejected locally (no file, or already in flight): the
                // snapshot carries any message; nothing was sent.
                drop(session);
                return self.snapshot();
            }
            self.file.borrow().clone()
        };

        let outcome = match file {
            Some(file) => post_document(endpoint, &file).await,
            // Descriptor without a handle should not happen; treat as a
            // failed attempt rather than leaving the state stuck.
            None => Err(TransportError::Network("file handle missing".to_string())),
        };

        if let Err(ref cause) = outcome {
            web_sys::console::error_1(&format!("analysis request failed: {}", cause).into());
        }

        self.session.borrow_mut().finish_submission(outcome);
        self.snapshot()
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.borrow().snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl UploadController {
    /// Funnel a candidate through core validation, keeping the live handle
    /// only when it was accepted.
    fn accept_candidate(&self, file: File) {
        let accepted = self.session.borrow_mut().select_file(
            &file.name(),
            file.size() as u64,
            &file.type_(),
        );
        *self.file.borrow_mut() = accepted.then_some(file);
    }
}

/// POST the document as `multipart/form-data` and decode the JSON body.
///
/// The browser sets the multipart boundary itself, so no Content-Type header
/// is written here.
async fn post_document(endpoint: &str, file: &File) -> Result<AnalysisResult, TransportError> {
    let form = FormData::new().map_err(js_network_err)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_network_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_network_err)?;

    let window = web_sys::window()
        .ok_or_else(|| TransportError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_network_err)?;
    let response: Response = response.dyn_into().map_err(js_network_err)?;

    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }

    let body = JsFuture::from(response.json().map_err(js_malformed_err)?)
        .await
        .map_err(js_malformed_err)?;

    serde_wasm_bindgen::from_value(body)
        .map_err(|e| TransportError::MalformedBody(e.to_string()))
}

fn js_network_err(e: JsValue) -> TransportError {
    TransportError::Network(js_error_text(&e))
}

fn js_malformed_err(e: JsValue) -> TransportError {
    TransportError::MalformedBody(js_error_text(&e))
}

fn js_error_text(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
