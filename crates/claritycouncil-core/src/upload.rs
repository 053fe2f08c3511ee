//! Document upload session
//!
//! Owns the lifecycle of one user-initiated submission: file selection →
//! validation → transmission → result → reset. All state lives here; the
//! wasm layer only forwards DOM events and performs the actual HTTP call
//! between `begin_submission` and `finish_submission`.

use serde::{Deserialize, Serialize};

use crate::error::{TransportError, UploadError};

/// The single accepted MIME type.
pub const ACCEPTED_MIME_TYPE: &str = "application/pdf";

/// Shown when a non-PDF file is selected or dropped.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Please upload a PDF document";

/// Shown when submit is attempted with no file selected.
pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";

/// Shown for every transport or service failure.
pub const SUBMISSION_FAILED_MESSAGE: &str = "An error occurred while processing the document.";

/// Metadata for the user-chosen candidate document.
///
/// The session only holds the descriptor; the wasm layer keeps the live file
/// handle beside it for the eventual upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    pub name: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl SelectedFile {
    /// Human-readable size for the file preview ("2.50 MB" style).
    pub fn size_display(&self) -> String {
        format_bytes(self.size_bytes)
    }
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Whatever the analysis service returned for a successful submission.
///
/// The three named fields drive the results panel; anything else the service
/// sends is preserved in `extra` and ignored for display. Absent fields
/// simply suppress the corresponding section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(
        default,
        rename = "issuesDocUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub issues_doc_url: Option<String>,
    #[serde(
        default,
        rename = "modifiedDocUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_doc_url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Serializable view of the session for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSnapshot {
    pub state: SubmissionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<SelectedFile>,
    #[serde(rename = "sizeDisplay", skip_serializing_if = "Option::is_none")]
    pub size_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    pub dragging: bool,
}

/// State machine for one document submission.
#[derive(Debug, Default)]
pub struct UploadSession {
    file: Option<SelectedFile>,
    state: SubmissionState,
    result: Option<AnalysisResult>,
    error: Option<String>,
    dragging: bool,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Handle a file selection from the input or a drop.
    ///
    /// A PDF replaces any previous selection, clears the error and any prior
    /// result, and resets the attempt to Idle. Anything else clears the
    /// selection and sets the fixed error; a previously rendered result is
    /// left untouched so the user does not lose it to a mis-drop.
    ///
    /// Returns whether the candidate was accepted.
    pub fn select_file(&mut self, name: &str, size_bytes: u64, mime_type: &str) -> bool {
        if mime_type == ACCEPTED_MIME_TYPE {
            self.file = Some(SelectedFile {
                name: name.to_string(),
                size_bytes,
                mime_type: mime_type.to_string(),
            });
            self.error = None;
            self.result = None;
            self.state = SubmissionState::Idle;
            true
        } else {
            self.file = None;
            self.error = Some(INVALID_FILE_TYPE_MESSAGE.to_string());
            false
        }
    }

    /// Clear the selection and any result. Idempotent.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.result = None;
    }

    /// Drag-lifecycle toggles; purely presentational.
    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// A drop ends the drag and funnels through the same validation path as
    /// a regular selection.
    pub fn drop_file(&mut self, name: &str, size_bytes: u64, mime_type: &str) -> bool {
        self.dragging = false;
        self.select_file(name, size_bytes, mime_type)
    }

    /// Enter the Submitting state if a submission may be issued.
    ///
    /// Rejected when no file is selected (surfaces the no-file message) or
    /// when an attempt is already in flight (guards against duplicate
    /// requests; touches nothing). The caller must not issue a network call
    /// unless this returns `Ok`.
    pub fn begin_submission(&mut self) -> Result<(), UploadError> {
        if self.state() == SubmissionState::Submitting {
            return Err(UploadError::AlreadySubmitting);
        }
        if self.file.is_none() {
            self.error = Some(NO_FILE_MESSAGE.to_string());
            return Err(UploadError::NoFileSelected);
        }
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Record the outcome of the transport call.
    ///
    /// Must be invoked on every path after `begin_submission` succeeded,
    /// success or failure, so the session never stays stuck in Submitting.
    pub fn finish_submission(&mut self, outcome: Result<AnalysisResult, TransportError>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.state = SubmissionState::Succeeded;
            }
            Err(_) => {
                self.result = None;
                self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
                self.state = SubmissionState::Failed;
            }
        }
    }

    /// Current view of the session for rendering.
    pub fn snapshot(&self) -> UploadSnapshot {
        UploadSnapshot {
            state: self.state(),
            file: self.file.clone(),
            size_display: self.file.as_ref().map(SelectedFile::size_display),
            error: self.error.clone(),
            result: self.result.clone(),
            dragging: self.dragging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ok_result(summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = UploadSession::new();
        assert_eq!(session.state(), SubmissionState::Idle);
        assert!(session.file().is_none());
        assert!(session.result().is_none());
        assert!(session.error_message().is_none());
        assert!(!session.is_dragging());
    }

    #[test]
    fn select_pdf_stores_file_and_clears_error() {
        let mut session = UploadSession::new();
        session.select_file("junk.exe", 10, "application/octet-stream");

        assert!(session.select_file("lease.pdf", 2048, "application/pdf"));
        let file = session.file().unwrap();
        assert_eq!(file.name, "lease.pdf");
        assert_eq!(file.size_bytes, 2048);
        assert!(session.error_message().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn select_non_pdf_sets_fixed_error_and_clears_file() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");

        assert!(!session.select_file("photo.png", 512, "image/png"));
        assert!(session.file().is_none());
        assert_eq!(session.error_message(), Some(INVALID_FILE_TYPE_MESSAGE));
    }

    #[test]
    fn invalid_selection_retains_previous_result() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();
        session.finish_submission(Ok(ok_result("ok")));

        session.select_file("photo.png", 512, "image/png");
        assert_eq!(session.result().unwrap().summary.as_deref(), Some("ok"));
        assert_eq!(session.error_message(), Some(INVALID_FILE_TYPE_MESSAGE));
    }

    #[test]
    fn valid_selection_discards_previous_result_and_resets_state() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();
        session.finish_submission(Ok(ok_result("ok")));
        assert_eq!(session.state(), SubmissionState::Succeeded);

        session.select_file("contract.pdf", 4096, "application/pdf");
        assert!(session.result().is_none());
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn clear_file_is_unconditional_and_idempotent() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();
        session.finish_submission(Ok(ok_result("ok")));

        session.clear_file();
        assert!(session.file().is_none());
        assert!(session.result().is_none());

        session.clear_file();
        assert!(session.file().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn submit_without_file_is_rejected_without_state_change() {
        let mut session = UploadSession::new();
        let err = session.begin_submission().unwrap_err();
        assert_eq!(err, UploadError::NoFileSelected);
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.error_message(), Some(NO_FILE_MESSAGE));
    }

    #[test]
    fn reentrant_submit_is_rejected_while_submitting() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();

        let err = session.begin_submission().unwrap_err();
        assert_eq!(err, UploadError::AlreadySubmitting);
        assert_eq!(session.state(), SubmissionState::Submitting);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn successful_submission_stores_result() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();
        session.finish_submission(Ok(ok_result("ok")));

        assert_eq!(session.state(), SubmissionState::Succeeded);
        assert_eq!(session.result().unwrap().summary.as_deref(), Some("ok"));
        assert!(session.error_message().is_none());
    }

    #[test]
    fn failed_submission_sets_generic_error_and_allows_retry() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();
        session.finish_submission(Err(TransportError::Network("refused".into())));

        assert_eq!(session.state(), SubmissionState::Failed);
        assert_eq!(session.error_message(), Some(SUBMISSION_FAILED_MESSAGE));
        assert!(session.result().is_none());

        // Not stuck in Submitting: the next attempt is permitted.
        assert!(session.begin_submission().is_ok());
        assert_eq!(session.state(), SubmissionState::Submitting);
    }

    #[test]
    fn all_transport_causes_map_to_one_message() {
        for cause in [
            TransportError::Network("reset".into()),
            TransportError::Status(500),
            TransportError::MalformedBody("not json".into()),
        ] {
            let mut session = UploadSession::new();
            session.select_file("lease.pdf", 2048, "application/pdf");
            session.begin_submission().unwrap();
            session.finish_submission(Err(cause));
            assert_eq!(session.error_message(), Some(SUBMISSION_FAILED_MESSAGE));
        }
    }

    #[test]
    fn drop_ends_drag_and_validates() {
        let mut session = UploadSession::new();
        session.drag_enter();
        assert!(session.is_dragging());

        assert!(!session.drop_file("photo.png", 512, "image/png"));
        assert!(!session.is_dragging());
        assert_eq!(session.error_message(), Some(INVALID_FILE_TYPE_MESSAGE));

        session.drag_enter();
        assert!(session.drop_file("lease.pdf", 2048, "application/pdf"));
        assert!(!session.is_dragging());
    }

    #[test]
    fn accepted_drop_replaces_selection_and_discards_result() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2048, "application/pdf");
        session.begin_submission().unwrap();
        session.finish_submission(Ok(ok_result("ok")));

        session.drag_enter();
        assert!(session.drop_file("contract.pdf", 4096, "application/pdf"));
        assert!(!session.is_dragging());
        assert_eq!(session.file().unwrap().name, "contract.pdf");
        assert!(session.result().is_none());
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn drag_leave_resets_flag() {
        let mut session = UploadSession::new();
        session.drag_enter();
        session.drag_leave();
        assert!(!session.is_dragging());
    }

    #[test]
    fn analysis_result_ignores_unknown_fields() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"summary":"ok","issuesDocUrl":"https://docs.example/issues","confidence":0.9}"#,
        )
        .unwrap();
        assert_eq!(result.summary.as_deref(), Some("ok"));
        assert_eq!(
            result.issues_doc_url.as_deref(),
            Some("https://docs.example/issues")
        );
        assert!(result.modified_doc_url.is_none());
        assert!(result.extra.contains_key("confidence"));
    }

    #[test]
    fn snapshot_reflects_session() {
        let mut session = UploadSession::new();
        session.select_file("lease.pdf", 2621440, "application/pdf");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert_eq!(snapshot.file.unwrap().name, "lease.pdf");
        assert_eq!(snapshot.size_display.as_deref(), Some("2.50 MB"));
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn format_bytes_ranges() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(2621440), "2.50 MB");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn mime_type() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("application/pdf".to_string()),
                "[a-z]{2,12}/[a-z0-9.+-]{1,20}",
            ]
        }

        proptest! {
            /// Any candidate without the accepted MIME type leaves the
            /// session with no file and the fixed error message.
            #[test]
            fn non_pdf_never_selected(name in "[a-zA-Z0-9._ -]{1,40}", size in 0u64..1u64 << 32, mime in mime_type()) {
                let mut session = UploadSession::new();
                let accepted = session.select_file(&name, size, &mime);

                if mime == ACCEPTED_MIME_TYPE {
                    prop_assert!(accepted);
                    prop_assert_eq!(session.file().map(|f| f.name.as_str()), Some(name.as_str()));
                    prop_assert!(session.error_message().is_none());
                } else {
                    prop_assert!(!accepted);
                    prop_assert!(session.file().is_none());
                    prop_assert_eq!(session.error_message(), Some(INVALID_FILE_TYPE_MESSAGE));
                }
            }

            /// finish_submission always leaves a terminal state, never
            /// Submitting, regardless of outcome.
            #[test]
            fn finish_never_leaves_submitting(succeed in any::<bool>()) {
                let mut session = UploadSession::new();
                session.select_file("doc.pdf", 1, ACCEPTED_MIME_TYPE);
                session.begin_submission().unwrap();

                if succeed {
                    session.finish_submission(Ok(AnalysisResult::default()));
                } else {
                    session.finish_submission(Err(TransportError::Status(503)));
                }

                prop_assert_ne!(session.state(), SubmissionState::Submitting);
            }
        }
    }
}
