//! Core state machines for the Clarity Council web front end.
//!
//! Everything in this crate is browser-free and natively testable: the
//! upload session, the auth form stubs, and the header scroll state. The
//! wasm app crate wires these to DOM events and the analysis endpoint.

pub mod auth;
pub mod error;
pub mod header;
pub mod upload;

pub use auth::{AuthOutcome, LoginForm, SignupForm};
pub use error::{TransportError, UploadError};
pub use header::HeaderState;
pub use upload::{
    format_bytes, AnalysisResult, SelectedFile, SubmissionState, UploadSession, UploadSnapshot,
};
