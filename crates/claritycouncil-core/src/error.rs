use thiserror::Error;

/// Submission rejections raised by `UploadSession::begin_submission`.
///
/// Both are local state-transition rejections, never panics. Selection
/// validation reports through the session's error message instead, and
/// transport failures travel as `TransportError` in the submission outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

/// Typed cause of a failed submission attempt.
///
/// The variants are kept distinct for logging and tests, but the user-visible
/// message collapses them all into one generic string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("analysis service returned status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_display() {
        assert_eq!(UploadError::NoFileSelected.to_string(), "no file selected");
        assert_eq!(
            UploadError::AlreadySubmitting.to_string(),
            "a submission is already in flight"
        );
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(
            TransportError::Status(502).to_string(),
            "analysis service returned status 502"
        );
        assert_eq!(
            TransportError::Network("refused".into()).to_string(),
            "network error: refused"
        );
    }
}
