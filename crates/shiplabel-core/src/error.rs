//! # Design
//!
//! - Provide structured, constant-message errors for the label workflow.
//! - Capture operation context (endpoint, status, path) so operators can diagnose failures.
//! - Collapse every backend failure into one of two user-facing messages.

use std::io;
use std::path::PathBuf;

use shiplabel_models::LabelField;
use thiserror::Error;

/// Message shown when label generation fails for any reason.
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate label. Please try again.";

/// Message shown when label download fails for any reason.
pub const DOWNLOAD_FAILURE_MESSAGE: &str = "Failed to download label. Please try again.";

/// Failures reported by a label backend transport.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend answered with a non-success HTTP status.
    #[error("label backend returned an error status")]
    Status {
        /// Backend operation that failed.
        operation: &'static str,
        /// HTTP status code returned by the backend.
        status: u16,
    },
    /// Request could not be sent or the response could not be read.
    #[error("label backend request failed")]
    Transport {
        /// Backend operation that failed.
        operation: &'static str,
        /// Transport-level failure description.
        detail: String,
    },
    /// Request could not be built from the label data.
    #[error("label backend request could not be built")]
    InvalidRequest {
        /// Backend operation that failed.
        operation: &'static str,
        /// Reason the request was rejected.
        detail: String,
    },
    /// Response body did not match the expected shape.
    #[error("label backend response could not be decoded")]
    Decode {
        /// Backend operation that failed.
        operation: &'static str,
        /// Decoder failure description.
        detail: String,
    },
}

impl BackendError {
    /// Backend operation the failure belongs to.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::InvalidRequest { operation, .. }
            | Self::Decode { operation, .. } => *operation,
        }
    }

    /// HTTP status when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::InvalidRequest { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Failures persisting a downloaded label document.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Filesystem failure while writing the document.
    #[error("label document could not be written")]
    Io {
        /// Destination path of the document.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Browser refused to hand the document to the user.
    #[error("browser download could not be started")]
    Browser {
        /// Browser-reported failure description.
        detail: String,
    },
}

/// Failures of the download-then-save sequence.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Fetching the document from the backend failed.
    #[error("label document could not be fetched")]
    Backend(#[from] BackendError),
    /// Handing the document to the sink failed.
    #[error("label document could not be saved")]
    Save(#[from] SaveError),
}

/// The two failure kinds surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The generate call failed.
    Generation,
    /// The download call (or saving its result) failed.
    Download,
}

impl FailureKind {
    /// Fixed user-facing message for this failure kind.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::Generation => GENERATION_FAILURE_MESSAGE,
            Self::Download => DOWNLOAD_FAILURE_MESSAGE,
        }
    }
}

/// Authentication failures reported by non-stub authenticators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Authenticator refused to open the session.
    #[error("authentication rejected")]
    Rejected,
}

/// Errors returned by workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Submit was requested while required fields are empty.
    #[error("label form is incomplete")]
    IncompleteForm {
        /// Empty fields in display order.
        missing: Vec<LabelField>,
    },
    /// Another operation is still in flight.
    #[error("label workflow is busy")]
    Busy,
    /// Download was requested before a label was generated.
    #[error("no label available for download")]
    NoLabel,
    /// A completion arrived while no operation was in flight.
    #[error("no label operation in flight")]
    NotInFlight,
    /// The generate call failed.
    #[error("label generation failed")]
    Generation {
        /// Underlying backend failure.
        source: BackendError,
    },
    /// The download call failed.
    #[error("label download failed")]
    Download {
        /// Underlying download failure.
        source: DownloadError,
    },
}

impl WorkflowError {
    /// Failure kind for errors that come from the backend round trip.
    #[must_use]
    pub const fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Generation { .. } => Some(FailureKind::Generation),
            Self::Download { .. } => Some(FailureKind::Download),
            Self::IncompleteForm { .. } | Self::Busy | Self::NoLabel | Self::NotInFlight => None,
        }
    }

    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::IncompleteForm { missing } => {
                let names: Vec<&str> = missing.iter().map(|field| field.label()).collect();
                format!("Missing required fields: {}", names.join(", "))
            }
            Self::Busy => "Another label operation is still in progress.".to_string(),
            Self::NoLabel => "Generate a label before downloading it.".to_string(),
            Self::NotInFlight => "No label operation is in progress.".to_string(),
            Self::Generation { .. } => GENERATION_FAILURE_MESSAGE.to_string(),
            Self::Download { .. } => DOWNLOAD_FAILURE_MESSAGE.to_string(),
        }
    }
}
