#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! DOM-free session gate and label workflow shared by the CLI and the web UI.
//!
//! Layout:
//! - `session.rs`: session flag and the injected authenticator seam
//! - `workflow.rs`: tagged workflow state, tab selection, transitions
//! - `backend.rs`: backend and sink capabilities
//! - `service.rs`: async driver wiring the workflow to its capabilities
//! - `error.rs`: error types and the fixed user-facing messages

pub mod backend;
pub mod error;
pub mod service;
pub mod session;
pub mod workflow;

pub use backend::{
    DOWNLOAD_OPERATION, GENERATE_OPERATION, LabelBackend, LabelSink, download_to_sink,
};
pub use error::{
    AuthError, BackendError, DOWNLOAD_FAILURE_MESSAGE, DownloadError, FailureKind,
    GENERATION_FAILURE_MESSAGE, SaveError, WorkflowError,
};
pub use service::LabelService;
pub use session::{Authenticator, SessionGate, SessionState, StubAuthenticator};
pub use workflow::{LabelWorkflow, Tab, WorkflowState};
