//! App-wide yewdux store and its reducers.
//!
//! # Design
//! - One store holds the session flag and the label workflow.
//! - Reducers are plain functions over `&mut AppStore` so they run natively in tests.
//! - Rejected transitions are logged and leave the store unchanged.

use shiplabel_core::{
    Authenticator, BackendError, DownloadError, LabelWorkflow, SessionState, Tab, WorkflowError,
};
use shiplabel_models::{LabelField, LabelRequest, LabelResponse};
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Session gate flag; closed on every page load.
    pub session: SessionState,
    /// Label form, preview, and in-flight state.
    pub workflow: LabelWorkflow,
}

/// Handle the login trigger.
pub fn login<A: Authenticator + ?Sized>(store: &mut AppStore, authenticator: &A) {
    if let Err(err) = store.session.open(authenticator) {
        tracing::warn!(error = %err, "login rejected");
    }
}

/// Store raw input for one field; ignored while a call is in flight.
pub fn update_field(store: &mut AppStore, field: LabelField, value: String) {
    if let Err(err) = store.workflow.update_field(field, value) {
        log_rejected("update_field", &err);
    }
}

/// Select a tab.
pub fn select_tab(store: &mut AppStore, tab: Tab) {
    store.workflow.switch_tab(tab);
}

/// Return to the order form.
pub fn back_to_form(store: &mut AppStore) {
    store.workflow.back_to_form();
}

/// Enter the submitting stage; `None` when the submit is not allowed.
pub fn begin_submit(store: &mut AppStore) -> Option<LabelRequest> {
    store
        .workflow
        .begin_submit()
        .map_err(|err| log_rejected("submit", &err))
        .ok()
}

/// Apply the generate call outcome.
pub fn finish_submit(store: &mut AppStore, outcome: Result<LabelResponse, BackendError>) {
    if let Err(err) = store.workflow.complete_submit(outcome) {
        log_finished("submit", &err);
    }
}

/// Enter the downloading stage; `None` when no download is allowed.
pub fn begin_download(store: &mut AppStore) -> Option<LabelResponse> {
    store
        .workflow
        .begin_download()
        .map_err(|err| log_rejected("download", &err))
        .ok()
}

/// Apply the download outcome.
pub fn finish_download(store: &mut AppStore, outcome: Result<String, DownloadError>) {
    if let Err(err) = store.workflow.complete_download(outcome) {
        log_finished("download", &err);
    }
}

fn log_rejected(action: &'static str, err: &WorkflowError) {
    tracing::debug!(action, reason = %err, "workflow rejected action");
}

fn log_finished(action: &'static str, err: &WorkflowError) {
    if err.failure_kind().is_none() {
        tracing::debug!(action, reason = %err, "stale completion ignored");
    }
}
