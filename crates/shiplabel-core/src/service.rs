//! Async driver running the workflow against a backend and a sink.

use shiplabel_models::{LabelField, LabelResponse};

use crate::backend::{LabelBackend, LabelSink, download_to_sink};
use crate::error::WorkflowError;
use crate::workflow::{LabelWorkflow, Tab};

/// Owns a [`LabelWorkflow`] together with the capabilities it calls.
#[derive(Debug)]
pub struct LabelService<B, S> {
    backend: B,
    sink: S,
    workflow: LabelWorkflow,
}

impl<B, S> LabelService<B, S>
where
    B: LabelBackend,
    S: LabelSink,
{
    /// Start on an empty order form.
    pub fn new(backend: B, sink: S) -> Self {
        Self::with_workflow(backend, sink, LabelWorkflow::new())
    }

    /// Resume from an existing workflow state.
    pub const fn with_workflow(backend: B, sink: S, workflow: LabelWorkflow) -> Self {
        Self {
            backend,
            sink,
            workflow,
        }
    }

    /// Current view state.
    pub const fn workflow(&self) -> &LabelWorkflow {
        &self.workflow
    }

    /// Backend the service talks to.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Sink downloads are written to.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Store raw input for one form field.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Busy`] while a call is in flight.
    pub fn update_field(
        &mut self,
        field: LabelField,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        self.workflow.update_field(field, value)
    }

    /// Select a tab.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.workflow.switch_tab(tab);
    }

    /// Return to the order form.
    pub fn back_to_form(&mut self) {
        self.workflow.back_to_form();
    }

    /// Submit the form and wait for the issued label.
    ///
    /// # Errors
    ///
    /// Returns precondition errors without calling the backend, or
    /// [`WorkflowError::Generation`] when the backend call fails.
    pub async fn submit(&mut self) -> Result<LabelResponse, WorkflowError> {
        let request = self.workflow.begin_submit()?;
        let outcome = self.backend.generate_label(&request).await;
        self.workflow.complete_submit(outcome)?;
        tracing::debug!(stage = self.workflow.state().stage(), "submit finished");
        self.workflow.label().cloned().ok_or(WorkflowError::NoLabel)
    }

    /// Download the current label's PDF into the sink.
    ///
    /// Returns the file name the document was saved under.
    ///
    /// # Errors
    ///
    /// Returns precondition errors without calling the backend, or
    /// [`WorkflowError::Download`] when the fetch or save fails.
    pub async fn download(&mut self) -> Result<String, WorkflowError> {
        let label = self.workflow.begin_download()?;
        let outcome = download_to_sink(&self.backend, &self.sink, &label).await;
        let file_name = self.workflow.complete_download(outcome)?;
        tracing::debug!(stage = self.workflow.state().stage(), "download finished");
        Ok(file_name)
    }
}
