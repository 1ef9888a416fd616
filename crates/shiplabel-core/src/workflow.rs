//! Label workflow state machine.
//!
//! # Design
//! - One tagged [`WorkflowState`] owns the form, the issued label, the
//!   loading stage and the last failure, so they cannot drift apart.
//! - The visible [`Tab`] is navigation only: any tab can be shown at any time.
//! - Network calls are split into `begin_*` / `complete_*` halves so callers
//!   can await the transport between them; every completion clears loading.

use std::mem;

use shiplabel_models::{LabelField, LabelRequest, LabelResponse};

use crate::error::{BackendError, DownloadError, FailureKind, WorkflowError};

/// The two panels of the label view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Input form (index 0).
    #[default]
    OrderForm,
    /// Barcode preview and download (index 1).
    LabelPreview,
}

impl Tab {
    /// Both tabs in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::OrderForm, Self::LabelPreview]
    }

    /// Zero-based tab index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::OrderForm => 0,
            Self::LabelPreview => 1,
        }
    }

    /// Tab for a zero-based index; out-of-range indices select the form.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            1 => Self::LabelPreview,
            _ => Self::OrderForm,
        }
    }

    /// Tab caption.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::OrderForm => "Order Form",
            Self::LabelPreview => "Label Preview",
        }
    }
}

/// Where the workflow currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    /// Editing the form; no label issued yet.
    FormEntry {
        /// Current form inputs.
        form: LabelRequest,
    },
    /// Generate call in flight.
    Submitting {
        /// Inputs being submitted.
        form: LabelRequest,
        /// Label from an earlier successful submit, kept until replaced.
        previous: Option<LabelResponse>,
    },
    /// A label is available for preview and download.
    PreviewReady {
        /// Current form inputs.
        form: LabelRequest,
        /// Label issued by the backend.
        label: LabelResponse,
    },
    /// Download call in flight.
    Downloading {
        /// Current form inputs.
        form: LabelRequest,
        /// Label being downloaded.
        label: LabelResponse,
    },
    /// The last operation failed; the form and any earlier label are kept.
    Failed {
        /// Current form inputs.
        form: LabelRequest,
        /// Label from an earlier successful submit, if any.
        previous: Option<LabelResponse>,
        /// Which operation failed.
        error: FailureKind,
    },
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::FormEntry {
            form: LabelRequest::default(),
        }
    }
}

impl WorkflowState {
    /// Form inputs held in every stage.
    #[must_use]
    pub const fn form(&self) -> &LabelRequest {
        match self {
            Self::FormEntry { form }
            | Self::Submitting { form, .. }
            | Self::PreviewReady { form, .. }
            | Self::Downloading { form, .. }
            | Self::Failed { form, .. } => form,
        }
    }

    fn form_mut(&mut self) -> &mut LabelRequest {
        match self {
            Self::FormEntry { form }
            | Self::Submitting { form, .. }
            | Self::PreviewReady { form, .. }
            | Self::Downloading { form, .. }
            | Self::Failed { form, .. } => form,
        }
    }

    /// Label available for preview, if one was issued.
    #[must_use]
    pub const fn label(&self) -> Option<&LabelResponse> {
        match self {
            Self::PreviewReady { label, .. } | Self::Downloading { label, .. } => Some(label),
            Self::Submitting { previous, .. } | Self::Failed { previous, .. } => previous.as_ref(),
            Self::FormEntry { .. } => None,
        }
    }

    /// Whether a backend call is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting { .. } | Self::Downloading { .. })
    }

    /// Failure of the last operation, if it failed.
    #[must_use]
    pub const fn failure(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { error, .. } => Some(*error),
            _ => None,
        }
    }

    /// Short stage name for logs.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::FormEntry { .. } => "form_entry",
            Self::Submitting { .. } => "submitting",
            Self::PreviewReady { .. } => "preview_ready",
            Self::Downloading { .. } => "downloading",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Label view state: the workflow stage plus the selected tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelWorkflow {
    state: WorkflowState,
    tab: Tab,
}

impl LabelWorkflow {
    /// Fresh workflow on the order form with empty inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Workflow resumed from a label issued earlier, showing its preview.
    #[must_use]
    pub fn from_label(label: LabelResponse) -> Self {
        let form = LabelRequest {
            sender_name: label.sender_name.clone(),
            sender_address: label.sender_address.clone(),
            receiver_name: label.receiver_name.clone(),
            receiver_address: label.receiver_address.clone(),
        };
        Self {
            state: WorkflowState::PreviewReady { form, label },
            tab: Tab::LabelPreview,
        }
    }

    /// Current stage.
    #[must_use]
    pub const fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Selected tab.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// Current form inputs.
    #[must_use]
    pub const fn form(&self) -> &LabelRequest {
        self.state.form()
    }

    /// Label available for preview.
    #[must_use]
    pub const fn label(&self) -> Option<&LabelResponse> {
        self.state.label()
    }

    /// Whether a backend call is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Banner text for the last failed operation.
    #[must_use]
    pub const fn error_message(&self) -> Option<&'static str> {
        match self.state.failure() {
            Some(kind) => Some(kind.user_message()),
            None => None,
        }
    }

    /// Whether the generate control should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.form().is_complete()
    }

    /// Whether the download control should be enabled.
    #[must_use]
    pub fn can_download(&self) -> bool {
        !self.is_loading() && self.label().is_some_and(LabelResponse::has_delivery_id)
    }

    /// Store raw input for one form field.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Busy`] while a backend call is in flight.
    pub fn update_field(
        &mut self,
        field: LabelField,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        if self.is_loading() {
            return Err(WorkflowError::Busy);
        }
        self.state.form_mut().set(field, value);
        Ok(())
    }

    /// Select a tab; navigation is never gated on label presence.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Return to the order form regardless of label state.
    pub fn back_to_form(&mut self) {
        self.tab = Tab::OrderForm;
    }

    /// Enter the submitting stage and return the request to send.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Busy`] while loading and
    /// [`WorkflowError::IncompleteForm`] when a field is empty; the state is
    /// unchanged in both cases.
    pub fn begin_submit(&mut self) -> Result<LabelRequest, WorkflowError> {
        if self.is_loading() {
            return Err(WorkflowError::Busy);
        }
        let missing = self.form().missing_fields();
        if !missing.is_empty() {
            return Err(WorkflowError::IncompleteForm { missing });
        }
        let next = match mem::take(&mut self.state) {
            WorkflowState::FormEntry { form } => WorkflowState::Submitting {
                form,
                previous: None,
            },
            WorkflowState::PreviewReady { form, label } => WorkflowState::Submitting {
                form,
                previous: Some(label),
            },
            WorkflowState::Failed { form, previous, .. } => {
                WorkflowState::Submitting { form, previous }
            }
            busy @ (WorkflowState::Submitting { .. } | WorkflowState::Downloading { .. }) => busy,
        };
        self.state = next;
        tracing::debug!("label generation started");
        Ok(self.form().clone())
    }

    /// Apply the outcome of the generate call.
    ///
    /// Success stores the label and switches to the preview tab; failure
    /// keeps the tab and any earlier label.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Generation`] carrying the backend failure, or
    /// [`WorkflowError::NotInFlight`] when no submit was pending.
    pub fn complete_submit(
        &mut self,
        outcome: Result<LabelResponse, BackendError>,
    ) -> Result<(), WorkflowError> {
        match mem::take(&mut self.state) {
            WorkflowState::Submitting { form, previous } => match outcome {
                Ok(label) => {
                    tracing::info!(delivery_id = %label.delivery_id, "label generated");
                    self.state = WorkflowState::PreviewReady { form, label };
                    self.tab = Tab::LabelPreview;
                    Ok(())
                }
                Err(source) => {
                    tracing::warn!(
                        error = %source,
                        operation = source.operation(),
                        status = ?source.status(),
                        "label generation failed"
                    );
                    self.state = WorkflowState::Failed {
                        form,
                        previous,
                        error: FailureKind::Generation,
                    };
                    Err(WorkflowError::Generation { source })
                }
            },
            other => {
                self.state = other;
                Err(WorkflowError::NotInFlight)
            }
        }
    }

    /// Enter the downloading stage and return the label to fetch.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Busy`] while loading and
    /// [`WorkflowError::NoLabel`] when no label with a delivery id exists.
    pub fn begin_download(&mut self) -> Result<LabelResponse, WorkflowError> {
        if self.is_loading() {
            return Err(WorkflowError::Busy);
        }
        if !self.label().is_some_and(LabelResponse::has_delivery_id) {
            return Err(WorkflowError::NoLabel);
        }
        let next = match mem::take(&mut self.state) {
            WorkflowState::PreviewReady { form, label }
            | WorkflowState::Failed {
                form,
                previous: Some(label),
                ..
            } => WorkflowState::Downloading { form, label },
            other => other,
        };
        self.state = next;
        let label = self.label().cloned().ok_or(WorkflowError::NoLabel)?;
        tracing::debug!(delivery_id = %label.delivery_id, "label download started");
        Ok(label)
    }

    /// Apply the outcome of the download call; the tab never changes.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Download`] carrying the failure, or
    /// [`WorkflowError::NotInFlight`] when no download was pending.
    pub fn complete_download(
        &mut self,
        outcome: Result<String, DownloadError>,
    ) -> Result<String, WorkflowError> {
        match mem::take(&mut self.state) {
            WorkflowState::Downloading { form, label } => match outcome {
                Ok(file_name) => {
                    self.state = WorkflowState::PreviewReady { form, label };
                    Ok(file_name)
                }
                Err(source) => {
                    tracing::warn!(
                        error = %source,
                        cause = ?source,
                        delivery_id = %label.delivery_id,
                        "label download failed"
                    );
                    self.state = WorkflowState::Failed {
                        form,
                        previous: Some(label),
                        error: FailureKind::Download,
                    };
                    Err(WorkflowError::Download { source })
                }
            },
            other => {
                self.state = other;
                Err(WorkflowError::NotInFlight)
            }
        }
    }
}
