//! Presentation data derived from the workflow, kept free of DOM types.

use shiplabel_core::{LabelWorkflow, Tab, WorkflowState};
use shiplabel_models::{LabelField, LabelResponse};

/// Page title shown above the tabs and on the login card.
pub const APP_TITLE: &str = "Delivery Label Generator";

/// Rows rendered for multi-line address inputs.
pub const ADDRESS_ROWS: u32 = 2;

/// One tab header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    /// Tab the header selects.
    pub tab: Tab,
    /// Header text.
    pub title: &'static str,
    /// Whether this tab is the selected one.
    pub selected: bool,
}

/// Tab headers in display order.
#[must_use]
pub fn tab_views(workflow: &LabelWorkflow) -> Vec<TabView> {
    Tab::all()
        .into_iter()
        .map(|tab| TabView {
            tab,
            title: tab.title(),
            selected: workflow.tab() == tab,
        })
        .collect()
}

/// A titled group of form inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSection {
    /// Section heading.
    pub heading: &'static str,
    /// Inputs in the section.
    pub fields: Vec<FieldView>,
}

/// One labelled form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldView {
    /// Field identity.
    pub field: LabelField,
    /// Visible label.
    pub label: &'static str,
    /// HTML `name` attribute.
    pub name: &'static str,
    /// Current raw value.
    pub value: String,
    /// Textarea rows for address inputs.
    pub rows: Option<u32>,
    /// Inputs are locked while a call is in flight.
    pub disabled: bool,
}

/// Sender and receiver sections for the order form.
#[must_use]
pub fn form_sections(workflow: &LabelWorkflow) -> [FormSection; 2] {
    let disabled = workflow.is_loading();
    let field_view = |field: LabelField| FieldView {
        field,
        label: field.label(),
        name: field.wire_name(),
        value: workflow.form().get(field).to_string(),
        rows: field.is_multiline().then_some(ADDRESS_ROWS),
        disabled,
    };
    [
        FormSection {
            heading: "Sender Information",
            fields: vec![
                field_view(LabelField::SenderName),
                field_view(LabelField::SenderAddress),
            ],
        },
        FormSection {
            heading: "Receiver Information",
            fields: vec![
                field_view(LabelField::ReceiverName),
                field_view(LabelField::ReceiverAddress),
            ],
        },
    ]
}

/// Render state of an action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonView {
    /// Caption shown when idle.
    pub caption: &'static str,
    /// Show a spinner in place of the caption.
    pub busy: bool,
    /// Ignore clicks.
    pub disabled: bool,
}

/// "Generate Label" button state.
#[must_use]
pub fn generate_button(workflow: &LabelWorkflow) -> ButtonView {
    ButtonView {
        caption: "Generate Label",
        busy: matches!(workflow.state(), WorkflowState::Submitting { .. }),
        disabled: !workflow.can_submit(),
    }
}

/// "Download PDF" button state.
#[must_use]
pub fn download_button(workflow: &LabelWorkflow) -> ButtonView {
    ButtonView {
        caption: "Download PDF",
        busy: matches!(workflow.state(), WorkflowState::Downloading { .. }),
        disabled: !workflow.can_download(),
    }
}

/// "Back to Form" button state; locked while a call is in flight.
#[must_use]
pub fn back_button(workflow: &LabelWorkflow) -> ButtonView {
    ButtonView {
        caption: "Back to Form",
        busy: false,
        disabled: workflow.is_loading(),
    }
}

/// Printable label content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewView {
    /// "Delivery ID: ..." line.
    pub heading: String,
    /// Payload encoded in the barcode.
    pub barcode: String,
    /// Sender block.
    pub from: AddressBlock,
    /// Receiver block.
    pub to: AddressBlock,
}

/// Name and address under a "From:" or "To:" caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressBlock {
    /// Block caption.
    pub caption: &'static str,
    /// Name line.
    pub name: String,
    /// Address rendered verbatim, newlines included.
    pub address: String,
}

impl PreviewView {
    /// Build the preview for a backend-issued label.
    #[must_use]
    pub fn from_label(label: &LabelResponse) -> Self {
        Self {
            heading: format!("Delivery ID: {}", label.delivery_id),
            barcode: label.delivery_id.clone(),
            from: AddressBlock {
                caption: "From:",
                name: label.sender_name.clone(),
                address: label.sender_address.clone(),
            },
            to: AddressBlock {
                caption: "To:",
                name: label.receiver_name.clone(),
                address: label.receiver_address.clone(),
            },
        }
    }
}

/// Preview for the current label; `None` renders an empty preview tab.
#[must_use]
pub fn preview(workflow: &LabelWorkflow) -> Option<PreviewView> {
    workflow.label().map(PreviewView::from_label)
}
