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
//! Shared HTTP DTOs for the delivery label backend.
//!
//! These types are re-used by the CLI and the web UI for request/response
//! encoding so both surfaces speak the exact same camelCase JSON contract.
//! The backend is treated as an opaque collaborator: responses are trusted
//! verbatim and never re-derived client-side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path of the label generation endpoint, relative to the backend origin.
pub const GENERATE_LABEL_PATH: &str = "/api/generate-label";

/// Path prefix of the label download endpoint; the delivery id is appended
/// as the final path segment.
pub const DOWNLOAD_LABEL_PATH: &str = "/api/download-label";

/// Content type advertised for downloaded label documents.
pub const LABEL_CONTENT_TYPE: &str = "application/pdf";

/// Sender and receiver details submitted to the generate endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelRequest {
    /// Name printed in the "From" block.
    pub sender_name: String,
    /// Multi-line sender address.
    pub sender_address: String,
    /// Name printed in the "To" block.
    pub receiver_name: String,
    /// Multi-line receiver address.
    pub receiver_address: String,
}

impl LabelRequest {
    /// Read a single field by its form identifier.
    #[must_use]
    pub fn get(&self, field: LabelField) -> &str {
        match field {
            LabelField::SenderName => &self.sender_name,
            LabelField::SenderAddress => &self.sender_address,
            LabelField::ReceiverName => &self.receiver_name,
            LabelField::ReceiverAddress => &self.receiver_address,
        }
    }

    /// Overwrite a single field with the raw user input.
    pub fn set(&mut self, field: LabelField, value: impl Into<String>) {
        let slot = match field {
            LabelField::SenderName => &mut self.sender_name,
            LabelField::SenderAddress => &mut self.sender_address,
            LabelField::ReceiverName => &mut self.receiver_name,
            LabelField::ReceiverAddress => &mut self.receiver_address,
        };
        *slot = value.into();
    }

    /// Fields that are still empty, in display order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<LabelField> {
        LabelField::all()
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Whether every field carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        LabelField::all()
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }
}

/// Label record issued by the backend for a submitted request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    /// Backend-issued identifier; barcode payload and download key.
    pub delivery_id: String,
    /// Sender name as echoed by the backend.
    pub sender_name: String,
    /// Sender address as echoed by the backend.
    pub sender_address: String,
    /// Receiver name as echoed by the backend.
    pub receiver_name: String,
    /// Receiver address as echoed by the backend.
    pub receiver_address: String,
}

impl LabelResponse {
    /// Label reference that only knows its delivery id, used when a label
    /// issued earlier is downloaded without its address details.
    #[must_use]
    pub fn for_delivery_id(delivery_id: impl Into<String>) -> Self {
        Self {
            delivery_id: delivery_id.into(),
            ..Self::default()
        }
    }

    /// Whether the record carries a usable delivery id.
    #[must_use]
    pub fn has_delivery_id(&self) -> bool {
        is_usable_delivery_id(&self.delivery_id)
    }

    /// File name used when saving the downloaded PDF.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        label_file_name(&self.delivery_id)
    }
}

/// Whether `delivery_id` can be sent as one URL path segment.
///
/// Empty ids and the dot segments `.` and `..` are rejected because URL
/// normalisation would drop them from the download path.
#[must_use]
pub fn is_usable_delivery_id(delivery_id: &str) -> bool {
    !matches!(delivery_id, "" | "." | "..")
}

/// File name for the PDF of the given delivery id.
#[must_use]
pub fn label_file_name(delivery_id: &str) -> String {
    format!("delivery-label-{delivery_id}.pdf")
}

/// Identifies one of the four label form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    /// Sender name input.
    SenderName,
    /// Sender address input.
    SenderAddress,
    /// Receiver name input.
    ReceiverName,
    /// Receiver address input.
    ReceiverAddress,
}

impl LabelField {
    /// All fields in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::SenderName,
            Self::SenderAddress,
            Self::ReceiverName,
            Self::ReceiverAddress,
        ]
    }

    /// JSON key used on the wire (and as the HTML input name).
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::SenderName => "senderName",
            Self::SenderAddress => "senderAddress",
            Self::ReceiverName => "receiverName",
            Self::ReceiverAddress => "receiverAddress",
        }
    }

    /// Human-readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SenderName => "Sender Name",
            Self::SenderAddress => "Sender Address",
            Self::ReceiverName => "Receiver Name",
            Self::ReceiverAddress => "Receiver Address",
        }
    }

    /// Address inputs accept multiple lines.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::SenderAddress | Self::ReceiverAddress)
    }

    /// Parse a wire name back into a field.
    #[must_use]
    pub fn from_wire_name(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|field| field.wire_name() == value)
    }
}

impl fmt::Display for LabelField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}
