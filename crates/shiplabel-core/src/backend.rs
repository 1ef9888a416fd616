//! Capabilities the workflow needs from the outside world.
//!
//! # Design
//! - The backend is an opaque collaborator reached through two calls.
//! - Traits are `?Send` so wasm transports with non-`Send` futures fit.
//! - Saving the PDF is a separate capability (browser download or file on disk).

use async_trait::async_trait;
use shiplabel_models::{LabelRequest, LabelResponse};

use crate::error::{BackendError, DownloadError, SaveError};

/// Operation name recorded on generate failures.
pub const GENERATE_OPERATION: &str = "generate-label";

/// Operation name recorded on download failures.
pub const DOWNLOAD_OPERATION: &str = "download-label";

/// Transport to the remote label backend.
#[async_trait(?Send)]
pub trait LabelBackend {
    /// Submit sender/receiver details and receive the issued label.
    async fn generate_label(&self, request: &LabelRequest) -> Result<LabelResponse, BackendError>;

    /// Fetch the PDF document for a delivery id.
    async fn download_label(&self, delivery_id: &str) -> Result<Vec<u8>, BackendError>;
}

/// Destination for downloaded label documents.
pub trait LabelSink {
    /// Persist the document under the given file name.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] when the document could not be handed over.
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), SaveError>;
}

/// Download the PDF for `label` and hand it to `sink`.
///
/// Returns the file name the document was saved under.
///
/// # Errors
///
/// Returns [`DownloadError`] when the fetch or the save fails.
pub async fn download_to_sink<B, S>(
    backend: &B,
    sink: &S,
    label: &LabelResponse,
) -> Result<String, DownloadError>
where
    B: LabelBackend + ?Sized,
    S: LabelSink + ?Sized,
{
    let bytes = backend.download_label(&label.delivery_id).await?;
    let file_name = label.download_file_name();
    sink.save(&file_name, &bytes)?;
    tracing::info!(
        delivery_id = %label.delivery_id,
        file_name = %file_name,
        bytes = bytes.len(),
        "label document saved"
    );
    Ok(file_name)
}
