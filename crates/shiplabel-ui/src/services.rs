//! Browser adapters: HTTP backend, file download, barcode rendering.

pub(crate) mod api;
pub(crate) mod barcode;
pub(crate) mod download;
