pub(crate) mod action_button;
pub(crate) mod barcode;
pub(crate) mod error_banner;
pub(crate) mod label_form;
pub(crate) mod label_preview;
pub(crate) mod login;
