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
//! Delivery label web UI.
//!
//! Layout:
//! - `config.rs`: compile-time backend origin
//! - `logging.rs`: `tracing` subscriber writing to the browser console
//! - `store.rs`: yewdux store and reducers over the core workflow
//! - `view_model.rs`: DOM-free presentation data (tabs, fields, preview, buttons)
//! - `app/`, `components/`, `services/`: wasm-only views and browser adapters

pub mod config;
pub mod logging;
pub mod store;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
