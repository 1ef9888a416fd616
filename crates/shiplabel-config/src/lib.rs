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
//! Backend configuration shared by the CLI and the web UI.
//!
//! Layout:
//! - `defaults.rs`: hosted origin and environment keys
//! - `model.rs`: validated [`BackendConfig`] and endpoint builders
//! - `loader.rs`: environment lookups
//! - `error.rs`: [`ConfigError`]

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;

pub use defaults::{DEFAULT_API_BASE_URL, ENV_API_URL, ENV_OUTPUT_DIR};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_from_env, load_with};
pub use model::BackendConfig;
