//! Environment-backed configuration loading.

use crate::defaults::ENV_API_URL;
use crate::error::ConfigResult;
use crate::model::BackendConfig;

/// Load the backend configuration from the process environment.
///
/// # Errors
///
/// Returns an error when `SHIPLABEL_API_URL` is set to an invalid URL.
pub fn load_from_env() -> ConfigResult<BackendConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load the backend configuration through a custom variable lookup.
///
/// # Errors
///
/// Returns an error when the looked-up override is an invalid URL.
pub fn load_with<F>(lookup: F) -> ConfigResult<BackendConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(ENV_API_URL);
    BackendConfig::from_override(value.as_deref())
}
