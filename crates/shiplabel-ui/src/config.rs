//! Backend origin baked in at build time.

use shiplabel_config::{BackendConfig, DEFAULT_API_BASE_URL};

/// Value of `SHIPLABEL_API_URL` when the bundle was compiled.
const COMPILED_API_URL: Option<&str> = option_env!("SHIPLABEL_API_URL");

/// Backend configuration for this build.
///
/// An invalid compiled override falls back to the hosted backend.
#[must_use]
pub fn backend_config() -> BackendConfig {
    resolve(COMPILED_API_URL)
}

pub(crate) fn resolve(value: Option<&str>) -> BackendConfig {
    BackendConfig::from_override(value).unwrap_or_else(|err| {
        tracing::warn!(
            error = %err,
            fallback = DEFAULT_API_BASE_URL,
            "ignoring invalid backend URL"
        );
        BackendConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_override_uses_hosted_backend() {
        assert_eq!(
            resolve(None).base_url().as_str(),
            "https://logistics-backend-hu3k.onrender.com/"
        );
    }

    #[test]
    fn valid_override_wins() {
        let config = resolve(Some("http://localhost:5000"));
        assert_eq!(
            config.generate_url().as_str(),
            "http://localhost:5000/api/generate-label"
        );
    }

    #[test]
    fn invalid_override_falls_back() {
        assert_eq!(resolve(Some("ftp://example.com")), BackendConfig::default());
    }
}
