//! Backend endpoint configuration.
//!
//! # Design
//! - Validate the origin once at construction so endpoint builders cannot fail.
//! - Build endpoint URLs from path segments so delivery ids are percent-encoded.

use shiplabel_models::{DOWNLOAD_LABEL_PATH, GENERATE_LABEL_PATH, is_usable_delivery_id};
use url::Url;

use crate::defaults::DEFAULT_API_BASE_URL;
use crate::error::{ConfigError, ConfigResult};

/// Validated location of the label backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
}

impl BackendConfig {
    /// Parse and validate a backend origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is not an absolute http(s) URL
    /// that can carry a path.
    pub fn parse(value: &str) -> ConfigResult<Self> {
        let trimmed = value.trim();
        let mut base_url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeBase {
                value: trimmed.to_string(),
            });
        }
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: trimmed.to_string(),
                scheme: base_url.scheme().to_string(),
            });
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self { base_url })
    }

    /// Resolve an optional override, falling back to the hosted backend.
    ///
    /// Blank overrides are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a non-blank override is invalid.
    pub fn from_override(value: Option<&str>) -> ConfigResult<Self> {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::parse(value),
            None => Self::parse(DEFAULT_API_BASE_URL),
        }
    }

    /// Origin the endpoints are built from.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the label generation endpoint.
    #[must_use]
    pub fn generate_url(&self) -> Url {
        self.endpoint(path_segments(GENERATE_LABEL_PATH))
    }

    /// URL of the download endpoint for one delivery id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeliveryId`] for empty ids and for `.`
    /// or `..`, which would not survive as a path segment.
    pub fn download_url(&self, delivery_id: &str) -> ConfigResult<Url> {
        if !is_usable_delivery_id(delivery_id) {
            return Err(ConfigError::InvalidDeliveryId {
                value: delivery_id.to_string(),
            });
        }
        let mut segments = path_segments(DOWNLOAD_LABEL_PATH);
        segments.push(delivery_id);
        Ok(self.endpoint(segments))
    }

    fn endpoint(&self, segments: Vec<&str>) -> Url {
        let mut url = self.base_url.clone();
        // Construction rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default backend URL is valid")),
        }
    }
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_hosted_backend() {
        let config = BackendConfig::default();
        assert_eq!(
            config.generate_url().as_str(),
            "https://logistics-backend-hu3k.onrender.com/api/generate-label"
        );
    }

    #[test]
    fn trailing_slash_and_prefix_are_preserved() -> ConfigResult<()> {
        let config = BackendConfig::parse("http://127.0.0.1:9000/labels/")?;
        assert_eq!(
            config.generate_url().as_str(),
            "http://127.0.0.1:9000/labels/api/generate-label"
        );
        Ok(())
    }

    #[test]
    fn download_url_encodes_delivery_id_as_one_segment() -> ConfigResult<()> {
        let config = BackendConfig::parse("http://localhost:8080")?;
        assert_eq!(
            config.download_url("D123")?.as_str(),
            "http://localhost:8080/api/download-label/D123"
        );
        assert_eq!(
            config.download_url("a/b c")?.as_str(),
            "http://localhost:8080/api/download-label/a%2Fb%20c"
        );
        assert_eq!(
            config.download_url("...")?.as_str(),
            "http://localhost:8080/api/download-label/..."
        );
        Ok(())
    }

    #[test]
    fn dot_segment_delivery_ids_are_rejected() -> ConfigResult<()> {
        let config = BackendConfig::parse("http://localhost:8080")?;
        for id in ["", ".", ".."] {
            let err = config.download_url(id).expect_err("not a path segment");
            assert!(matches!(err, ConfigError::InvalidDeliveryId { ref value } if value == id));
        }
        Ok(())
    }

    #[test]
    fn query_and_fragment_are_dropped() -> ConfigResult<()> {
        let config = BackendConfig::parse("https://example.test/?x=1#top")?;
        assert_eq!(
            config.generate_url().as_str(),
            "https://example.test/api/generate-label"
        );
        Ok(())
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = BackendConfig::parse("ftp://example.test").expect_err("ftp is rejected");
        assert!(matches!(err, ConfigError::UnsupportedScheme { scheme, .. } if scheme == "ftp"));
        let err = BackendConfig::parse("mailto:ops@example.test").expect_err("mailto is rejected");
        assert!(matches!(err, ConfigError::CannotBeBase { .. }));
        let err = BackendConfig::parse("not a url").expect_err("garbage is rejected");
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn blank_override_falls_back_to_default() -> ConfigResult<()> {
        assert_eq!(BackendConfig::from_override(None)?, BackendConfig::default());
        assert_eq!(
            BackendConfig::from_override(Some("   "))?,
            BackendConfig::default()
        );
        let custom = BackendConfig::from_override(Some("http://localhost:3000"))?;
        assert_eq!(custom.base_url().as_str(), "http://localhost:3000/");
        Ok(())
    }
}
