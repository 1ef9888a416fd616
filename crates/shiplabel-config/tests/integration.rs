use shiplabel_config::{ConfigError, DEFAULT_API_BASE_URL, ENV_API_URL, load_with};

#[test]
fn lookup_override_wins_over_default() -> anyhow::Result<()> {
    let config = load_with(|key| {
        (key == ENV_API_URL).then(|| "http://labels.internal:8080".to_string())
    })?;
    assert_eq!(
        config.download_url("D-42")?.as_str(),
        "http://labels.internal:8080/api/download-label/D-42"
    );
    Ok(())
}

#[test]
fn missing_variable_uses_hosted_backend() -> anyhow::Result<()> {
    let config = load_with(|_| None)?;
    assert_eq!(
        config.base_url().as_str().trim_end_matches('/'),
        DEFAULT_API_BASE_URL
    );
    Ok(())
}

#[test]
fn invalid_override_is_reported() {
    let err = load_with(|_| Some("::nope::".to_string())).expect_err("invalid URL");
    assert!(matches!(err, ConfigError::InvalidBaseUrl { value, .. } if value == "::nope::"));
}
