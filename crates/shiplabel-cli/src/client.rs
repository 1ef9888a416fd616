//! Shared HTTP backend, error types, and request wiring for the CLI.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use shiplabel_config::BackendConfig;
use shiplabel_core::{
    BackendError, DOWNLOAD_OPERATION, GENERATE_OPERATION, LabelBackend, WorkflowError,
};
use shiplabel_models::{LABEL_CONTENT_TYPE, LabelRequest, LabelResponse};

use crate::cli::{Cli, OutputFormat};

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// Longest slice of an error body copied into the debug log.
const BODY_EXCERPT_LIMIT: usize = 512;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<WorkflowError> for CliError {
    fn from(err: WorkflowError) -> Self {
        let message = err.user_message();
        if err.failure_kind().is_some() {
            // Cause already logged by the workflow; the user gets the fixed string.
            Self::failure(anyhow!(message))
        } else {
            Self::validation(message)
        }
    }
}

/// Dependencies constructed from environment flags and CLI options.
#[derive(Clone)]
pub(crate) struct CliDependencies {
    pub(crate) client: Client,
}

impl CliDependencies {
    /// Construct an HTTP client that tags every request with `trace_id`.
    pub(crate) fn from_env(cli: &Cli, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(cli.timeout))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }
}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) backend: HttpLabelBackend,
    pub(crate) output_dir: PathBuf,
    pub(crate) format: OutputFormat,
}

/// [`LabelBackend`] speaking JSON and PDF over `reqwest`.
#[derive(Debug, Clone)]
pub(crate) struct HttpLabelBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpLabelBackend {
    pub(crate) const fn new(client: Client, config: BackendConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait(?Send)]
impl LabelBackend for HttpLabelBackend {
    async fn generate_label(&self, request: &LabelRequest) -> Result<LabelResponse, BackendError> {
        let url = self.config.generate_url();
        tracing::debug!(url = %url, "requesting label generation");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|err| transport_error(GENERATE_OPERATION, &err))?;
        let response = ensure_success(GENERATE_OPERATION, response).await?;
        response
            .json::<LabelResponse>()
            .await
            .map_err(|err| BackendError::Decode {
                operation: GENERATE_OPERATION,
                detail: err.to_string(),
            })
    }

    async fn download_label(&self, delivery_id: &str) -> Result<Vec<u8>, BackendError> {
        let url = self
            .config
            .download_url(delivery_id)
            .map_err(|err| BackendError::InvalidRequest {
                operation: DOWNLOAD_OPERATION,
                detail: err.to_string(),
            })?;
        tracing::debug!(url = %url, "requesting label document");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, LABEL_CONTENT_TYPE)
            .send()
            .await
            .map_err(|err| transport_error(DOWNLOAD_OPERATION, &err))?;
        let response = ensure_success(DOWNLOAD_OPERATION, response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| transport_error(DOWNLOAD_OPERATION, &err))?;
        Ok(bytes.to_vec())
    }
}

fn transport_error(operation: &'static str, err: &reqwest::Error) -> BackendError {
    BackendError::Transport {
        operation,
        detail: err.to_string(),
    }
}

/// Turn a non-2xx response into [`BackendError::Status`], logging the body.
async fn ensure_success(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let bytes = response.bytes().await.unwrap_or_default();
    let body = String::from_utf8_lossy(&bytes);
    let excerpt: String = body.trim().chars().take(BODY_EXCERPT_LIMIT).collect();
    tracing::debug!(operation, status = status.as_u16(), body = %excerpt, "backend rejected request");
    Err(BackendError::Status {
        operation,
        status: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::prelude::*;
    use serde_json::json;

    fn backend_for(server: &MockServer) -> Result<HttpLabelBackend> {
        let config = BackendConfig::parse(&server.base_url())?;
        Ok(HttpLabelBackend::new(Client::new(), config))
    }

    fn sample_request() -> LabelRequest {
        LabelRequest {
            sender_name: "Alice".to_string(),
            sender_address: "1 Main St".to_string(),
            receiver_name: "Bob".to_string(),
            receiver_address: "2 Oak Ave".to_string(),
        }
    }

    #[tokio::test]
    async fn generate_posts_camel_case_payload() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/generate-label").json_body(json!({
                "senderName": "Alice",
                "senderAddress": "1 Main St",
                "receiverName": "Bob",
                "receiverAddress": "2 Oak Ave"
            }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "deliveryId": "D123",
                    "senderName": "Alice",
                    "senderAddress": "1 Main St",
                    "receiverName": "Bob",
                    "receiverAddress": "2 Oak Ave"
                }));
        });

        let label = backend_for(&server)?
            .generate_label(&sample_request())
            .await?;

        mock.assert();
        assert_eq!(label.delivery_id, "D123");
        assert_eq!(label.receiver_name, "Bob");
        Ok(())
    }

    #[tokio::test]
    async fn generate_maps_server_error_to_status() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/generate-label");
            then.status(500).body("database offline");
        });

        let err = backend_for(&server)?
            .generate_label(&sample_request())
            .await
            .expect_err("500 is a failure");

        mock.assert();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.operation(), GENERATE_OPERATION);
        Ok(())
    }

    #[tokio::test]
    async fn generate_rejects_malformed_body() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/generate-label");
            then.status(200)
                .header("content-type", "application/json")
                .body("not json");
        });

        let err = backend_for(&server)?
            .generate_label(&sample_request())
            .await
            .expect_err("body is not a label");

        assert!(matches!(err, BackendError::Decode { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn download_returns_pdf_bytes() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/download-label/D123")
                .header("accept", LABEL_CONTENT_TYPE);
            then.status(200)
                .header("content-type", LABEL_CONTENT_TYPE)
                .body("%PDF-1.4 label");
        });

        let bytes = backend_for(&server)?.download_label("D123").await?;

        mock.assert();
        assert_eq!(bytes, b"%PDF-1.4 label");
        Ok(())
    }

    #[tokio::test]
    async fn download_maps_missing_label_to_status() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/download-label/D404");
            then.status(404);
        });

        let err = backend_for(&server)?
            .download_label("D404")
            .await
            .expect_err("404 is a failure");

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.operation(), DOWNLOAD_OPERATION);
        Ok(())
    }

    #[tokio::test]
    async fn dot_segment_id_is_rejected_before_sending() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let err = backend_for(&server)?
            .download_label("..")
            .await
            .expect_err("dot segment is not a delivery id");

        assert!(matches!(err, BackendError::InvalidRequest { .. }));
        assert_eq!(err.operation(), DOWNLOAD_OPERATION);
        mock.assert_calls(0);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() -> Result<()> {
        let config = BackendConfig::parse("http://127.0.0.1:9")?;
        let backend = HttpLabelBackend::new(Client::new(), config);

        let err = backend
            .generate_label(&sample_request())
            .await
            .expect_err("nothing listens on the discard port");

        assert!(matches!(err, BackendError::Transport { .. }));
        assert_eq!(err.status(), None);
        Ok(())
    }

    #[test]
    fn workflow_errors_map_to_exit_codes() {
        let incomplete: CliError = WorkflowError::IncompleteForm {
            missing: vec![shiplabel_models::LabelField::SenderName],
        }
        .into();
        assert_eq!(incomplete.exit_code(), 2);
        assert_eq!(
            incomplete.display_message(),
            "Missing required fields: Sender Name"
        );

        let failed: CliError = WorkflowError::Generation {
            source: BackendError::Status {
                operation: GENERATE_OPERATION,
                status: 500,
            },
        }
        .into();
        assert_eq!(failed.exit_code(), 3);
        assert_eq!(
            failed.display_message(),
            "Failed to generate label. Please try again."
        );
    }
}
