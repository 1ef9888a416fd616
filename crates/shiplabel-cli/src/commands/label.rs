use shiplabel_core::{LabelService, LabelWorkflow};
use shiplabel_models::{LabelField, LabelResponse};

use crate::cli::{DownloadArgs, GenerateArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_label;
use crate::sink::DirectorySink;

pub(crate) async fn handle_generate(ctx: &AppContext, args: GenerateArgs) -> CliResult<()> {
    let download = args.download;
    let request = args.into_request();

    let sink = DirectorySink::new(&ctx.output_dir);
    let mut service = LabelService::new(ctx.backend.clone(), sink);
    for field in LabelField::all() {
        service.update_field(field, request.get(field))?;
    }

    let label = service.submit().await?;
    render_label(&label, ctx.format)?;

    if download {
        let file_name = service.download().await?;
        eprintln!("Saved {}", service.sink().path_for(&file_name).display());
    }
    Ok(())
}

pub(crate) async fn handle_download(ctx: &AppContext, args: DownloadArgs) -> CliResult<()> {
    let delivery_id = args.delivery_id.trim();
    if delivery_id.is_empty() {
        return Err(CliError::validation("delivery id cannot be empty"));
    }

    let workflow = LabelWorkflow::from_label(LabelResponse::for_delivery_id(delivery_id));
    let sink = DirectorySink::new(&ctx.output_dir);
    let mut service = LabelService::with_workflow(ctx.backend.clone(), sink, workflow);

    let file_name = service.download().await?;
    println!("Saved {}", service.sink().path_for(&file_name).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use clap::Parser;
    use httpmock::prelude::*;
    use reqwest::Client;
    use serde_json::json;
    use shiplabel_config::BackendConfig;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    use crate::cli::{Cli, OutputFormat};
    use crate::client::{CliDependencies, HttpLabelBackend};

    fn context_with(server: &MockServer, output_dir: &TempDir) -> Result<AppContext> {
        context_with_client(server, output_dir, Client::new())
    }

    fn context_with_client(
        server: &MockServer,
        output_dir: &TempDir,
        client: Client,
    ) -> Result<AppContext> {
        let config = BackendConfig::parse(&server.base_url())
            .map_err(|err| anyhow!("valid URL: {err}"))?;
        Ok(AppContext {
            backend: HttpLabelBackend::new(client, config),
            output_dir: output_dir.path().to_path_buf(),
            format: OutputFormat::Text,
        })
    }

    fn alice_to_bob(download: bool) -> GenerateArgs {
        GenerateArgs {
            sender_name: Some("Alice".to_string()),
            sender_address: Some("1 Main St".to_string()),
            receiver_name: Some("Bob".to_string()),
            receiver_address: Some("2 Oak Ave".to_string()),
            download,
        }
    }

    fn mock_generate(server: &MockServer) -> httpmock::Mock<'_> {
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate-label")
                .header("x-request-id", "trace-1")
                .json_body(json!({
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
        })
    }

    fn wired_context(
        server: &MockServer,
        output_dir: &TempDir,
        timeout: &str,
    ) -> Result<AppContext> {
        let cli = Cli::try_parse_from(["shiplabel", "--timeout", timeout, "download", "D1"])?;
        let deps = CliDependencies::from_env(&cli, "trace-1")
            .map_err(|err| anyhow!(err.display_message()))?;
        context_with_client(server, output_dir, deps.client)
    }

    #[tokio::test]
    async fn generate_prints_label_without_downloading() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = mock_generate(&server);
        let dir = TempDir::new()?;
        let ctx = wired_context(&server, &dir, "30")?;

        handle_generate(&ctx, alice_to_bob(false)).await?;

        mock.assert();
        assert!(!dir.path().join("delivery-label-D123.pdf").exists());
        Ok(())
    }

    #[tokio::test]
    async fn generate_with_download_saves_pdf() -> Result<()> {
        let server = MockServer::start_async().await;
        let generate = mock_generate(&server);
        let download = server.mock(|when, then| {
            when.method(GET).path("/api/download-label/D123");
            then.status(200)
                .header("content-type", "application/pdf")
                .body("%PDF-1.4 D123");
        });
        let dir = TempDir::new()?;
        let ctx = wired_context(&server, &dir, "30")?;

        handle_generate(&ctx, alice_to_bob(true)).await?;

        generate.assert();
        download.assert();
        let saved = fs::read(dir.path().join("delivery-label-D123.pdf"))?;
        assert_eq!(saved, b"%PDF-1.4 D123");
        Ok(())
    }

    #[tokio::test]
    async fn slow_backend_hits_configured_timeout() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/generate-label")
                .header("x-request-id", "trace-1");
            then.status(200).delay(Duration::from_secs(3));
        });
        let dir = TempDir::new()?;
        let ctx = wired_context(&server, &dir, "1")?;

        let err = handle_generate(&ctx, alice_to_bob(false))
            .await
            .expect_err("request times out");

        mock.assert();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "Failed to generate label. Please try again."
        );
        Ok(())
    }

    #[tokio::test]
    async fn generate_server_error_is_operational_failure() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/generate-label");
            then.status(500);
        });
        let dir = TempDir::new()?;
        let ctx = context_with(&server, &dir)?;

        let err = handle_generate(&ctx, alice_to_bob(false))
            .await
            .expect_err("backend failure");

        mock.assert();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "Failed to generate label. Please try again."
        );
        Ok(())
    }

    #[tokio::test]
    async fn generate_with_missing_field_is_validation_error() -> Result<()> {
        let server = MockServer::start_async().await;
        let dir = TempDir::new()?;
        let ctx = context_with(&server, &dir)?;
        let mut args = alice_to_bob(false);
        args.receiver_name = None;

        let err = handle_generate(&ctx, args)
            .await
            .expect_err("form is incomplete");

        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.display_message(),
            "Missing required fields: Receiver Name"
        );
        Ok(())
    }

    #[tokio::test]
    async fn download_writes_named_file() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/download-label/D42");
            then.status(200).body("%PDF-1.4 D42");
        });
        let dir = TempDir::new()?;
        let ctx = context_with(&server, &dir)?;

        handle_download(
            &ctx,
            DownloadArgs {
                delivery_id: " D42 ".to_string(),
            },
        )
        .await?;

        mock.assert();
        assert_eq!(
            fs::read(dir.path().join("delivery-label-D42.pdf"))?,
            b"%PDF-1.4 D42"
        );
        Ok(())
    }

    #[tokio::test]
    async fn download_failure_is_operational_failure() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/download-label/D404");
            then.status(404);
        });
        let dir = TempDir::new()?;
        let ctx = context_with(&server, &dir)?;

        let err = handle_download(
            &ctx,
            DownloadArgs {
                delivery_id: "D404".to_string(),
            },
        )
        .await
        .expect_err("label missing");

        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "Failed to download label. Please try again."
        );
        assert!(!dir.path().join("delivery-label-D404.pdf").exists());
        Ok(())
    }

    #[tokio::test]
    async fn dot_segment_delivery_id_is_rejected() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).body("%PDF-1.4");
        });
        let dir = TempDir::new()?;
        let ctx = context_with(&server, &dir)?;

        let err = handle_download(
            &ctx,
            DownloadArgs {
                delivery_id: " .. ".to_string(),
            },
        )
        .await
        .expect_err("dot segment");

        assert_eq!(err.exit_code(), 2);
        mock.assert_calls(0);
        Ok(())
    }

    #[tokio::test]
    async fn blank_delivery_id_is_rejected() -> Result<()> {
        let server = MockServer::start_async().await;
        let dir = TempDir::new()?;
        let ctx = context_with(&server, &dir)?;

        let err = handle_download(
            &ctx,
            DownloadArgs {
                delivery_id: "   ".to_string(),
            },
        )
        .await
        .expect_err("blank id");

        assert_eq!(err.exit_code(), 2);
        Ok(())
    }
}
