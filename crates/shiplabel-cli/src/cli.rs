//! Argument parsing, telemetry wiring, and command dispatch.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use shiplabel_config::{BackendConfig, ENV_API_URL, ENV_OUTPUT_DIR};
use shiplabel_core::{SessionGate, StubAuthenticator};
use shiplabel_models::{LabelField, LabelRequest};
use shiplabel_telemetry::{
    DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_version, init_logging,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::client::{AppContext, CliDependencies, CliError, CliResult, HttpLabelBackend};
use crate::commands::label::{handle_download, handle_generate};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OUTPUT_DIR: &str = ".";

/// Parses CLI arguments, executes the requested command, and reports the
/// outcome. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli.logging_config()) {
        eprintln!("warning: {err:#}");
    }

    let trace_id = Uuid::new_v4().to_string();
    let deps = match CliDependencies::from_env(&cli, &trace_id) {
        Ok(deps) => deps,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            return err.exit_code();
        }
    };

    let command = command_label(&cli.command);
    let span = tracing::info_span!(
        "command",
        command,
        trace_id = %trace_id,
        version = %build_version()
    );

    match dispatch(cli, &deps).instrument(span).await {
        Ok(()) => {
            tracing::debug!("command succeeded");
            0
        }
        Err(err) => {
            let exit_code = err.exit_code();
            eprintln!("error: {}", err.display_message());
            tracing::debug!(exit_code, "command failed");
            exit_code
        }
    }
}

async fn dispatch(cli: Cli, deps: &CliDependencies) -> CliResult<()> {
    let config = BackendConfig::from_override(cli.api_url.as_deref())
        .map_err(|err| CliError::validation(format!("invalid --api-url: {err}")))?;

    let mut session = SessionGate::new(StubAuthenticator);
    session
        .login()
        .map_err(|err| CliError::failure(anyhow!("session could not be opened: {err}")))?;

    let ctx = AppContext {
        backend: HttpLabelBackend::new(deps.client.clone(), config),
        output_dir: cli.output_dir,
        format: cli.output,
    };

    match cli.command {
        Command::Generate(args) => handle_generate(&ctx, args).await,
        Command::Download(args) => handle_download(&ctx, args).await,
    }
}

#[derive(Parser)]
#[command(
    name = "shiplabel",
    version,
    about = "Generate and download delivery labels"
)]
pub(crate) struct Cli {
    #[arg(long, global = true, env = ENV_API_URL, help = "Label backend origin")]
    pub(crate) api_url: Option<String>,
    #[arg(
        long,
        global = true,
        env = ENV_OUTPUT_DIR,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory downloaded PDFs are written to"
    )]
    pub(crate) output_dir: PathBuf,
    #[arg(
        long,
        global = true,
        env = "SHIPLABEL_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    #[arg(long, global = true, help = "Log format: json or pretty")]
    pub(crate) log_format: Option<LogFormat>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Select how generated labels are printed"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Cli {
    fn logging_config(&self) -> LoggingConfig<'_> {
        LoggingConfig {
            level: &self.log_level,
            format: self.log_format.unwrap_or_else(LogFormat::infer),
            build_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Submit sender and receiver details and print the issued label.
    Generate(GenerateArgs),
    /// Save the PDF of a previously issued label.
    Download(DownloadArgs),
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    #[arg(long)]
    pub(crate) sender_name: Option<String>,
    #[arg(long, help = "Sender address; embed newlines for multi-line addresses")]
    pub(crate) sender_address: Option<String>,
    #[arg(long)]
    pub(crate) receiver_name: Option<String>,
    #[arg(long, help = "Receiver address; embed newlines for multi-line addresses")]
    pub(crate) receiver_address: Option<String>,
    #[arg(long, help = "Also download the PDF after generating")]
    pub(crate) download: bool,
}

impl GenerateArgs {
    /// Raw field values in form order; absent flags become empty inputs.
    pub(crate) fn into_request(self) -> LabelRequest {
        let mut request = LabelRequest::default();
        let values = [
            (LabelField::SenderName, self.sender_name),
            (LabelField::SenderAddress, self.sender_address),
            (LabelField::ReceiverName, self.receiver_name),
            (LabelField::ReceiverAddress, self.receiver_address),
        ];
        for (field, value) in values {
            request.set(field, value.unwrap_or_default());
        }
        request
    }
}

#[derive(Args)]
pub(crate) struct DownloadArgs {
    #[arg(help = "Delivery identifier issued by the backend")]
    pub(crate) delivery_id: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Generate(_) => "generate",
        Command::Download(_) => "download",
    }
}
