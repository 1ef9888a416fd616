//! Output renderers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use shiplabel_models::LabelResponse;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_label(label: &LabelResponse, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(label)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        OutputFormat::Text => print!("{}", format_label(label)),
    }
    Ok(())
}

/// Plain-text preview mirroring the label layout.
#[must_use]
pub(crate) fn format_label(label: &LabelResponse) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Delivery ID: {}", label.delivery_id);
    push_block(&mut text, "From:", &label.sender_name, &label.sender_address);
    push_block(&mut text, "To:", &label.receiver_name, &label.receiver_address);
    text
}

fn push_block(text: &mut String, heading: &str, name: &str, address: &str) {
    let _ = writeln!(text, "{heading}");
    let _ = writeln!(text, "  {name}");
    for line in address.lines() {
        let _ = writeln!(text, "  {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_label_keeps_address_lines_verbatim() {
        let label = LabelResponse {
            delivery_id: "D123".to_string(),
            sender_name: "Alice".to_string(),
            sender_address: "1 Main St\nSpringfield".to_string(),
            receiver_name: "Bob".to_string(),
            receiver_address: "2 Oak Ave".to_string(),
        };
        assert_eq!(
            format_label(&label),
            "Delivery ID: D123\nFrom:\n  Alice\n  1 Main St\n  Springfield\nTo:\n  Bob\n  2 Oak Ave\n"
        );
    }

    #[test]
    fn render_label_supports_both_formats() {
        let label = LabelResponse::for_delivery_id("D9");
        assert!(render_label(&label, OutputFormat::Text).is_ok());
        assert!(render_label(&label, OutputFormat::Json).is_ok());
    }
}
