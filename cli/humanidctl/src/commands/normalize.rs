//! Normalize command.

use anyhow::Result;
use clap::Args;
use dnsfence_humanid::HumanIdParser;
use serde::Serialize;
use tabled::Tabled;
use tracing::warn;

use crate::error::CliError;
use crate::output::{display_option, print_output};

use super::CommandContext;

/// Rewrite names into valid Human IDs.
#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Names to normalize. Read from stdin, one per line, if omitted.
    names: Vec<String>,
}

/// One normalized name.
#[derive(Debug, Serialize, Tabled)]
struct NormalizeRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Human ID", display = "display_option")]
    human_id: Option<String>,

    #[tabled(rename = "Changed")]
    changed: bool,

    #[tabled(rename = "Error", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl NormalizeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = ctx.inputs(self.names)?;
        let rows: Vec<NormalizeRow> = inputs
            .into_iter()
            .map(|input| normalize_row(&ctx.parser, input))
            .collect();

        print_output(&rows, ctx.format);

        let failed = rows.iter().filter(|r| r.error.is_some()).count();
        if failed > 0 {
            return Err(CliError::Unnormalizable {
                failed,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn normalize_row(parser: &HumanIdParser, input: String) -> NormalizeRow {
    match parser.parse_normalized(input.as_str()) {
        Ok(id) => NormalizeRow {
            changed: id != input.as_str(),
            human_id: Some(id.into_string()),
            input,
            error: None,
        },
        Err(err) => {
            warn!(error = %err, "cannot normalize name");

            NormalizeRow {
                input,
                human_id: None,
                changed: false,
                error: Some(err.to_string()),
            }
        }
    }
}
