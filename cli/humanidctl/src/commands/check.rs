//! Check command (strict validation).

use anyhow::Result;
use clap::Args;
use dnsfence_humanid::{HumanId, HumanIdError, HumanIdLower};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{display_option, print_output};

use super::CommandContext;

/// Validate names as Human IDs without rewriting them.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Require lowercase letters only.
    #[arg(long)]
    lower: bool,

    /// Names to check. Read from stdin, one per line, if omitted.
    names: Vec<String>,
}

/// One checked name.
#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    #[tabled(rename = "Input")]
    input: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Error", display = "display_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let lower = self.lower;
        let inputs = ctx.inputs(self.names)?;
        let rows: Vec<CheckRow> = inputs
            .into_iter()
            .map(|input| check_row(input, lower))
            .collect();

        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidNames {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn validate(input: &str, lower: bool) -> Result<(), HumanIdError> {
    if lower {
        HumanIdLower::new(input).map(drop)
    } else {
        HumanId::new(input).map(drop)
    }
}

fn check_row(input: String, lower: bool) -> CheckRow {
    let error = validate(&input, lower).err().map(|e| e.to_string());

    CheckRow {
        input,
        valid: error.is_none(),
        error,
    }
}
