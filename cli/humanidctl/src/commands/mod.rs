//! CLI commands.

mod check;
mod device_id;
mod normalize;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dnsfence_humanid::HumanIdParser;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// humanidctl - Check and normalize device Human IDs.
#[derive(Debug, Parser)]
#[command(name = "humanidctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Path to the config file.
    #[arg(long, global = true, env = "HUMANIDCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Reject inputs longer than this many bytes.
    #[arg(long, global = true, env = "HUMANIDCTL_MAX_INPUT_LEN")]
    max_input_len: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate names without changing them.
    Check(check::CheckCommand),

    /// Rewrite names into valid Human IDs.
    Normalize(normalize::NormalizeCommand),

    /// Parse extended device IDs and resolve their devices.
    DeviceId(device_id::DeviceIdCommand),
}

impl Cli {
    /// Returns the requested log verbosity.
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Returns true if logs should be JSON.
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        // Flags win over the config file.
        let format = self
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from_name)
            .unwrap_or_default();

        let ctx = CommandContext {
            format,
            max_input_len: self.max_input_len.unwrap_or(config.max_input_len),
            parser: HumanIdParser::new(),
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Normalize(cmd) => cmd.run(ctx),
            Commands::DeviceId(cmd) => cmd.run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub max_input_len: usize,
    pub parser: HumanIdParser,
}

impl CommandContext {
    /// Returns `args`, or the lines of stdin if there are none.
    pub fn inputs(&self, args: Vec<String>) -> Result<Vec<String>> {
        if !args.is_empty() {
            return self.check_lengths(args);
        }

        let stdin = io::stdin();
        let lines = read_lines(stdin.lock())?;

        self.check_lengths(lines)
    }

    /// Rejects the batch if any input exceeds the length cap.
    fn check_lengths(&self, inputs: Vec<String>) -> Result<Vec<String>> {
        if inputs.is_empty() {
            return Err(CliError::NoInput.into());
        }

        if let Some(long) = inputs.iter().find(|s| s.len() > self.max_input_len) {
            return Err(CliError::InputTooLong {
                len: long.len(),
                max: self.max_input_len,
            }
            .into());
        }

        Ok(inputs)
    }
}

/// Reads non-empty lines from `r`.
fn read_lines(r: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in r.lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}
