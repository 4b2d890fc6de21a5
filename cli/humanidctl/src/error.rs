//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input is {len} bytes, the limit is {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("{invalid} of {total} names are invalid")]
    InvalidNames { invalid: usize, total: usize },

    #[error("{failed} of {total} names cannot be normalized")]
    Unnormalizable { failed: usize, total: usize },

    #[error("{failed} of {total} device IDs are invalid")]
    InvalidDeviceIds { failed: usize, total: usize },

    #[error("No names given")]
    NoInput,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InputTooLong { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Raise max_input_len in the config or pass --max-input-len.".yellow()
                );
            }
            CliError::InvalidNames { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `humanidctl normalize` to get valid names.".yellow()
                );
            }
            CliError::Unnormalizable { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: A name needs at least one ASCII letter or digit.".yellow()
                );
            }
            CliError::InvalidDeviceIds { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Device IDs look like `ios-abcd1234-my-phone`.".yellow()
                );
            }
            CliError::NoInput => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass names as arguments or one per line on stdin.".yellow()
                );
            }
        }
    }
}
