use thiserror::Error;

use crate::commands::error::StatusError;

/// Top-level CLI error that composes all module-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Status error: {0}")]
    Status(#[from] StatusError),
}
