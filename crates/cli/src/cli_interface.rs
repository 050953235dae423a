use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::commands::status::StatusArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimum log level (RUST_LOG directives still apply)
    #[clap(long, global = true, default_value = "info")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the admin server recognises the session as logged in
    Status(StatusArgs),
}
