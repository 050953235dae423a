use clap::Parser;

use crate::{
    cli_interface::{Cli, Commands},
    commands::status,
    environment::load_env,
    error::CliError,
    logger::setup_logger,
};

mod cli_interface;
mod commands;
mod console;
mod environment;
mod error;
mod logger;

pub use console::{print_error_message, print_success_message};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    load_env();

    let cli = Cli::parse();
    setup_logger(cli.log_level);

    match &cli.command {
        Commands::Status(args) => {
            status::handle_status(args).await?;
        }
    }

    Ok(())
}
