use alfio_admin::SDK;
use clap::Args;
use tracing::debug;

use crate::{commands::error::StatusError, print_error_message, print_success_message};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Base URL of the admin server
    #[clap(long, env = "ALFIO_SERVER_URL", default_value = "http://localhost:8080")]
    pub server_url: String,

    /// Basic auth username
    #[clap(long, env = "ALFIO_ADMIN_USERNAME")]
    pub username: Option<String>,

    /// Basic auth password
    #[clap(long, env = "ALFIO_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

fn create_sdk(args: &StatusArgs) -> Result<SDK, StatusError> {
    match (&args.username, &args.password) {
        (Some(username), password) => Ok(SDK::with_basic_auth(
            args.server_url.clone(),
            username.clone(),
            password.clone().unwrap_or_default(),
        )),
        (None, Some(_)) => Err(StatusError::MissingUsername),
        (None, None) => Ok(SDK::new(args.server_url.clone())),
    }
}

/// Prints the authentication status and fails when the session is not logged in.
pub async fn handle_status(args: &StatusArgs) -> Result<(), StatusError> {
    let sdk = create_sdk(args).inspect_err(|e| print_error_message(&e.to_string()))?;

    debug!("checking authentication status against {}", args.server_url);

    if sdk.is_logged_in().await {
        print_success_message(&format!("✅ Authenticated against {}", args.server_url));
        Ok(())
    } else {
        print_error_message(&format!("❌ Not authenticated against {}", args.server_url));
        Err(StatusError::NotAuthenticated(args.server_url.clone()))
    }
}
