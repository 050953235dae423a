use thiserror::Error;

/// Errors that can occur while checking the authentication status
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Password given without a username")]
    MissingUsername,

    #[error("Not authenticated against {0}")]
    NotAuthenticated(String),
}
