use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ApiBaseConfig {
    pub server_url: String,
    pub auth: AuthConfig,
}

impl ApiBaseConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self { server_url: server_url.into(), auth: AuthConfig::None }
    }

    pub fn with_basic_auth(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            auth: AuthConfig::BasicAuth { username: username.into(), password: password.into() },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// Rely on whatever the underlying client carries (cookie store, proxy auth).
    #[default]
    None,
    BasicAuth {
        username: String,
        password: String,
    },
}

#[derive(Error, Debug)]
pub enum ApiSdkError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: StatusCode, url: String },
}

pub type ApiResult<T> = Result<T, ApiSdkError>;

/// A successful (2xx) response with its status kept alongside the decoded body.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    /// `None` when the server sent no body or a JSON `null`.
    pub body: Option<T>,
}
