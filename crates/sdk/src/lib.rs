mod api;

pub use api::{
    ApiBaseConfig, ApiResponse, ApiResult, ApiSdkError, AuthConfig, AuthenticationStatus,
    UserService, http::HttpClient,
};
use std::sync::Arc;

pub struct SDK {
    pub user: UserService,
}

impl SDK {
    /// Create a new SDK instance without credentials
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::from_config(ApiBaseConfig::new(server_url))
    }

    /// Create a new SDK instance with basic authentication
    pub fn with_basic_auth(
        server_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::from_config(ApiBaseConfig::with_basic_auth(server_url, username, password))
    }

    pub fn from_config(config: ApiBaseConfig) -> Self {
        Self::from_http_client(Arc::new(HttpClient::new(config)))
    }

    /// Build on a shared, externally constructed client
    pub fn from_http_client(client: Arc<HttpClient>) -> Self {
        Self { user: UserService::new(Arc::clone(&client)) }
    }

    /// Check whether the server recognises the configured session as logged in
    pub async fn is_logged_in(&self) -> bool {
        self.user.check_user_logged_in().await
    }
}
