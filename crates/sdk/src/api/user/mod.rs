use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use crate::api::{
    http::HttpClient,
    types::{ApiResponse, ApiResult},
};

const AUTHENTICATION_STATUS_ENDPOINT: &str = "authentication-status";

/// Body of `GET /authentication-status`.
///
/// Any JSON shape is accepted; only the `authenticated` field is looked at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthenticationStatus(pub Value);

impl AuthenticationStatus {
    /// Loose truthiness of the `authenticated` field; absent reads as `false`.
    pub fn authenticated(&self) -> bool {
        self.0.get("authenticated").is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Clone)]
pub struct UserService {
    client: Arc<HttpClient>,
}

impl UserService {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fetch the raw authentication status, surfacing every failure.
    pub async fn status(&self) -> ApiResult<ApiResponse<AuthenticationStatus>> {
        self.client.get_response(AUTHENTICATION_STATUS_ENDPOINT).await
    }

    /// Whether the server recognises the current session as logged in.
    ///
    /// `true` only for a 200 whose body has a truthy `authenticated` field. Any
    /// failure (transport, non-2xx, undecodable body) is logged and reported as
    /// `false`, so a failed check looks the same as being logged out.
    pub async fn check_user_logged_in(&self) -> bool {
        match self.status().await {
            Ok(response) => {
                response.status == StatusCode::OK
                    && response.body.is_some_and(|body| body.authenticated())
            }
            Err(e) => {
                error!("authentication status check failed: {}", e);
                false
            }
        }
    }
}
