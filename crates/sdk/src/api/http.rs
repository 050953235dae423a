use base64::{Engine as _, engine::general_purpose};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;

use crate::api::types::{ApiBaseConfig, ApiResponse, ApiResult, ApiSdkError, AuthConfig};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_config: ApiBaseConfig,
}

impl HttpClient {
    pub fn new(base_config: ApiBaseConfig) -> Self {
        Self { client: Client::new(), base_config }
    }

    /// Use a caller-built `reqwest::Client`, e.g. one with a cookie store holding the session.
    pub fn with_client(client: Client, base_config: ApiBaseConfig) -> Self {
        Self { client, base_config }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_config.server_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn build_headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let AuthConfig::BasicAuth { username, password } = &self.base_config.auth {
            let encoded = general_purpose::STANDARD.encode(format!("{}:{}", username, password));
            let value = HeaderValue::from_str(&format!("Basic {}", encoded)).map_err(|e| {
                ApiSdkError::ConfigError(format!("invalid basic auth header: {}", e))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// GET `endpoint`, failing on non-2xx statuses, and decode the body if there is one.
    pub async fn get_response<T>(&self, endpoint: &str) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(endpoint);
        let headers = self.build_headers()?;

        let response = self.client.get(&url).headers(headers).send().await?.error_for_status()?;
        let status = response.status();
        // redirects reqwest did not follow (304, 300 without Location) still count as failures
        if !status.is_success() {
            return Err(ApiSdkError::UnexpectedStatus { status, url });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(is_json_whitespace) {
            return Ok(ApiResponse { status, body: None });
        }

        let body = serde_json::from_slice::<Option<T>>(&bytes).map_err(|e| {
            ApiSdkError::SerializationError(format!("failed to decode response from {}: {}", url, e))
        })?;

        Ok(ApiResponse { status, body })
    }
}

fn is_json_whitespace(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
