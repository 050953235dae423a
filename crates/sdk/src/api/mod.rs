pub mod http;
mod types;
mod user;

pub use types::{ApiBaseConfig, ApiResponse, ApiResult, ApiSdkError, AuthConfig};
pub use user::{AuthenticationStatus, UserService};
