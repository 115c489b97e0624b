//! Account endpoints: signup, login, logout, and the service health probe.

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, MessageResponse, SignupRequest};

/// Create a new account.
///
/// POST /v1/auth/signup returns a session token for the new user.
pub async fn signup(client: &ApiClient, req: &SignupRequest) -> Result<AuthResponse, ApiError> {
    client.post("/v1/auth/signup", req).await
}

/// Exchange credentials for a session token.
///
/// POST /v1/auth/login.
pub async fn login(client: &ApiClient, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.post("/v1/auth/login", req).await
}

/// Invalidate the current session on the service side.
///
/// GET /v1/auth/logout. The stored token is attached automatically; clearing
/// it locally afterwards is the caller's decision.
pub async fn logout(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    client.get("/v1/auth/logout").await
}

/// Probe the service root route.
///
/// GET / answers `{"message": "Server is running"}` when the service is up.
pub async fn health(client: &ApiClient) -> Result<MessageResponse, ApiError> {
    client.get("/").await
}
