use tracing::debug;

use crate::{
    api_helpers::{get_session_from_api, login_in_api, logout_in_api, signup_in_api},
    client::ApiClient,
    data_formats::{LoginRequest, SignupRequest},
    errors::ApiError,
    models::SessionUser,
};

/// Logs in and resolves the session, so the caller lands on the same
/// `SessionUser` every other screen works from.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<SessionUser, ApiError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ApiError::Validation("Please fill out all fields."));
    }
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    login_in_api(client, &request).await?;
    let user = get_session_from_api(client).await?;
    debug!(user_id = user.id, "logged in");
    Ok(user)
}

pub async fn signup(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    if username.trim().is_empty() || email.trim().is_empty() || password.trim().is_empty() {
        return Err(ApiError::Validation("Please fill out all fields."));
    }
    let request = SignupRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    signup_in_api(client, &request).await
}

pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    logout_in_api(client).await
}
