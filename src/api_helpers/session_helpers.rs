use reqwest::Method;

use crate::{
    client::ApiClient,
    data_formats::{LoginRequest, MessageResponse, SignupRequest, UpdateProfileRequest},
    errors::ApiError,
    models::SessionUser,
};

use super::ensure_ok;

/// Resolves the current user from the session cookie. A non-2xx answer means
/// there is no usable session and the caller must fall back to login.
pub async fn get_session_from_api(client: &ApiClient) -> Result<SessionUser, ApiError> {
    let response = client.request(Method::GET, "/api/users/session").send().await?;
    let response = ensure_ok(response, "Failed to load user profile.").await?;
    Ok(response.json().await?)
}

pub async fn login_in_api(client: &ApiClient, request: &LoginRequest) -> Result<(), ApiError> {
    let response = client
        .request(Method::POST, "/api/auth/login")
        .json(request)
        .send()
        .await?;
    ensure_ok(response, "Could not log in. Please try again.").await?;
    Ok(())
}

pub async fn signup_in_api(client: &ApiClient, request: &SignupRequest) -> Result<(), ApiError> {
    let response = client
        .request(Method::POST, "/api/auth/signup")
        .json(request)
        .send()
        .await?;
    ensure_ok(response, "Could not sign up. Please try again.").await?;
    Ok(())
}

pub async fn logout_in_api(client: &ApiClient) -> Result<(), ApiError> {
    let response = client.request(Method::POST, "/api/auth/logout").send().await?;
    ensure_ok(response, "Unable to logout. Please try again.").await?;
    Ok(())
}

pub async fn update_profile_in_api(
    client: &ApiClient,
    user_id: i64,
    request: &UpdateProfileRequest,
) -> Result<MessageResponse, ApiError> {
    let response = client
        .request(Method::PUT, &format!("/api/users/{user_id}/update-info"))
        .json(request)
        .send()
        .await?;
    let response = ensure_ok(response, "Failed to update profile.").await?;
    Ok(response.json().await.unwrap_or_default())
}
