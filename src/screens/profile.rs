use crate::{
    api_helpers::{get_session_from_api, update_profile_in_api},
    client::ApiClient,
    data_formats::UpdateProfileRequest,
    errors::ApiError,
    models::{RecipeSummary, SessionUser},
};

/// The profile screen: the session user plus their favorites. A failed load is
/// terminal; the caller sends the user back to login.
#[derive(Debug, Clone)]
pub struct Profile {
    pub user: SessionUser,
}

impl Profile {
    pub async fn load(client: &ApiClient) -> Result<Self, ApiError> {
        let user = get_session_from_api(client).await?;
        Ok(Profile { user })
    }

    pub fn favorites(&self) -> &[RecipeSummary] {
        &self.user.favorites
    }

    /// Returns the success message to show. The password is required by the
    /// backend to confirm the change, so its absence never reaches the wire.
    pub async fn update_profile(
        &mut self,
        client: &ApiClient,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        if password.trim().is_empty() {
            return Err(ApiError::Validation(
                "Password is required to update the profile.",
            ));
        }
        let request = UpdateProfileRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = update_profile_in_api(client, self.user.id, &request).await?;
        self.user.username = username.to_string();
        self.user.email = email.to_string();
        Ok(response
            .message
            .unwrap_or_else(|| "Profile updated successfully!".to_string()))
    }
}
