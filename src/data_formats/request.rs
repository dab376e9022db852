use serde::{Deserialize, Serialize};

use crate::models::join_tags;

// ----------------- Auth Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The password is always sent; the backend requires it to confirm the change.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ----------------- Recipe Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    /// Comma-joined on the wire.
    pub dietary_tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CreateRecipeRequest {
    pub fn new(
        title: &str,
        ingredients: &str,
        instructions: &str,
        dietary_tags: &[String],
        image_url: Option<String>,
    ) -> Self {
        CreateRecipeRequest {
            title: title.to_string(),
            ingredients: ingredients.to_string(),
            instructions: instructions.to_string(),
            dietary_tags: join_tags(dietary_tags),
            image_url,
        }
    }
}

/// A PATCH sends only the fields the user actually edited.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Comma-joined on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// ----------------- Comment Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct CommentRequest {
    pub content: String,
}
