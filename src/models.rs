use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default, deserialize_with = "deserialize_dietary_tags")]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub owner_id: i64,
    pub owner_username: String,
    #[serde(default)]
    pub favorites_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// `editedAt` equals `createdAt` until the comment is actually edited.
    pub fn is_edited(&self) -> bool {
        self.edited_at.map_or(false, |edited| edited != self.created_at)
    }
}

/// The shape favorites arrive in on the session payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub favorites: Vec<RecipeSummary>,
}

impl SessionUser {
    pub fn is_favorite(&self, recipe_id: i64) -> bool {
        self.favorites.iter().any(|favorite| favorite.id == recipe_id)
    }
}

/// Splits a comma-joined tag string into trimmed, non-empty tags in order.
pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// The transport form of a tag list is the comma-joined string.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

// The backend sends `dietaryTags` as either a comma-joined string or an
// array, and older recipes omit the field entirely.
fn deserialize_dietary_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RawTags::List(tags)) => tags,
        Some(RawTags::Joined(joined)) => split_tags(&joined),
    })
}
