use reqwest::Method;

use crate::{client::ApiClient, errors::ApiError};

use super::ensure_ok;

pub async fn add_favorite_in_api(client: &ApiClient, recipe_id: i64) -> Result<(), ApiError> {
    let response = client
        .request(Method::POST, &format!("/recipes/{recipe_id}/favorites"))
        .send()
        .await?;
    ensure_ok(response, "Could not add recipe to favorites.").await?;
    Ok(())
}

pub async fn remove_favorite_in_api(client: &ApiClient, recipe_id: i64) -> Result<(), ApiError> {
    let response = client
        .request(Method::DELETE, &format!("/recipes/{recipe_id}/favorites"))
        .send()
        .await?;
    ensure_ok(response, "Could not remove recipe from favorites.").await?;
    Ok(())
}
