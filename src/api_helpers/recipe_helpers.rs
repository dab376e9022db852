use reqwest::Method;

use crate::{
    client::ApiClient,
    data_formats::{CreateRecipeRequest, UpdateRecipeRequest},
    errors::ApiError,
    models::Recipe,
};

use super::ensure_ok;

pub async fn get_recipe_from_api(client: &ApiClient, recipe_id: i64) -> Result<Recipe, ApiError> {
    let response = client
        .request(Method::GET, &format!("/recipes/{recipe_id}/details"))
        .send()
        .await?;
    let response = ensure_ok(response, "Failed to load recipe details.").await?;
    Ok(response.json().await?)
}

pub async fn list_recipes_from_api(client: &ApiClient) -> Result<Vec<Recipe>, ApiError> {
    let response = client.request(Method::GET, "/recipes/all").send().await?;
    let response = ensure_ok(response, "Failed to fetch recipes.").await?;
    Ok(response.json().await?)
}

pub async fn create_recipe_in_api(
    client: &ApiClient,
    request: &CreateRecipeRequest,
) -> Result<(), ApiError> {
    let response = client
        .request(Method::POST, "/recipes")
        .json(request)
        .send()
        .await?;
    ensure_ok(response, "Could not create recipe.").await?;
    Ok(())
}

pub async fn update_recipe_in_api(
    client: &ApiClient,
    recipe_id: i64,
    request: &UpdateRecipeRequest,
) -> Result<(), ApiError> {
    let response = client
        .request(Method::PATCH, &format!("/recipes/{recipe_id}"))
        .json(request)
        .send()
        .await?;
    ensure_ok(response, "Could not edit recipe.").await?;
    Ok(())
}

pub async fn delete_recipe_in_api(client: &ApiClient, recipe_id: i64) -> Result<(), ApiError> {
    let response = client
        .request(Method::DELETE, &format!("/recipes/{recipe_id}"))
        .send()
        .await?;
    ensure_ok(response, "Could not delete recipe.").await?;
    Ok(())
}
