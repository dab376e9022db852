use crate::{
    api_helpers::create_recipe_in_api, client::ApiClient, data_formats::CreateRecipeRequest,
    errors::ApiError,
};

/// The add-recipe form. Tags and image are optional; everything else is
/// required before anything is sent.
pub async fn create_recipe(
    client: &ApiClient,
    title: &str,
    ingredients: &str,
    instructions: &str,
    dietary_tags: &[String],
    image_url: Option<String>,
) -> Result<(), ApiError> {
    if title.trim().is_empty() || ingredients.trim().is_empty() || instructions.trim().is_empty() {
        return Err(ApiError::Validation("Please fill in all fields"));
    }
    let request = CreateRecipeRequest::new(title, ingredients, instructions, dietary_tags, image_url);
    create_recipe_in_api(client, &request).await
}
