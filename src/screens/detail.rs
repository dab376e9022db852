use tracing::debug;

use crate::{
    api_helpers::{
        add_favorite_in_api, create_comment_in_api, delete_comment_in_api, delete_recipe_in_api,
        get_comments_from_api, get_recipe_from_api, get_session_from_api, remove_favorite_in_api,
        update_comment_in_api, update_recipe_in_api,
    },
    client::ApiClient,
    data_formats::{CommentRequest, UpdateRecipeRequest},
    errors::ApiError,
    models::{join_tags, Comment, Recipe},
};

/// Everything the detail screen shows, merged from the three concurrent
/// fetches (recipe, comments, session).
#[derive(Debug, Clone)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub comments: Vec<Comment>,
    pub viewer_id: i64,
    pub is_favorite: bool,
}

/// Pending edits for an owned recipe. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct RecipeEdit {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub dietary_tags: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl RecipeDetails {
    /// Joins the three fetches; all must succeed before anything is committed.
    pub async fn load(client: &ApiClient, recipe_id: i64) -> Result<Self, ApiError> {
        let (recipe, comments, user) = tokio::try_join!(
            get_recipe_from_api(client, recipe_id),
            get_comments_from_api(client, recipe_id),
            get_session_from_api(client),
        )
        .map_err(|error| ApiError::AggregateFetch(Box::new(error)))?;

        debug!(recipe_id, comments = comments.len(), "loaded recipe details");
        let is_favorite = user.is_favorite(recipe.id);
        Ok(RecipeDetails {
            recipe,
            comments,
            viewer_id: user.id,
            is_favorite,
        })
    }

    /// Full re-aggregation. This is also where optimistic favorite patches get
    /// reconciled against the server.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        *self = RecipeDetails::load(client, self.recipe.id).await?;
        Ok(())
    }

    /// Advisory only; the server re-checks ownership on every mutation.
    pub fn is_owner(&self) -> bool {
        self.recipe.owner_id == self.viewer_id
    }

    // ----------------- Comments -----------------

    pub async fn add_comment(&mut self, client: &ApiClient, content: &str) -> Result<(), ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::Validation("Comment cannot be empty."));
        }
        let request = CommentRequest {
            content: content.to_string(),
        };
        create_comment_in_api(client, self.recipe.id, &request).await?;
        self.refresh(client).await
    }

    pub async fn edit_comment(
        &mut self,
        client: &ApiClient,
        comment_id: i64,
        content: &str,
    ) -> Result<(), ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::Validation("Comment cannot be empty."));
        }
        let request = CommentRequest {
            content: content.to_string(),
        };
        update_comment_in_api(client, self.recipe.id, comment_id, &request).await?;
        self.refresh(client).await
    }

    pub async fn delete_comment(
        &mut self,
        client: &ApiClient,
        comment_id: i64,
    ) -> Result<(), ApiError> {
        delete_comment_in_api(client, self.recipe.id, comment_id).await?;
        self.refresh(client).await
    }

    // ----------------- Favorites -----------------

    pub async fn add_favorite(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        add_favorite_in_api(client, self.recipe.id).await?;
        self.mark_favorited();
        Ok(())
    }

    pub async fn remove_favorite(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        remove_favorite_in_api(client, self.recipe.id).await?;
        self.mark_unfavorited();
        Ok(())
    }

    fn mark_favorited(&mut self) {
        self.is_favorite = true;
        self.recipe.favorites_count += 1;
    }

    fn mark_unfavorited(&mut self) {
        self.is_favorite = false;
        // Never below zero, whatever order removals land in.
        self.recipe.favorites_count = (self.recipe.favorites_count - 1).max(0);
    }

    // ----------------- Recipe -----------------

    pub async fn edit_recipe(
        &mut self,
        client: &ApiClient,
        edit: RecipeEdit,
    ) -> Result<(), ApiError> {
        if !self.is_owner() {
            return Err(ApiError::Authorization(
                "You are not authorized to edit this recipe.",
            ));
        }
        let request = UpdateRecipeRequest {
            title: edit.title,
            ingredients: edit.ingredients,
            instructions: edit.instructions,
            dietary_tags: edit.dietary_tags.as_deref().map(join_tags),
            image_url: edit.image_url,
        };
        update_recipe_in_api(client, self.recipe.id, &request).await?;
        self.refresh(client).await
    }

    /// On success the screen is done; the caller navigates back to the feed.
    pub async fn delete_recipe(&self, client: &ApiClient) -> Result<(), ApiError> {
        if !self.is_owner() {
            return Err(ApiError::Authorization(
                "You are not authorized to delete this recipe.",
            ));
        }
        delete_recipe_in_api(client, self.recipe.id).await
    }
}
