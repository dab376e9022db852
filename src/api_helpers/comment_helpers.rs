use reqwest::Method;

use crate::{
    client::ApiClient, data_formats::CommentRequest, errors::ApiError, models::Comment,
};

use super::ensure_ok;

pub async fn get_comments_from_api(
    client: &ApiClient,
    recipe_id: i64,
) -> Result<Vec<Comment>, ApiError> {
    let response = client
        .request(Method::GET, &format!("/recipes/{recipe_id}/comments"))
        .send()
        .await?;
    let response = ensure_ok(response, "Failed to load comments.").await?;
    Ok(response.json().await?)
}

pub async fn create_comment_in_api(
    client: &ApiClient,
    recipe_id: i64,
    request: &CommentRequest,
) -> Result<(), ApiError> {
    let response = client
        .request(Method::POST, &format!("/recipes/{recipe_id}/comments"))
        .json(request)
        .send()
        .await?;
    ensure_ok(response, "Could not add comment.").await?;
    Ok(())
}

pub async fn update_comment_in_api(
    client: &ApiClient,
    recipe_id: i64,
    comment_id: i64,
    request: &CommentRequest,
) -> Result<(), ApiError> {
    let response = client
        .request(
            Method::PATCH,
            &format!("/recipes/{recipe_id}/comments/{comment_id}"),
        )
        .json(request)
        .send()
        .await?;
    ensure_ok(response, "Could not edit comment.").await?;
    Ok(())
}

pub async fn delete_comment_in_api(
    client: &ApiClient,
    recipe_id: i64,
    comment_id: i64,
) -> Result<(), ApiError> {
    let response = client
        .request(
            Method::DELETE,
            &format!("/recipes/{recipe_id}/comments/{comment_id}"),
        )
        .send()
        .await?;
    ensure_ok(response, "Could not delete comment.").await?;
    Ok(())
}
