use reqwest::Response;

use crate::{data_formats::MessageResponse, errors::ApiError};

mod comment_helpers;
mod favorite_helpers;
mod recipe_helpers;
mod session_helpers;

pub use comment_helpers::*;
pub use favorite_helpers::*;
pub use recipe_helpers::*;
pub use session_helpers::*;

// ----------------- Helper Functions -----------------

/// Any non-2xx status is a failure. The body is parsed for a `message` field
/// to surface to the user; `fallback` covers bodies without one.
pub(crate) async fn ensure_ok(
    response: Response,
    fallback: &'static str,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_string());
    Err(ApiError::Server { status, message })
}
