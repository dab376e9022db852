use serde::{Deserialize, Serialize};

/// Mutation endpoints answer with at most a `message` field, and error bodies
/// carry one opportunistically. Anything else in the body is ignored.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
