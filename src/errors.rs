use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server responded with {status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Authorization(&'static str),
    #[error("failed to load recipe details")]
    AggregateFetch(#[source] Box<ApiError>),
}

impl ApiError {
    /// The text a screen would put in its alert dialog.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Something went wrong. Please try again.".to_string(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Validation(message) | ApiError::Authorization(message) => {
                (*message).to_string()
            }
            ApiError::AggregateFetch(_) => {
                "Failed to load recipe details. Please try again later.".to_string()
            }
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::AggregateFetch(inner) => inner.status(),
            _ => None,
        }
    }
}
