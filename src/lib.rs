mod api_helpers;
mod client;
mod data_formats;
mod errors;
mod models;
mod screens;

pub use client::{ApiClient, BASE_URL_ENV};
pub use data_formats::*;
pub use errors::ApiError;
pub use models::*;
pub use screens::*;
