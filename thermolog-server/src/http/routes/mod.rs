//! Route handlers organized by resource

pub mod data;
pub mod health;
pub mod home;

use super::error::ApiError;

/// Fallback for verbs a path does not serve.
pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
