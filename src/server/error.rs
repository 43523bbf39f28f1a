use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::MenuError;
use crate::models::AvailableItems;
use crate::selector::Policy;

pub const INSUFFICIENT_ITEMS_MESSAGE: &str =
    "Insufficient menu items. Please ensure there is at least one item in each category (main, side, drink).";
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate menu combinations. Please check your menu items.";
pub const ALL_SERVED_MESSAGE: &str =
    "All unique menu combinations have been generated. Please reset or add more items.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Non-success outcomes of the menu endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// A category bucket is empty.
    InsufficientItems(AvailableItems),
    /// The selector returned an empty batch.
    NothingNew {
        policy: Policy,
        available: AvailableItems,
    },
    /// Any other fault.
    Internal {
        error: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn from_menu_error(err: MenuError, debug: bool) -> Self {
        match err {
            MenuError::EmptyCategory(available) => ApiError::InsufficientItems(available),
            other => ApiError::Internal {
                error: other.to_string(),
                details: debug.then(|| format!("{:?}", other)),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InsufficientItems(available) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": INSUFFICIENT_ITEMS_MESSAGE,
                    "available_items": available,
                })),
            )
                .into_response(),
            ApiError::NothingNew { policy, available } => {
                let (status, message) = match policy {
                    Policy::Greedy => {
                        (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED_MESSAGE)
                    }
                    Policy::Diverse => (StatusCode::OK, ALL_SERVED_MESSAGE),
                };
                (
                    status,
                    Json(json!({
                        "status": "error",
                        "message": message,
                        "available_items": available,
                    })),
                )
                    .into_response()
            }
            ApiError::Internal { error, details } => {
                tracing::error!(error = %error, "menu request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": "error",
                        "message": UNEXPECTED_ERROR_MESSAGE,
                        "error": error,
                        "details": details,
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_category_maps_to_insufficient() {
        let err =
            ApiError::from_menu_error(MenuError::EmptyCategory(AvailableItems::default()), true);
        assert!(matches!(err, ApiError::InsufficientItems(_)));
    }

    #[test]
    fn test_details_only_in_debug() {
        let quiet = ApiError::from_menu_error(MenuError::Internal("boom".to_string()), false);
        assert!(matches!(quiet, ApiError::Internal { details: None, .. }));

        let loud = ApiError::from_menu_error(MenuError::Internal("boom".to_string()), true);
        assert!(matches!(loud, ApiError::Internal { details: Some(_), .. }));
    }

    #[test]
    fn test_status_codes() {
        let available = AvailableItems::default();
        let bad = ApiError::InsufficientItems(available.clone()).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let greedy = ApiError::NothingNew {
            policy: Policy::Greedy,
            available: available.clone(),
        }
        .into_response();
        assert_eq!(greedy.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let diverse = ApiError::NothingNew {
            policy: Policy::Diverse,
            available,
        }
        .into_response();
        assert_eq!(diverse.status(), StatusCode::OK);
    }
}
