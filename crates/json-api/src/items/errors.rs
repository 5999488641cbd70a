//! Item Errors

use allot_app::domain::items::ItemsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ItemsServiceError) -> ApiError {
    match error {
        ItemsServiceError::AlreadyExists(_) => ApiError::conflict(error.to_string()),
        ItemsServiceError::NotFound(_) => ApiError::not_found(error.to_string()),
        ItemsServiceError::InvalidData(_) => ApiError::bad_request(error.to_string()),
    }
}
