//! Transfer Errors

use tracing::error;

use allot_app::domain::transfers::TransfersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: TransfersServiceError) -> ApiError {
    match error {
        TransfersServiceError::Format(_) | TransfersServiceError::Items(_) => {
            ApiError::bad_request(format!("Import failed: {error}"))
        }
        TransfersServiceError::Io { path, source } => {
            error!(path = %path.display(), "failed to write export: {source}");

            ApiError::internal_server_error()
        }
    }
}
