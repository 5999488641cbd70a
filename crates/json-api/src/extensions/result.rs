//! Error mapping helpers for handler results.

use std::fmt::Display;

use tracing::error;

use crate::errors::ApiError;

pub(crate) trait ResultExt<T> {
    /// Log the failure under `context` and hide it behind a generic 500.
    fn or_500(self, context: &str) -> Result<T, ApiError>;

    /// Report the failure to the caller as a 400 prefixed with `context`.
    fn or_400(self, context: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|source| {
            error!(%source, "{context}");

            ApiError::internal_server_error()
        })
    }

    fn or_400(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|source| ApiError::bad_request(format!("{context}: {source}")))
    }
}
