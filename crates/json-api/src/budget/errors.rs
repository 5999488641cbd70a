//! Budget Errors

use allot_app::domain::budget::BudgetServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: BudgetServiceError) -> ApiError {
    match error {
        BudgetServiceError::InvalidBudget(_) => ApiError::bad_request(error.to_string()),
    }
}
