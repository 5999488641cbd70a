//! Plan Errors

use tracing::error;

use allot_app::domain::plans::PlansServiceError;

use crate::{errors::ApiError, observability::SolveOutcome};

/// Map a failed solve onto a response and the outcome recorded for it.
pub(crate) fn into_api_error(error: &PlansServiceError) -> (ApiError, SolveOutcome) {
    if error.is_infeasible() {
        return (ApiError::unprocessable(error.to_string()), SolveOutcome::Infeasible);
    }

    if error.is_unbounded() {
        return (ApiError::unprocessable(error.to_string()), SolveOutcome::Unbounded);
    }

    match error {
        PlansServiceError::Model(source) => {
            (ApiError::bad_request(source.to_string()), SolveOutcome::Invalid)
        }
        PlansServiceError::Solver(source) => {
            error!("failed to solve purchase plan: {source}");

            (ApiError::internal_server_error(), SolveOutcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use allot::prelude::{ModelError, SolverError};
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn infeasible_maps_to_422() {
        let (error, outcome) = into_api_error(&PlansServiceError::Solver(SolverError::Infeasible));

        assert_eq!(
            error,
            ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "no purchase plan satisfies the item bounds within the budget"
            )
        );
        assert_eq!(outcome, SolveOutcome::Infeasible);
    }

    #[test]
    fn duplicate_name_maps_to_400() {
        let (error, outcome) =
            into_api_error(&PlansServiceError::Model(ModelError::DuplicateName("a".to_string())));

        assert_eq!(outcome, SolveOutcome::Invalid);
        assert_eq!(
            error,
            ApiError::bad_request(ModelError::DuplicateName("a".to_string()).to_string())
        );
    }

    #[test]
    fn internal_failures_map_to_500() {
        let (error, outcome) = into_api_error(&PlansServiceError::Solver(
            SolverError::InvariantViolation { message: "boom" },
        ));

        assert_eq!(error, ApiError::internal_server_error());
        assert_eq!(outcome, SolveOutcome::Failed);
    }
}
