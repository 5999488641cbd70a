//! Shared state lookup from the request depot.

use std::sync::Arc;

use salvo::prelude::Depot;
use tracing::error;

use crate::{errors::ApiError, state::State};

pub(crate) trait DepotExt {
    /// The injected [`State`], or a 500 when the router was built without it.
    fn app_state(&self) -> Result<&Arc<State>, ApiError>;
}

impl DepotExt for Depot {
    fn app_state(&self) -> Result<&Arc<State>, ApiError> {
        self.obtain::<Arc<State>>().map_err(|missing| {
            error!(found = missing.is_some(), "application state not injected into depot");

            ApiError::internal_server_error()
        })
    }
}
