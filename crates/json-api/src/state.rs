//! State

use std::sync::Arc;

use allot_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) max_upload_bytes: u64,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, max_upload_bytes: u64) -> Self {
        Self {
            app,
            max_upload_bytes,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, max_upload_bytes: u64) -> Arc<Self> {
        Arc::new(Self::new(app, max_upload_bytes))
    }
}
