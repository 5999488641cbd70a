//! App Router

use salvo::{Router, size_limiter::max_size};

use crate::{budget, healthcheck, items, observability::metrics_handler, plans, transfers};

/// Routes for every endpoint, without state or middleware.
pub(crate) fn app_router(max_upload_bytes: u64) -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("items")
                .get(items::index::handler)
                .post(items::create::handler)
                .delete(items::clear::handler)
                .push(
                    Router::with_path("{name}")
                        .put(items::update::handler)
                        .delete(items::delete::handler),
                ),
        )
        .push(Router::with_path("update_variable").post(items::submit::handler))
        .push(
            Router::with_path("budget")
                .get(budget::get::handler)
                .put(budget::update::handler),
        )
        .push(Router::with_path("solve").post(plans::solve::handler))
        .push(Router::with_path("export").post(transfers::export::handler))
        .push(Router::with_path("download").get(transfers::download::handler))
        .push(
            Router::with_path("import")
                .hoop(max_size(max_upload_bytes))
                .post(transfers::import::handler),
        )
}
