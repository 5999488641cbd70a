//! Request logging thresholds read by the middleware.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crate::config::ServerConfig;

static SLOW_REQUEST_MS: AtomicU64 = AtomicU64::new(1_000);

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    SLOW_REQUEST_MS.store(config.logging.slow_request_threshold_ms, Ordering::Relaxed);
}

/// Requests slower than this are logged as warnings.
pub(super) fn slow_request_threshold() -> Duration {
    Duration::from_millis(SLOW_REQUEST_MS.load(Ordering::Relaxed))
}

pub(super) fn is_slow(elapsed: Duration) -> bool {
    elapsed > slow_request_threshold()
}
