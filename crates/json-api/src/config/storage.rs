//! Storage Config

use std::path::PathBuf;

use allot::prelude::Budget;
use clap::Args;

/// Export directory, upload limit and starting budget.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory export documents are written into
    #[arg(long, env = "EXPORT_DIR", default_value = "exports")]
    pub export_dir: PathBuf,

    /// Largest accepted import upload, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = 16 * 1024 * 1024)]
    pub max_upload_bytes: u64,

    /// Budget the server starts with
    #[arg(long, env = "DEFAULT_BUDGET", default_value = "0", value_parser = parse_budget)]
    pub default_budget: Budget,
}

fn parse_budget(value: &str) -> Result<Budget, String> {
    let amount = value
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("{value:?} is not a number: {error}"))?;

    Budget::new(amount).map_err(|error| error.to_string())
}
