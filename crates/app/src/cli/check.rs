use std::path::PathBuf;

use allot::prelude::persistence;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    /// Path to an exported item document
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(args: CheckArgs) -> Result<(), String> {
    let document = tokio::fs::read(&args.file)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let items = persistence::import(&document)
        .map_err(|error| format!("invalid item file {}: {error}", args.file.display()))?;

    println!("file: {}", args.file.display());
    println!("items: {}", items.len());

    for item in &items {
        let upper = item
            .upper_bound
            .map_or_else(|| "∞".to_string(), |upper| upper.to_string());

        println!(
            "  {}: [{}, {upper}] cost {} profit {} x{}",
            item.name, item.lower_bound, item.cost, item.profit, item.multiplier
        );
    }

    Ok(())
}
