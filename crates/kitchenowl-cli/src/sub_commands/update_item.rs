use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kitchenowl::{Item, KitchenOwlClient};

use super::print_json;

#[derive(Args)]
pub struct UpdateItemSubCommand {
    /// Item id
    item_id: u64,
    /// JSON file holding the full item record
    file: PathBuf,
}

pub async fn update_item(
    client: &KitchenOwlClient,
    sub_command_args: &UpdateItemSubCommand,
) -> Result<()> {
    let contents = fs::read_to_string(&sub_command_args.file)
        .with_context(|| format!("Could not read {}", sub_command_args.file.display()))?;
    let item: Item = serde_json::from_str(&contents).context("Invalid item record")?;

    let updated = client.update_item(sub_command_args.item_id, &item).await?;
    print_json(&updated)
}
