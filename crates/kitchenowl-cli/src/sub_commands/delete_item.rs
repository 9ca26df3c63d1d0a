use anyhow::Result;
use clap::Args;
use kitchenowl::KitchenOwlClient;

use super::print_json;

#[derive(Args)]
pub struct DeleteItemSubCommand {
    /// Item id
    item_id: u64,
}

pub async fn delete_item(
    client: &KitchenOwlClient,
    sub_command_args: &DeleteItemSubCommand,
) -> Result<()> {
    let deleted = client.delete_item(sub_command_args.item_id).await?;
    print_json(&deleted)
}
