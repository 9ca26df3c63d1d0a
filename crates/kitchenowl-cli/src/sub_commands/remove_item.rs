use anyhow::Result;
use clap::Args;
use kitchenowl::KitchenOwlClient;

use super::print_json;

#[derive(Args)]
pub struct RemoveItemSubCommand {
    /// Shopping list id
    list_id: u64,
    /// Item id
    item_id: u64,
}

pub async fn remove_item(
    client: &KitchenOwlClient,
    sub_command_args: &RemoveItemSubCommand,
) -> Result<()> {
    let removed = client
        .remove_shoppinglist_item(sub_command_args.list_id, sub_command_args.item_id)
        .await?;
    print_json(&removed)
}
