use anyhow::Result;
use clap::Args;
use kitchenowl::KitchenOwlClient;

use super::print_json;

#[derive(Args)]
pub struct UpdateDescriptionSubCommand {
    /// Shopping list id
    list_id: u64,
    /// Item id
    item_id: u64,
    /// New description
    description: String,
}

pub async fn update_description(
    client: &KitchenOwlClient,
    sub_command_args: &UpdateDescriptionSubCommand,
) -> Result<()> {
    let UpdateDescriptionSubCommand {
        list_id,
        item_id,
        description,
    } = sub_command_args;

    let item = client
        .update_shoppinglist_item_description(*list_id, *item_id, description)
        .await?;
    print_json(&item)
}
