use anyhow::Result;
use clap::Args;
use kitchenowl::KitchenOwlClient;

use super::print_json;

#[derive(Args)]
pub struct AddItemSubCommand {
    /// Shopping list id
    list_id: u64,
    /// Item name
    name: String,
    /// Description, e.g. an amount
    #[arg(short, long, default_value = "")]
    description: String,
}

pub async fn add_item(client: &KitchenOwlClient, sub_command_args: &AddItemSubCommand) -> Result<()> {
    let AddItemSubCommand {
        list_id,
        name,
        description,
    } = sub_command_args;

    let item = client
        .add_shoppinglist_item(*list_id, name, description)
        .await?;
    print_json(&item)
}
