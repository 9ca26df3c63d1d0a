use anyhow::Result;
use clap::Args;
use kitchenowl::KitchenOwlClient;

use super::print_json;

#[derive(Args)]
pub struct ShoppingListsSubCommand {
    /// Household id
    household_id: u64,
}

pub async fn shopping_lists(
    client: &KitchenOwlClient,
    sub_command_args: &ShoppingListsSubCommand,
) -> Result<()> {
    let lists = client
        .get_shoppinglists(sub_command_args.household_id)
        .await?;
    print_json(&lists)
}
