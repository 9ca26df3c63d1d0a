use anyhow::Result;
use clap::Args;
use kitchenowl::KitchenOwlClient;

use super::print_json;

#[derive(Args)]
pub struct ItemsSubCommand {
    /// Shopping list id
    list_id: u64,
    /// Show items recently removed from the list instead
    #[arg(long, conflicts_with = "suggested")]
    recent: bool,
    /// Show items suggested for the list instead
    #[arg(long)]
    suggested: bool,
}

pub async fn items(client: &KitchenOwlClient, sub_command_args: &ItemsSubCommand) -> Result<()> {
    let ItemsSubCommand {
        list_id,
        recent,
        suggested,
    } = sub_command_args;

    let items = if *recent {
        client.get_shoppinglist_recent_items(*list_id).await?
    } else if *suggested {
        client.get_shoppinglist_suggested_items(*list_id).await?
    } else {
        client.get_shoppinglist_items(*list_id).await?
    };

    print_json(&items)
}
