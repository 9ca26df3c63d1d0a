use anyhow::Result;
use kitchenowl::KitchenOwlClient;

use super::print_json;

pub async fn user(client: &KitchenOwlClient) -> Result<()> {
    let user = client.get_user_info().await?;
    print_json(&user)
}
