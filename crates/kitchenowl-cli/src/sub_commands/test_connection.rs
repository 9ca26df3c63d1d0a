use anyhow::Result;
use kitchenowl::KitchenOwlClient;

use super::print_json;

pub async fn test_connection(client: &KitchenOwlClient) -> Result<()> {
    let connected = client.test_connection().await?;
    print_json(&connected)
}
