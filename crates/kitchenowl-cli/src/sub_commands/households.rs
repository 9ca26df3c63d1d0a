use anyhow::Result;
use kitchenowl::KitchenOwlClient;

use super::print_json;

pub async fn households(client: &KitchenOwlClient) -> Result<()> {
    let households = client.get_households().await?;
    tracing::info!("Found {} households", households.len());
    print_json(&households)
}
