//! Basic usage example for the KitchenOwl client
//!
//! This example demonstrates:
//! - Building a client from `KITCHENOWL_*` environment variables
//! - Checking the token
//! - Walking households, shopping lists and their items
//! - Branching on the error kinds

use kitchenowl::{ClientConfig, Error, KitchenOwlClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::new("http://localhost:8080", "").from_env();
    if config.token.is_empty() {
        eprintln!("Set KITCHENOWL_TOKEN to a long-lived access token");
        return Ok(());
    }

    let client = KitchenOwlClient::new(reqwest::Client::new(), config);

    println!("=== Testing connection ===");
    match client.test_connection().await {
        Ok(_) => println!("Token accepted"),
        Err(Error::Auth(e)) => {
            eprintln!("{e}");
            return Ok(());
        }
        Err(Error::Timeout) => {
            eprintln!("Server did not answer in time");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let user = client.get_user_info().await?;
    println!("Logged in as {} ({})", user.name, user.username);

    for household in client.get_households().await? {
        println!("\n=== Household {}: {} ===", household.id, household.name);

        for list in client.get_shoppinglists(household.id).await? {
            let items = client.get_shoppinglist_items(list.id).await?;
            println!("{} ({} items)", list.name, items.len());
            for item in items {
                if item.description.is_empty() {
                    println!("  - {}", item.name);
                } else {
                    println!("  - {} [{}]", item.name, item.description);
                }
            }
        }
    }

    Ok(())
}
