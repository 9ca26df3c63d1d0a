//! Async client for the KitchenOwl API
//!
//! Wraps the REST API of a [KitchenOwl](https://kitchenowl.org) instance:
//! households, shopping lists and the items on them. Requests are
//! authenticated with a long-lived access token and bounded by a timeout.
//!
//! # Example
//!
//! ```no_run
//! use kitchenowl::{ClientConfig, KitchenOwlClient};
//!
//! # async fn example() -> kitchenowl::Result<()> {
//! let config = ClientConfig::new("https://kitchenowl.example.com", "long-lived-token");
//! let client = KitchenOwlClient::new(kitchenowl::reqwest::Client::new(), config);
//!
//! for household in client.get_households().await? {
//!     for list in client.get_shoppinglists(household.id).await? {
//!         let items = client.get_shoppinglist_items(list.id).await?;
//!         println!("{}: {} items", list.name, items.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::bare_urls)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::KitchenOwlClient;
pub use config::ClientConfig;
pub use error::{AuthError, Error, RequestError, Result};
pub use reqwest;
pub use types::{Category, Household, Item, ShoppingList, ShoppingListItem, User};
