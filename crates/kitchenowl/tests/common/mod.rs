//! Shared fixtures for the KitchenOwl client tests

#![allow(dead_code)]

use kitchenowl::{ClientConfig, KitchenOwlClient};
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "12345ABCD";
pub const BEARER: &str = "Bearer 12345ABCD";

pub const DEFAULT_HOUSEHOLD_ID: u64 = 1;
pub const TEST_404_HOUSEHOLD_ID: u64 = 404;
pub const DEFAULT_SHOPPINGLIST_ID_1: u64 = 1;
pub const DEFAULT_SHOPPINGLIST_ID_2: u64 = 2;
pub const DEFAULT_ITEM_ID_1: u64 = 1;
pub const DEFAULT_ITEM_ID_2: u64 = 2;
pub const DEFAULT_USER_ID: u64 = 1;

pub fn client(server: &mockito::ServerGuard) -> KitchenOwlClient {
    client_with_config(ClientConfig::new(server.url(), TEST_TOKEN))
}

pub fn client_with_config(config: ClientConfig) -> KitchenOwlClient {
    KitchenOwlClient::new(reqwest::Client::new(), config)
}

pub fn shoppinglist(id: u64) -> Value {
    json!({
        "created_at": 0,
        "household_id": DEFAULT_HOUSEHOLD_ID,
        "id": id,
        "name": format!("list_{id}"),
        "updated_at": 0
    })
}

pub fn user() -> Value {
    json!({
        "admin": true,
        "created_at": 0,
        "expense_balance": 0,
        "id": DEFAULT_USER_ID,
        "name": format!("user {DEFAULT_USER_ID}"),
        "owner": true,
        "photo": null,
        "updated_at": 0,
        "username": format!("user {DEFAULT_USER_ID}")
    })
}

pub fn households() -> Value {
    json!([
        {
            "created_at": 0,
            "default_shopping_list": shoppinglist(DEFAULT_SHOPPINGLIST_ID_1),
            "expenses_feature": true,
            "id": DEFAULT_HOUSEHOLD_ID,
            "language": "en",
            "member": [user()],
            "name": format!("household {DEFAULT_HOUSEHOLD_ID}"),
            "photo": null,
            "planner_feature": true,
            "updated_at": 0,
            "view_ordering": ["items", "recipes"]
        }
    ])
}

pub fn category(id: u64) -> Value {
    json!({
        "created_at": 0,
        "default": false,
        "default_key": "category_1",
        "household_id": DEFAULT_HOUSEHOLD_ID,
        "id": id,
        "name": format!("Category {id}"),
        "ordering": 1,
        "updated_at": 0
    })
}

/// A catalog item named `{prefix}_{id}`
pub fn item(prefix: &str, id: u64, category_id: u64) -> Value {
    json!({
        "category": category(category_id),
        "category_id": category_id,
        "created_at": 0,
        "default": false,
        "default_key": format!("{prefix}_{id}"),
        "household_id": DEFAULT_HOUSEHOLD_ID,
        "icon": format!("icon_{id}"),
        "id": id,
        "name": format!("{prefix}_{id}"),
        "ordering": id,
        "support": 0,
        "updated_at": 0
    })
}

pub fn shoppinglist_item(prefix: &str, id: u64, description: &str) -> Value {
    let mut value = item(prefix, id, 1);
    value["description"] = json!(description);
    value
}

pub fn shoppinglist_items() -> Value {
    json!([
        shoppinglist_item("item", DEFAULT_ITEM_ID_1, "Description 1"),
        shoppinglist_item("item", DEFAULT_ITEM_ID_2, "Description 2")
    ])
}

pub fn suggested_items() -> Value {
    json!([
        shoppinglist_item("suggested_item", DEFAULT_ITEM_ID_1, "Description 1"),
        shoppinglist_item("suggested_item", DEFAULT_ITEM_ID_2, "Description 2")
    ])
}
