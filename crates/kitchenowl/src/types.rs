//! Type definitions for the KitchenOwl API
//!
//! Records mirror the JSON the server sends. Unknown fields are ignored and
//! fields the server may leave out are optional, so a newer server does not
//! break decoding.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A KitchenOwl user
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Login name
    pub username: String,
    /// Whether the user administers the instance
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub admin: bool,
    /// Whether the user owns the instance
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub owner: bool,
    /// Profile photo reference
    #[serde(default)]
    pub photo: Option<String>,
    /// Creation time in milliseconds since the epoch
    pub created_at: i64,
    /// Last update time in milliseconds since the epoch
    pub updated_at: i64,
}

/// A household: the group owning shopping lists and members
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Server-assigned identifier
    pub id: u64,
    /// Household name
    pub name: String,
    /// Language code (e.g. `en`)
    #[serde(default)]
    pub language: Option<String>,
    /// Household photo reference
    #[serde(default)]
    pub photo: Option<String>,
    /// Members of the household
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub member: Vec<User>,
    /// The list opened by default
    #[serde(default)]
    pub default_shopping_list: Option<ShoppingList>,
    /// Whether the meal planner is enabled
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub planner_feature: bool,
    /// Whether expense tracking is enabled
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub expenses_feature: bool,
    /// Order of the views in the apps
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub view_ordering: Vec<String>,
    /// Creation time in milliseconds since the epoch
    pub created_at: i64,
    /// Last update time in milliseconds since the epoch
    pub updated_at: i64,
}

/// A shopping list belonging to a household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Server-assigned identifier
    pub id: u64,
    /// List name
    pub name: String,
    /// Owning household
    pub household_id: u64,
    /// Creation time in milliseconds since the epoch
    pub created_at: i64,
    /// Last update time in milliseconds since the epoch
    pub updated_at: i64,
}

/// The category of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier
    pub id: u64,
    /// Category name
    pub name: String,
    /// Sort position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<i64>,
    /// Owning household
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<u64>,
    /// Free text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the category ships with the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Translation key for default categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    /// Creation time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Last update time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// A catalog item of a household
///
/// Optional fields left as `None` are omitted when the item is serialized,
/// so an item sent to [`update_item`](crate::KitchenOwlClient::update_item)
/// carries exactly the fields it was decoded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier
    pub id: u64,
    /// Item name
    pub name: String,
    /// Sort position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<i64>,
    /// Category the item is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Identifier of [`Item::category`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Owning household
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_id: Option<u64>,
    /// Icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// How often the item has been used, drives suggestions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<i64>,
    /// Whether the item ships with the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// Translation key for default items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    /// Creation time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Last update time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// An item placed on a shopping list
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// The catalog item
    #[serde(flatten)]
    pub item: Item,
    /// Description attached on this list (e.g. an amount)
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
}

impl Deref for ShoppingListItem {
    type Target = Item;

    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl DerefMut for ShoppingListItem {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.item
    }
}

impl From<ShoppingListItem> for Item {
    fn from(list_item: ShoppingListItem) -> Self {
        list_item.item
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn category_json() -> serde_json::Value {
        json!({
            "created_at": 0,
            "default": false,
            "default_key": "category_1",
            "household_id": 1,
            "id": 1,
            "name": "Category 1",
            "ordering": 1,
            "updated_at": 0
        })
    }

    fn item_json() -> serde_json::Value {
        json!({
            "category": category_json(),
            "category_id": 1,
            "created_at": 0,
            "default": false,
            "default_key": "item_1",
            "household_id": 1,
            "icon": "icon_1",
            "id": 1,
            "name": "item_1",
            "ordering": 1,
            "support": 0,
            "updated_at": 0
        })
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "admin": true,
            "created_at": 0,
            "expense_balance": 0,
            "id": 1,
            "name": "user 1",
            "owner": true,
            "photo": null,
            "updated_at": 0,
            "username": "user 1"
        }))
        .expect("User should decode");

        assert_eq!(user.id, 1);
        assert!(user.admin);
        assert!(user.owner);
        assert_eq!(user.photo, None);
        assert_eq!(user.username, "user 1");
    }

    #[test]
    fn test_item_reserializes_verbatim() {
        let item: Item = serde_json::from_value(item_json()).expect("Item should decode");
        assert_eq!(item.category.as_ref().map(|c| c.id), Some(1));
        assert_eq!(item.category.as_ref().and_then(|c| c.description.clone()), None);

        let value = serde_json::to_value(&item).expect("Item should encode");
        assert_eq!(value, item_json());
    }

    #[test]
    fn test_minimal_item_omits_absent_fields() {
        let item: Item = serde_json::from_value(json!({"id": 7, "name": "milk"}))
            .expect("Minimal item should decode");
        assert_eq!(item.category, None);
        assert_eq!(item.icon, None);

        let value = serde_json::to_value(&item).expect("Item should encode");
        assert_eq!(value, json!({"id": 7, "name": "milk"}));
    }

    #[test]
    fn test_shopping_list_item_is_flat() {
        let mut body = item_json();
        body["description"] = json!("2%");

        let list_item: ShoppingListItem =
            serde_json::from_value(body.clone()).expect("List item should decode");
        assert_eq!(list_item.description, "2%");
        assert_eq!(list_item.name, "item_1");
        assert_eq!(list_item.icon.as_deref(), Some("icon_1"));

        let value = serde_json::to_value(&list_item).expect("List item should encode");
        assert_eq!(value, body);

        let item: Item = list_item.into();
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_shopping_list_item_without_description() {
        let list_item: ShoppingListItem = serde_json::from_value(item_json())
            .expect("List item without description should decode");
        assert_eq!(list_item.description, "");
    }

    #[test]
    fn test_household_defaults() {
        let household: Household = serde_json::from_value(json!({
            "created_at": 0,
            "id": 3,
            "name": "household 3",
            "updated_at": 0
        }))
        .expect("Sparse household should decode");

        assert!(household.member.is_empty());
        assert!(household.view_ordering.is_empty());
        assert_eq!(household.default_shopping_list, None);
        assert!(!household.planner_feature);
        assert!(!household.expenses_feature);
    }

    #[test]
    fn test_null_collections_and_flags_decode_as_defaults() {
        let household: Household = serde_json::from_value(json!({
            "created_at": 0,
            "expenses_feature": null,
            "id": 3,
            "member": null,
            "name": "household 3",
            "planner_feature": null,
            "updated_at": 0,
            "view_ordering": null
        }))
        .expect("Household with null fields should decode");

        assert!(household.member.is_empty());
        assert!(household.view_ordering.is_empty());
        assert!(!household.planner_feature);
        assert!(!household.expenses_feature);

        let user: User = serde_json::from_value(json!({
            "admin": null,
            "created_at": 0,
            "id": 1,
            "name": "user 1",
            "owner": null,
            "updated_at": 0,
            "username": "user1"
        }))
        .expect("User with null flags should decode");
        assert!(!user.admin);
        assert!(!user.owner);
    }

    #[test]
    fn test_shopping_list_item_with_null_description() {
        let list_item: ShoppingListItem = serde_json::from_value(json!({
            "description": null,
            "id": 1,
            "name": "milk"
        }))
        .expect("List item with null description should decode");
        assert_eq!(list_item.name, "milk");
        assert_eq!(list_item.description, "");

        let items: Vec<ShoppingListItem> = serde_json::from_value(json!([
            {"id": 1, "name": "milk", "description": "2%"},
            {"id": 2, "name": "bread", "description": null}
        ]))
        .expect("List with one null description should decode");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "2%");
        assert_eq!(items[1].description, "");
    }
}
