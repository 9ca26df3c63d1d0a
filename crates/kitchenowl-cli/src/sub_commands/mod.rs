use anyhow::Result;
use serde::Serialize;

pub mod add_item;
pub mod delete_item;
pub mod households;
pub mod items;
pub mod remove_item;
pub mod shopping_lists;
pub mod test_connection;
pub mod update_description;
pub mod update_item;
pub mod user;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
