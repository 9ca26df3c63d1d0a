//! Command line client for a KitchenOwl instance

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use kitchenowl::config::{ENV_TOKEN, ENV_URL};
use kitchenowl::{ClientConfig, KitchenOwlClient};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod sub_commands;

const DEFAULT_CONFIG_DIR: &str = ".kitchenowl";
const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Talk to a KitchenOwl instance from the command line
#[derive(Parser)]
#[command(name = "kitchenowl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file [default: ~/.kitchenowl/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Base URL of the KitchenOwl instance
    #[arg(short, long, env = ENV_URL)]
    url: Option<String>,
    /// Long-lived access token
    #[arg(short, long, env = ENV_TOKEN, hide_env_values = true)]
    token: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<f64>,
    /// Logging level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the server accepts the token
    TestConnection,
    /// Show the authenticated user
    User,
    /// List households of the user
    Households,
    /// List shopping lists of a household
    ShoppingLists(sub_commands::shopping_lists::ShoppingListsSubCommand),
    /// List items of a shopping list
    Items(sub_commands::items::ItemsSubCommand),
    /// Add an item to a shopping list by name
    AddItem(sub_commands::add_item::AddItemSubCommand),
    /// Change the description of an item on a shopping list
    UpdateDescription(sub_commands::update_description::UpdateDescriptionSubCommand),
    /// Remove an item from a shopping list
    RemoveItem(sub_commands::remove_item::RemoveItemSubCommand),
    /// Replace an item record in the household catalog
    UpdateItem(sub_commands::update_item::UpdateItemSubCommand),
    /// Delete an item from the household catalog
    DeleteItem(sub_commands::delete_item::DeleteItemSubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    let env_filter = EnvFilter::new(format!(
        "{},hyper=warn,reqwest=warn",
        args.log_level
    ));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    if config.base_url.is_empty() {
        bail!("No KitchenOwl URL set, use --url or {ENV_URL}");
    }
    if config.token.is_empty() {
        bail!("No access token set, use --token or {ENV_TOKEN}");
    }

    tracing::debug!(config = ?config, "Resolved client config");

    let client = KitchenOwlClient::new(reqwest::Client::new(), config);

    match &args.command {
        Commands::TestConnection => {
            sub_commands::test_connection::test_connection(&client).await
        }
        Commands::User => sub_commands::user::user(&client).await,
        Commands::Households => sub_commands::households::households(&client).await,
        Commands::ShoppingLists(sub_command_args) => {
            sub_commands::shopping_lists::shopping_lists(&client, sub_command_args).await
        }
        Commands::Items(sub_command_args) => {
            sub_commands::items::items(&client, sub_command_args).await
        }
        Commands::AddItem(sub_command_args) => {
            sub_commands::add_item::add_item(&client, sub_command_args).await
        }
        Commands::UpdateDescription(sub_command_args) => {
            sub_commands::update_description::update_description(&client, sub_command_args).await
        }
        Commands::RemoveItem(sub_command_args) => {
            sub_commands::remove_item::remove_item(&client, sub_command_args).await
        }
        Commands::UpdateItem(sub_command_args) => {
            sub_commands::update_item::update_item(&client, sub_command_args).await
        }
        Commands::DeleteItem(sub_command_args) => {
            sub_commands::delete_item::delete_item(&client, sub_command_args).await
        }
    }
}

/// Defaults, then the config file, then the environment, then flags
fn load_config(args: &Cli) -> Result<ClientConfig> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => home::home_dir()
            .map(|home| home.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILE))
            .filter(|path| path.exists()),
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            ClientConfig::from_file(path)?
        }
        None => ClientConfig::default(),
    };

    config = config.from_env();

    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    if let Some(token) = &args.token {
        config.token = token.clone();
    }
    if let Some(timeout) = args.timeout {
        if timeout <= 0.0 {
            bail!("Timeout must be a positive number of seconds");
        }
        config.request_timeout = Duration::try_from_secs_f64(timeout)?;
    }

    Ok(config)
}
