//! HTTP client for the KitchenOwl API

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::instrument;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{AuthError, Error, RequestError, Result};
use crate::types::{Household, Item, ShoppingList, ShoppingListItem, User};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Main client for interacting with the KitchenOwl API
///
/// Every operation maps to exactly one HTTP request. Nothing is retried or
/// cached; failures are returned as one of the [`Error`] kinds.
#[derive(Clone)]
pub struct KitchenOwlClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl std::fmt::Debug for KitchenOwlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KitchenOwlClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Response with the body already read
#[derive(Debug)]
struct ApiResponse {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl ApiResponse {
    /// Map 401/422 to [`Error::Auth`] and any other non-2xx status to [`Error::Request`]
    fn error_for_status(self) -> Result<Self> {
        match self.status {
            StatusCode::UNAUTHORIZED => Err(AuthError::NotAuthorized.into()),
            StatusCode::UNPROCESSABLE_ENTITY => Err(AuthError::InvalidToken.into()),
            status if !status.is_success() => Err(RequestError::Status {
                status: status.as_u16(),
                message: self.body,
            }
            .into()),
            _ => Ok(self),
        }
    }

    /// Decode the body, which must be declared as JSON
    fn json<T: DeserializeOwned>(self) -> Result<T> {
        if !self.content_type.contains(JSON_CONTENT_TYPE) {
            tracing::warn!(
                content_type = %self.content_type,
                "Expected JSON response from server"
            );
            return Err(RequestError::UnexpectedContentType {
                content_type: self.content_type,
                body: self.body,
            }
            .into());
        }

        serde_json::from_str(&self.body).map_err(|source| {
            tracing::error!("JSON parse error: {} - Body: {}", source, self.body);
            RequestError::Decode {
                source,
                body: self.body,
            }
            .into()
        })
    }

    fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

impl KitchenOwlClient {
    /// Create a new KitchenOwl client
    ///
    /// # Arguments
    ///
    /// * `http_client` - Connection pool owned by the caller, may be shared with other clients
    /// * `config` - Base URL, access token and request timeout
    pub fn new(http_client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Settings this client was created with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Check the token by sending HEAD to the user endpoint
    ///
    /// Returns `true` when the server answers 200. Any other answer is an
    /// error, `false` is never returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected, the request fails or times out
    #[instrument(skip(self))]
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self.request::<()>(Method::HEAD, "api/user", None).await?;
        if response.is_ok() {
            return Ok(true);
        }

        Err(RequestError::Status {
            status: response.status.as_u16(),
            message: response.body,
        }
        .into())
    }

    /// Fetch the user the token belongs to
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected, the request fails or times out,
    /// or the response is not a user record
    #[instrument(skip(self))]
    pub async fn get_user_info(&self) -> Result<User> {
        self.get("api/user").await
    }

    /// Fetch all households the user is a member of
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected, the request fails or times out,
    /// or the response is not a list of households
    #[instrument(skip(self))]
    pub async fn get_households(&self) -> Result<Vec<Household>> {
        self.get("api/household").await
    }

    /// Fetch all shopping lists of a household
    ///
    /// # Arguments
    ///
    /// * `household_id` - Identifier of the household
    ///
    /// # Errors
    ///
    /// Returns an error if the household does not exist, the token is rejected,
    /// the request fails or times out
    #[instrument(skip(self))]
    pub async fn get_shoppinglists(&self, household_id: u64) -> Result<Vec<ShoppingList>> {
        self.get(&format!("api/household/{household_id}/shoppinglist"))
            .await
    }

    /// Fetch the items currently on a shopping list
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not exist, the token is rejected,
    /// the request fails or times out
    #[instrument(skip(self))]
    pub async fn get_shoppinglist_items(&self, list_id: u64) -> Result<Vec<ShoppingListItem>> {
        self.get(&format!("api/shoppinglist/{list_id}/items")).await
    }

    /// Fetch the items recently removed from a shopping list
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not exist, the token is rejected,
    /// the request fails or times out
    #[instrument(skip(self))]
    pub async fn get_shoppinglist_recent_items(
        &self,
        list_id: u64,
    ) -> Result<Vec<ShoppingListItem>> {
        self.get(&format!("api/shoppinglist/{list_id}/recent-items"))
            .await
    }

    /// Fetch the items the server suggests for a shopping list
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not exist, the token is rejected,
    /// the request fails or times out
    #[instrument(skip(self))]
    pub async fn get_shoppinglist_suggested_items(
        &self,
        list_id: u64,
    ) -> Result<Vec<ShoppingListItem>> {
        self.get(&format!("api/shoppinglist/{list_id}/suggested-items"))
            .await
    }

    /// Add an item to a shopping list by name
    ///
    /// The server creates the catalog item when no item of that name exists.
    ///
    /// # Arguments
    ///
    /// * `list_id` - Identifier of the shopping list
    /// * `name` - Name of the item
    /// * `description` - Description on the list, pass `""` for none
    ///
    /// # Errors
    ///
    /// Returns an error if the list does not exist, the token is rejected,
    /// the request fails or times out
    #[instrument(skip(self))]
    pub async fn add_shoppinglist_item(
        &self,
        list_id: u64,
        name: &str,
        description: &str,
    ) -> Result<ShoppingListItem> {
        #[derive(Serialize)]
        struct AddItemPayload<'a> {
            name: &'a str,
            description: &'a str,
        }

        self.post(
            &format!("api/shoppinglist/{list_id}/add-item-by-name"),
            &AddItemPayload { name, description },
        )
        .await
    }

    /// Replace the description of an item on a shopping list
    ///
    /// # Errors
    ///
    /// Returns an error if the list or item does not exist, the token is
    /// rejected, the request fails or times out
    #[instrument(skip(self))]
    pub async fn update_shoppinglist_item_description(
        &self,
        list_id: u64,
        item_id: u64,
        description: &str,
    ) -> Result<ShoppingListItem> {
        #[derive(Serialize)]
        struct DescriptionPayload<'a> {
            description: &'a str,
        }

        self.post(
            &format!("api/shoppinglist/{list_id}/item/{item_id}"),
            &DescriptionPayload { description },
        )
        .await
    }

    /// Remove an item from a shopping list
    ///
    /// Returns `true` when the server answers 200.
    ///
    /// # Errors
    ///
    /// Returns an error if the server answers with an error status, the request
    /// fails or times out
    #[instrument(skip(self))]
    pub async fn remove_shoppinglist_item(&self, list_id: u64, item_id: u64) -> Result<bool> {
        self.delete(
            &format!("api/shoppinglist/{list_id}/item"),
            &json!({ "item_id": item_id }),
        )
        .await
    }

    /// Update a catalog item
    ///
    /// The whole record is sent as the request body, including the fields
    /// assigned by the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist or the record is refused,
    /// the token is rejected, the request fails or times out
    #[instrument(skip(self, item))]
    pub async fn update_item(&self, item_id: u64, item: &Item) -> Result<Item> {
        self.post(&format!("api/item/{item_id}"), item).await
    }

    /// Delete a catalog item
    ///
    /// Returns `true` when the server answers 200.
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not exist, the token is rejected,
    /// the request fails or times out
    #[instrument(skip(self))]
    pub async fn delete_item(&self, item_id: u64) -> Result<bool> {
        self.delete(&format!("api/item/{item_id}"), &json!({})).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<()>(Method::GET, path, None).await?.json()
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await?.json()
    }

    async fn delete<B>(&self, path: &str, body: &B) -> Result<bool>
    where
        B: Serialize + ?Sized,
    {
        Ok(self
            .request(Method::DELETE, path, Some(body))
            .await?
            .is_ok())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let url = format!("{}/{}", self.config.base_url(), path);
        Url::parse(&url).map_err(|e| RequestError::InvalidUrl(e).into())
    }

    /// Send a request and read the full response within the configured timeout
    async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let timeout = self.config.request_timeout;

        tracing::debug!(method = %method, url = %url, "KitchenOwl request");

        let mut builder = self
            .http_client
            .request(method.clone(), url.clone())
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .bearer_auth(&self.config.token);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = response.text().await?;

            Ok::<_, reqwest::Error>(ApiResponse {
                status,
                content_type,
                body,
            })
        };

        let response = match tokio::time::timeout(timeout, exchange).await {
            Ok(response) => response.map_err(|err| {
                tracing::warn!(method = %method, url = %url, "KitchenOwl request failed: {}", err);
                Error::from(err)
            })?,
            Err(_) => {
                tracing::warn!(method = %method, url = %url, ?timeout, "KitchenOwl request timed out");
                return Err(Error::Timeout);
            }
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = %response.status,
            "KitchenOwl response"
        );

        response.error_for_status()
    }
}
