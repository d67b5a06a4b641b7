//! Traits, enumerations and structs for wishlist/closet items.

use std::error::Error as StdError;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The item content.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub item_id: String,
    pub user_id: String,
    /// `wishlist` or `closet`. See [`cmatch_corelib::constants::ItemKind`].
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// A public URL of the item picture.
    pub image: Option<String>,
}

/// The sort keys for the list operation.
pub enum SortKey {
    CreatedAt,
    Name,
}

/// The sort condition for the list operation.
pub struct SortCond {
    pub key: SortKey,
    pub asc: bool,
}

/// The list operation options.
pub struct ListOptions<'a> {
    /// The query conditions.
    pub cond: &'a ListQueryCond<'a>,
    /// The data offset.
    pub offset: Option<u64>,
    /// The maximum number to query.
    pub limit: Option<u64>,
    /// The sort conditions.
    pub sort: Option<&'a [SortCond]>,
}

/// The query condition to get item(s).
#[derive(Default)]
pub struct QueryCond<'a> {
    pub item_id: Option<&'a str>,
    pub user_id: Option<&'a str>,
}

/// The query condition for the count/list operation.
#[derive(Default)]
pub struct ListQueryCond<'a> {
    /// To get items of the specified user.
    pub user_id: Option<&'a str>,
    /// To get items of the specified kind.
    pub kind: Option<&'a str>,
    /// To get items which name with the specified word.
    pub name_contains: Option<&'a str>,
}

/// The update fields by using [`Some`]s. The inner [`Option`]s of `description`, `price` and
/// `image` distinguish clearing a field (`Some(None)`) from leaving it untouched (`None`).
#[derive(Default)]
pub struct Updates<'a> {
    pub modified_at: Option<DateTime<Utc>>,
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub price: Option<Option<f64>>,
    pub image: Option<Option<&'a str>>,
}

/// Model operations.
#[async_trait]
pub trait ItemModel: Sync {
    /// To create and initialize the table.
    async fn init(&self) -> Result<(), Box<dyn StdError>>;

    /// To get item count for the query condition.
    async fn count(&self, cond: &ListQueryCond) -> Result<u64, Box<dyn StdError>>;

    /// To get item list.
    async fn list(&self, opts: &ListOptions) -> Result<Vec<Item>, Box<dyn StdError>>;

    /// To get an item.
    async fn get(&self, cond: &QueryCond) -> Result<Option<Item>, Box<dyn StdError>>;

    /// To add an item.
    async fn add(&self, item: &Item) -> Result<(), Box<dyn StdError>>;

    /// To delete one item.
    async fn del(&self, item_id: &str) -> Result<(), Box<dyn StdError>>;

    /// To update one item.
    async fn update(&self, item_id: &str, updates: &Updates) -> Result<(), Box<dyn StdError>>;
}
