//! Traits, enumerations and structs for users.

use std::error::Error as StdError;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// The item content.
///
/// `info` holds the free form profile of the user. The web layer uses the keys `styles`,
/// `brands`, `colors` and `sizes` for the fashion profile.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub user_id: String,
    pub account: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub password: String,
    pub salt: String,
    pub name: String,
    pub info: Map<String, Value>,
}

/// The query condition to get item(s).
#[derive(Default)]
pub struct QueryCond<'a> {
    pub user_id: Option<&'a str>,
    pub account: Option<&'a str>,
}

/// The update fields by using [`Some`]s.
#[derive(Default)]
pub struct Updates<'a> {
    pub modified_at: Option<DateTime<Utc>>,
    pub password: Option<String>,
    pub salt: Option<String>,
    pub name: Option<&'a str>,
    pub info: Option<&'a Map<String, Value>>,
}

/// Model operations.
#[async_trait]
pub trait UserModel: Sync {
    /// To create and initialize the table.
    async fn init(&self) -> Result<(), Box<dyn StdError>>;

    /// To get an item.
    async fn get(&self, cond: &QueryCond) -> Result<Option<User>, Box<dyn StdError>>;

    /// To add an item.
    async fn add(&self, user: &User) -> Result<(), Box<dyn StdError>>;

    /// To delete one item.
    async fn del(&self, user_id: &str) -> Result<(), Box<dyn StdError>>;

    /// To update one item.
    async fn update(&self, user_id: &str, updates: &Updates) -> Result<(), Box<dyn StdError>>;
}
