//! Traits and implementations for accessing the database.
//!
//! Currently we only provide the pure SQLite implementation. The top level [`Model`] trait keeps
//! the route layer independent of the engine so another implementation can be mixed in later.

use std::{error::Error as StdError, sync::Arc};

use async_trait::async_trait;

pub mod access_token;
pub mod item;
pub mod user;

mod model_sqlite;
mod sqlite;

pub use self::sqlite::conn::{self as sqlite_conn, Options as SqliteOptions};
pub use model_sqlite::Model as SqliteModel;

/// Database connection options for model implementation.
pub enum ConnOptions {
    /// Pure SQLite model implementation.
    Sqlite(SqliteOptions),
}

/// The top level trait to get all models (tables).
#[async_trait]
pub trait Model: Send + Sync {
    /// Close database connection.
    async fn close(&self) -> Result<(), Box<dyn StdError>>;

    /// To get the user model.
    fn user(&self) -> &dyn user::UserModel;

    /// To get the access token model.
    fn access_token(&self) -> &dyn access_token::AccessTokenModel;

    /// To get the item model.
    fn item(&self) -> &dyn item::ItemModel;
}

/// To create the database model with the specified database implementation.
pub async fn new(opts: &ConnOptions) -> Result<Arc<dyn Model>, Box<dyn StdError>> {
    let model: Arc<dyn Model> = match opts {
        ConnOptions::Sqlite(opts) => Arc::new(SqliteModel::new(opts).await?),
    };
    model.user().init().await?;
    model.access_token().init().await?;
    model.item().init().await?;
    Ok(model)
}
