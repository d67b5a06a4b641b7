use std::{error::Error as StdError, sync::Arc};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json;
use sql_builder::{quote, SqlBuilder};
use sqlx::SqlitePool;

use super::super::user::{QueryCond, Updates, User, UserModel};

/// Model instance.
pub struct Model {
    /// The associated database connection.
    conn: Arc<SqlitePool>,
}

/// SQLite schema.
#[derive(sqlx::FromRow)]
struct Schema {
    user_id: String,
    account: String,
    /// i64 as time tick from Epoch in milliseconds.
    created_at: i64,
    /// i64 as time tick from Epoch in milliseconds.
    modified_at: i64,
    password: String,
    salt: String,
    name: String,
    /// JSON string value such as `{"styles":["casual"],"sizes":{"top":"M"}}`.
    info: String,
}

const TABLE_NAME: &'static str = "user";
const FIELDS: &'static [&'static str] = &[
    "user_id",
    "account",
    "created_at",
    "modified_at",
    "password",
    "salt",
    "name",
    "info",
];
const TABLE_INIT_SQL: &'static str = "\
    CREATE TABLE IF NOT EXISTS user (\
    user_id TEXT NOT NULL UNIQUE,\
    account TEXT NOT NULL UNIQUE,\
    created_at INTEGER NOT NULL,\
    modified_at INTEGER NOT NULL,\
    password TEXT NOT NULL,\
    salt TEXT NOT NULL,\
    name TEXT NOT NULL,\
    info TEXT,\
    PRIMARY KEY (user_id))";

impl Model {
    /// To create the model instance with a database connection.
    pub async fn new(conn: Arc<SqlitePool>) -> Result<Self, Box<dyn StdError>> {
        let model = Model { conn };
        model.init().await?;
        Ok(model)
    }
}

#[async_trait]
impl UserModel for Model {
    async fn init(&self) -> Result<(), Box<dyn StdError>> {
        let _ = sqlx::query(TABLE_INIT_SQL)
            .execute(self.conn.as_ref())
            .await?;
        Ok(())
    }

    async fn get(&self, cond: &QueryCond) -> Result<Option<User>, Box<dyn StdError>> {
        let sql = build_where(SqlBuilder::select_from(TABLE_NAME).fields(FIELDS), &cond).sql()?;

        let result: Result<Schema, sqlx::Error> = sqlx::query_as(sql.as_str())
            .fetch_one(self.conn.as_ref())
            .await;

        let row = match result {
            Err(e) => match e {
                sqlx::Error::RowNotFound => return Ok(None),
                _ => return Err(Box::new(e)),
            },
            Ok(row) => row,
        };

        Ok(Some(User {
            user_id: row.user_id,
            account: row.account,
            created_at: Utc.timestamp_nanos(row.created_at * 1000000),
            modified_at: Utc.timestamp_nanos(row.modified_at * 1000000),
            password: row.password,
            salt: row.salt,
            name: row.name,
            info: serde_json::from_str(row.info.as_str())?,
        }))
    }

    async fn add(&self, user: &User) -> Result<(), Box<dyn StdError>> {
        let info = match serde_json::to_string(&user.info) {
            Err(_) => quote("{}"),
            Ok(value) => quote(value.as_str()),
        };
        let values = vec![
            quote(user.user_id.as_str()),
            quote(user.account.to_lowercase().as_str()),
            user.created_at.timestamp_millis().to_string(),
            user.modified_at.timestamp_millis().to_string(),
            quote(user.password.as_str()),
            quote(user.salt.as_str()),
            quote(user.name.as_str()),
            info,
        ];
        let sql = SqlBuilder::insert_into(TABLE_NAME)
            .fields(FIELDS)
            .values(&values)
            .sql()?;
        let _ = sqlx::query(sql.as_str())
            .execute(self.conn.as_ref())
            .await?;
        Ok(())
    }

    async fn del(&self, user_id: &str) -> Result<(), Box<dyn StdError>> {
        let sql = SqlBuilder::delete_from(TABLE_NAME)
            .and_where_eq("user_id", quote(user_id))
            .sql()?;
        let _ = sqlx::query(sql.as_str())
            .execute(self.conn.as_ref())
            .await?;
        Ok(())
    }

    async fn update(&self, user_id: &str, updates: &Updates) -> Result<(), Box<dyn StdError>> {
        let sql =
            match build_update_where(&mut SqlBuilder::update_table(TABLE_NAME), user_id, updates) {
                None => return Ok(()),
                Some(builder) => builder.sql()?,
            };
        let _ = sqlx::query(sql.as_str())
            .execute(self.conn.as_ref())
            .await?;
        Ok(())
    }
}

/// Transforms query conditions to the SQL builder.
fn build_where<'a>(builder: &'a mut SqlBuilder, cond: &QueryCond<'a>) -> &'a mut SqlBuilder {
    if let Some(value) = cond.user_id {
        builder.and_where_eq("user_id", quote(value));
    }
    if let Some(value) = cond.account {
        builder.and_where_eq("account", quote(value.to_lowercase().as_str()));
    }
    builder
}

/// Transforms update conditions to the SQL builder. Returns [`None`] if there is nothing to
/// update.
fn build_update_where<'a>(
    builder: &'a mut SqlBuilder,
    user_id: &str,
    updates: &Updates,
) -> Option<&'a mut SqlBuilder> {
    let mut count = 0;
    if let Some(value) = updates.modified_at.as_ref() {
        builder.set("modified_at", value.timestamp_millis());
        count += 1;
    }
    if let Some(value) = updates.password.as_ref() {
        builder.set("password", quote(value.as_str()));
        count += 1;
    }
    if let Some(value) = updates.salt.as_ref() {
        builder.set("salt", quote(value.as_str()));
        count += 1;
    }
    if let Some(value) = updates.name {
        builder.set("name", quote(value));
        count += 1;
    }
    if let Some(value) = updates.info {
        match serde_json::to_string(value) {
            Err(_) => {
                builder.set("info", quote("{}"));
            }
            Ok(value) => {
                builder.set("info", quote(value.as_str()));
            }
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }

    builder.and_where_eq("user_id", quote(user_id));
    Some(builder)
}
