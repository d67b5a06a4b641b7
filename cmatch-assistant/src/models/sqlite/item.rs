use std::{error::Error as StdError, sync::Arc};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use futures::TryStreamExt;
use sql_builder::{quote, SqlBuilder};
use sqlx::SqlitePool;

use super::{
    super::item::{
        Item, ItemModel, ListOptions, ListQueryCond, QueryCond, SortKey, Updates,
    },
    build_where_like,
};

/// Model instance.
pub struct Model {
    /// The associated database connection.
    conn: Arc<SqlitePool>,
}

/// SQLite schema.
#[derive(sqlx::FromRow)]
struct Schema {
    item_id: String,
    user_id: String,
    kind: String,
    /// i64 as time tick from Epoch in milliseconds.
    created_at: i64,
    /// i64 as time tick from Epoch in milliseconds.
    modified_at: i64,
    name: String,
    description: Option<String>,
    price: Option<f64>,
    image: Option<String>,
}

/// Use "COUNT(*)" instead of "COUNT(fields...)" to simplify the implementation.
#[derive(sqlx::FromRow)]
struct CountSchema {
    #[sqlx(rename = "COUNT(*)")]
    count: i64,
}

const TABLE_NAME: &'static str = "item";
const FIELDS: &'static [&'static str] = &[
    "item_id",
    "user_id",
    "kind",
    "created_at",
    "modified_at",
    "name",
    "description",
    "price",
    "image",
];
const TABLE_INIT_SQL: &'static str = "\
    CREATE TABLE IF NOT EXISTS item (\
    item_id TEXT NOT NULL UNIQUE,\
    user_id TEXT NOT NULL,\
    kind TEXT NOT NULL,\
    created_at INTEGER NOT NULL,\
    modified_at INTEGER NOT NULL,\
    name TEXT NOT NULL,\
    description TEXT,\
    price REAL,\
    image TEXT,\
    PRIMARY KEY (item_id))";

impl Model {
    /// To create the model instance with a database connection.
    pub async fn new(conn: Arc<SqlitePool>) -> Result<Self, Box<dyn StdError>> {
        let model = Model { conn };
        model.init().await?;
        Ok(model)
    }
}

#[async_trait]
impl ItemModel for Model {
    async fn init(&self) -> Result<(), Box<dyn StdError>> {
        let _ = sqlx::query(TABLE_INIT_SQL)
            .execute(self.conn.as_ref())
            .await?;
        Ok(())
    }

    async fn count(&self, cond: &ListQueryCond) -> Result<u64, Box<dyn StdError>> {
        let sql = build_list_where(SqlBuilder::select_from(TABLE_NAME).count("*"), &cond).sql()?;

        let result: Result<CountSchema, sqlx::Error> = sqlx::query_as(sql.as_str())
            .fetch_one(self.conn.as_ref())
            .await;

        let row = match result {
            Err(e) => {
                return Err(Box::new(e));
            }
            Ok(row) => row,
        };
        Ok(row.count as u64)
    }

    async fn list(&self, opts: &ListOptions) -> Result<Vec<Item>, Box<dyn StdError>> {
        let mut builder = SqlBuilder::select_from(TABLE_NAME);
        builder.fields(FIELDS);
        build_limit_offset(&mut builder, opts);
        build_sort(&mut builder, opts);
        let sql = build_list_where(&mut builder, opts.cond).sql()?;

        let mut rows = sqlx::query_as::<_, Schema>(sql.as_str()).fetch(self.conn.as_ref());

        let mut list = vec![];
        while let Some(row) = rows.try_next().await? {
            list.push(Item {
                item_id: row.item_id,
                user_id: row.user_id,
                kind: row.kind,
                created_at: Utc.timestamp_nanos(row.created_at * 1000000),
                modified_at: Utc.timestamp_nanos(row.modified_at * 1000000),
                name: row.name,
                description: row.description,
                price: row.price,
                image: row.image,
            });
        }
        Ok(list)
    }

    async fn get(&self, cond: &QueryCond) -> Result<Option<Item>, Box<dyn StdError>> {
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

        Ok(Some(Item {
            item_id: row.item_id,
            user_id: row.user_id,
            kind: row.kind,
            created_at: Utc.timestamp_nanos(row.created_at * 1000000),
            modified_at: Utc.timestamp_nanos(row.modified_at * 1000000),
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
        }))
    }

    async fn add(&self, item: &Item) -> Result<(), Box<dyn StdError>> {
        let values = vec![
            quote(item.item_id.as_str()),
            quote(item.user_id.as_str()),
            quote(item.kind.as_str()),
            item.created_at.timestamp_millis().to_string(),
            item.modified_at.timestamp_millis().to_string(),
            quote(item.name.as_str()),
            match item.description.as_deref() {
                None => "NULL".to_string(),
                Some(value) => quote(value),
            },
            match item.price {
                None => "NULL".to_string(),
                Some(value) => value.to_string(),
            },
            match item.image.as_deref() {
                None => "NULL".to_string(),
                Some(value) => quote(value),
            },
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

    async fn del(&self, item_id: &str) -> Result<(), Box<dyn StdError>> {
        let sql = SqlBuilder::delete_from(TABLE_NAME)
            .and_where_eq("item_id", quote(item_id))
            .sql()?;
        let _ = sqlx::query(sql.as_str())
            .execute(self.conn.as_ref())
            .await?;
        Ok(())
    }

    async fn update(&self, item_id: &str, updates: &Updates) -> Result<(), Box<dyn StdError>> {
        let sql =
            match build_update_where(&mut SqlBuilder::update_table(TABLE_NAME), item_id, updates) {
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
    if let Some(value) = cond.item_id {
        builder.and_where_eq("item_id", quote(value));
    }
    if let Some(value) = cond.user_id {
        builder.and_where_eq("user_id", quote(value));
    }
    builder
}

/// Transforms query conditions to the SQL builder.
fn build_list_where<'a>(
    builder: &'a mut SqlBuilder,
    cond: &ListQueryCond<'a>,
) -> &'a mut SqlBuilder {
    if let Some(value) = cond.user_id {
        builder.and_where_eq("user_id", quote(value));
    }
    if let Some(value) = cond.kind {
        builder.and_where_eq("kind", quote(value));
    }
    if let Some(value) = cond.name_contains {
        build_where_like(builder, "name", value);
    }
    builder
}

/// Transforms model options to the SQL builder.
fn build_limit_offset<'a>(builder: &'a mut SqlBuilder, opts: &ListOptions) -> &'a mut SqlBuilder {
    if let Some(value) = opts.limit {
        if value > 0 {
            builder.limit(value);
        }
    }
    if let Some(value) = opts.offset {
        match opts.limit {
            None => builder.limit(-1).offset(value),
            Some(0) => builder.limit(-1).offset(value),
            _ => builder.offset(value),
        };
    }
    builder
}

/// Transforms model options to the SQL builder.
fn build_sort<'a>(builder: &'a mut SqlBuilder, opts: &ListOptions) -> &'a mut SqlBuilder {
    if let Some(sort_cond) = opts.sort.as_ref() {
        for cond in sort_cond.iter() {
            let key = match cond.key {
                SortKey::CreatedAt => "created_at",
                SortKey::Name => "name",
            };
            builder.order_by(key, !cond.asc);
        }
    }
    builder
}

/// Transforms update conditions to the SQL builder. Returns [`None`] if there is nothing to
/// update.
fn build_update_where<'a>(
    builder: &'a mut SqlBuilder,
    item_id: &str,
    updates: &Updates,
) -> Option<&'a mut SqlBuilder> {
    let mut count = 0;
    if let Some(value) = updates.modified_at.as_ref() {
        builder.set("modified_at", value.timestamp_millis());
        count += 1;
    }
    if let Some(value) = updates.name {
        builder.set("name", quote(value));
        count += 1;
    }
    if let Some(value) = updates.description.as_ref() {
        match value {
            None => builder.set("description", "NULL"),
            Some(value) => builder.set("description", quote(*value)),
        };
        count += 1;
    }
    if let Some(value) = updates.price.as_ref() {
        match value {
            None => builder.set("price", "NULL"),
            Some(value) => builder.set("price", value),
        };
        count += 1;
    }
    if let Some(value) = updates.image.as_ref() {
        match value {
            None => builder.set("image", "NULL"),
            Some(value) => builder.set("image", quote(*value)),
        };
        count += 1;
    }
    if count == 0 {
        return None;
    }

    builder.and_where_eq("item_id", quote(item_id));
    Some(builder)
}
