//! Typed product values mapped from upstream catalog records.
//!
//! Upstream records are shaped
//! `{id, name, brand, link, price: {currency, value: {current, original}}}` where every field may
//! be absent. Mapping is tolerant for missing scalar fields and reports a [`MappingError`] only
//! for records whose container shape is wrong.

use std::{error::Error as StdError, fmt};

use serde::Serialize;
use serde_json::{Map, Value};

/// The mapped product value. Every field is optional; a missing upstream key degrades to `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "priceCurrency")]
    pub price_currency: Option<String>,
    #[serde(rename = "priceCurrent")]
    pub price_current: Option<f64>,
    #[serde(rename = "priceOriginal")]
    pub price_original: Option<f64>,
    pub link: Option<String>,
    pub brand: Option<String>,
}

/// The result of a batch mapping: successfully mapped records plus the per-record failures that
/// were skipped.
#[derive(Debug, Default)]
pub struct MappedProducts {
    pub products: Vec<Product>,
    pub skipped: Vec<(usize, MappingError)>,
}

/// A record (or the whole payload) that cannot be mapped.
#[derive(Clone, Debug, PartialEq)]
pub enum MappingError {
    /// The record is not a JSON object.
    NotObject,
    /// The payload holds no product array.
    NoRecords,
    /// The named field is not the expected container type.
    BadContainer(&'static str),
}

impl Product {
    /// To map one upstream record. Missing keys become `None`; wrongly typed `price` or
    /// `price.value` containers are an error.
    pub fn from_value(value: &Value) -> Result<Self, MappingError> {
        let record = match value.as_object() {
            None => return Err(MappingError::NotObject),
            Some(record) => record,
        };
        let price = match record.get("price") {
            None | Some(Value::Null) => None,
            Some(Value::Object(price)) => Some(price),
            Some(_) => return Err(MappingError::BadContainer("price")),
        };
        let price_value = match price {
            None => None,
            Some(price) => match price.get("value") {
                None | Some(Value::Null) => None,
                Some(Value::Object(value)) => Some(value),
                Some(_) => return Err(MappingError::BadContainer("price.value")),
            },
        };

        Ok(Product {
            id: id_field(record),
            name: str_field(record, "name"),
            price_currency: match price {
                None => None,
                Some(price) => str_field(price, "currency"),
            },
            price_current: match price_value {
                None => None,
                Some(value) => num_field(value, "current"),
            },
            price_original: match price_value {
                None => None,
                Some(value) => num_field(value, "original"),
            },
            link: str_field(record, "link"),
            brand: str_field(record, "brand"),
        })
    }
}

/// To map a whole search payload. Accepts a top level array or an object with a `products`
/// array. A malformed record lands in `skipped` and never aborts its siblings.
pub fn map_products(payload: &Value) -> Result<MappedProducts, MappingError> {
    let records = match payload {
        Value::Array(records) => records,
        Value::Object(map) => match map.get("products") {
            Some(Value::Array(records)) => records,
            Some(_) => return Err(MappingError::BadContainer("products")),
            None => return Err(MappingError::NoRecords),
        },
        _ => return Err(MappingError::NoRecords),
    };

    let mut mapped = MappedProducts::default();
    for (index, record) in records.iter().enumerate() {
        match Product::from_value(record) {
            Err(e) => mapped.skipped.push((index, e)),
            Ok(product) => mapped.products.push(product),
        }
    }
    Ok(mapped)
}

fn id_field(record: &Map<String, Value>) -> Option<String> {
    match record.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

fn str_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(value)) => Some(value.clone()),
        _ => None,
    }
}

fn num_field(record: &Map<String, Value>, key: &str) -> Option<f64> {
    match record.get(key) {
        Some(Value::Number(value)) => value.as_f64(),
        _ => None,
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MappingError::NotObject => write!(f, "record is not an object"),
            MappingError::NoRecords => write!(f, "payload holds no product array"),
            MappingError::BadContainer(field) => write!(f, "`{}` is not a container", field),
        }
    }
}

impl StdError for MappingError {}
