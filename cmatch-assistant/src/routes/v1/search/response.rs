use serde::Serialize;

use cmatch_sdk::api::product::Product;

#[derive(Serialize)]
pub struct PostProductMapped {
    pub data: Vec<Product>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Serialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}
