//! Product search operations.
//!
//! Both operations return the upstream JSON payload verbatim. Pagination metadata and record
//! ordering are preserved; use [`super::product::map_products`] to convert records into typed
//! values.

use serde_json::Value;

use super::http::{Client, Error};

/// Parameters of the text based search.
#[derive(Clone, Default)]
pub struct TextSearch {
    /// Free text query.
    pub query: String,
    /// Restrict results to one brand.
    pub brand: Option<String>,
    /// 1-based result page. Default is [`DEF_PAGE`].
    pub page: Option<u64>,
    /// Records per page. Default is [`DEF_TEXT_PER_PAGE`].
    pub per_page: Option<u64>,
}

/// Parameters of the image based search.
#[derive(Clone, Default)]
pub struct VisualSearch {
    /// A publicly reachable URL of the image. The catalog fetches the bytes itself.
    pub image: String,
    /// 1-based result page. Default is [`DEF_PAGE`].
    pub page: Option<u64>,
    /// Records per page. Default is [`DEF_VISUAL_PER_PAGE`].
    pub per_page: Option<u64>,
}

pub const DEF_PAGE: u64 = 1;
pub const DEF_TEXT_PER_PAGE: u64 = 10;
pub const DEF_VISUAL_PER_PAGE: u64 = 5;

/// `GET {search_url}?query=&brand=&page=&perPage=`
pub async fn search_products(client: &Client, params: &TextSearch) -> Result<Value, Error> {
    let mut query = vec![("query", params.query.clone())];
    if let Some(brand) = params.brand.as_ref() {
        query.push(("brand", brand.clone()));
    }
    query.push(("page", page_value(params.page).to_string()));
    query.push((
        "perPage",
        per_page_value(params.per_page, DEF_TEXT_PER_PAGE).to_string(),
    ));

    client.get_json(client.search_url(), query.as_slice()).await
}

/// `GET {visual_search_url}?image=&page=&perPage=`
pub async fn search_by_image(client: &Client, params: &VisualSearch) -> Result<Value, Error> {
    let query = vec![
        ("image", params.image.clone()),
        ("page", page_value(params.page).to_string()),
        (
            "perPage",
            per_page_value(params.per_page, DEF_VISUAL_PER_PAGE).to_string(),
        ),
    ];

    client
        .get_json(client.visual_search_url(), query.as_slice())
        .await
}

fn page_value(page: Option<u64>) -> u64 {
    match page {
        None | Some(0) => DEF_PAGE,
        Some(page) => page,
    }
}

fn per_page_value(per_page: Option<u64>, def: u64) -> u64 {
    match per_page {
        None | Some(0) => def,
        Some(per_page) => per_page,
    }
}
