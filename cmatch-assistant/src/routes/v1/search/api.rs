use axum::{extract::State, response::IntoResponse};
use log::{error, warn};

use cmatch_corelib::{err::ErrResp, http::Json};
use cmatch_sdk::api::{
    catalog::{self, TextSearch, VisualSearch},
    http::Error as CatalogError,
    product,
};

use super::{super::super::State as AppState, request, response};

/// `POST /{base}/api/v1/search/product`
///
/// The upstream payload is returned to the caller unmodified.
pub async fn post_product(
    State(state): State<AppState>,
    Json(body): Json<request::PostProductBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_product";

    let params = TextSearch {
        query: body.data.query,
        brand: body.data.brand,
        page: body.data.page,
        per_page: body.data.per_page,
    };
    match catalog::search_products(&state.catalog, &params).await {
        Err(e) => Err(catalog_err(FN_NAME, e)),
        Ok(payload) => Ok(Json(payload)),
    }
}

/// `POST /{base}/api/v1/search/product/mapped`
///
/// Like [`post_product`] with the upstream records mapped to typed products. Records the
/// mapping skips are reported next to the mapped subset so the caller decides how to treat a
/// partial batch.
pub async fn post_product_mapped(
    State(state): State<AppState>,
    Json(body): Json<request::PostProductBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_product_mapped";

    let params = TextSearch {
        query: body.data.query,
        brand: body.data.brand,
        page: body.data.page,
        per_page: body.data.per_page,
    };
    let payload = match catalog::search_products(&state.catalog, &params).await {
        Err(e) => return Err(catalog_err(FN_NAME, e)),
        Ok(payload) => payload,
    };
    let mapped = match product::map_products(&payload) {
        Err(e) => {
            error!("[{}] map error: {}", FN_NAME, e);
            return Err(ErrResp::ErrIntMsg(Some(format!(
                "catalog payload cannot be mapped: {}",
                e
            ))));
        }
        Ok(mapped) => mapped,
    };
    Ok(Json(response::PostProductMapped {
        data: mapped.products,
        skipped: mapped
            .skipped
            .into_iter()
            .map(|(index, e)| response::SkippedRecord {
                index,
                reason: e.to_string(),
            })
            .collect(),
    }))
}

/// `POST /{base}/api/v1/search/visual`
///
/// The upstream payload is returned to the caller unmodified.
pub async fn post_visual(
    State(state): State<AppState>,
    Json(body): Json<request::PostVisualBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_visual";

    let params = VisualSearch {
        image: body.data.image_url,
        page: body.data.page,
        per_page: body.data.per_page,
    };
    match catalog::search_by_image(&state.catalog, &params).await {
        Err(e) => Err(catalog_err(FN_NAME, e)),
        Ok(payload) => Ok(Json(payload)),
    }
}

/// To map catalog client errors onto user facing errors. Catalog authentication failures are
/// service side problems, distinct from the end user's own session errors.
fn catalog_err(fn_name: &str, err: CatalogError) -> ErrResp {
    match err {
        CatalogError::Unauthenticated(e) => {
            error!("[{}] authenticate error: {}", fn_name, e);
            ErrResp::ErrIntMsg(Some(format!(
                "unable to authenticate with the catalog provider: {}",
                e
            )))
        }
        CatalogError::Transport(e) => {
            error!("[{}] transport error: {}", fn_name, e);
            ErrResp::ErrIntMsg(Some(format!("catalog transport error: {}", e)))
        }
        CatalogError::Upstream { status, body } => {
            warn!("[{}] upstream status {} body: {}", fn_name, status, body);
            ErrResp::ErrIntMsg(Some(format!("catalog status {}: {}", status, body)))
        }
        CatalogError::Malformed(e) => {
            error!("[{}] malformed response: {}", fn_name, e);
            ErrResp::ErrIntMsg(Some(format!("catalog malformed response: {}", e)))
        }
    }
}
