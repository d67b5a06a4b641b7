use axum::{routing, Router};

use super::super::{middleware::AuthService, State};

mod api;
mod request;
mod response;

pub fn new_service(scope_path: &str, state: &State) -> Router {
    Router::new().nest(
        scope_path,
        Router::new()
            .route(
                "/product",
                routing::post(api::post_product).layer(AuthService::new(&state.model)),
            )
            .route(
                "/product/mapped",
                routing::post(api::post_product_mapped).layer(AuthService::new(&state.model)),
            )
            .route(
                "/visual",
                routing::post(api::post_visual).layer(AuthService::new(&state.model)),
            )
            .with_state(state.clone()),
    )
}
