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
                "/",
                routing::post(api::post_item).layer(AuthService::new(&state.model)),
            )
            .route(
                "/count",
                routing::get(api::get_item_count).layer(AuthService::new(&state.model)),
            )
            .route(
                "/list",
                routing::get(api::get_item_list).layer(AuthService::new(&state.model)),
            )
            .route(
                "/{item_id}",
                routing::patch(api::patch_item)
                    .delete(api::delete_item)
                    .layer(AuthService::new(&state.model)),
            )
            .with_state(state.clone()),
    )
}
