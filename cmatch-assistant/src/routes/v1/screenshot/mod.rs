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
                routing::post(api::post_screenshot).layer(AuthService::new(&state.model)),
            )
            .with_state(state.clone()),
    )
}
