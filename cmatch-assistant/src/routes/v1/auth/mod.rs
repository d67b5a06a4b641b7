use axum::{routing, Router};

use super::super::{middleware::AuthService, State};

mod api;
mod request;
mod response;

pub fn new_service(scope_path: &str, state: &State) -> Router {
    Router::new().nest(
        scope_path,
        Router::new()
            .route("/login", routing::post(api::post_login))
            .route(
                "/tokeninfo",
                routing::get(api::get_tokeninfo).layer(AuthService::new(&state.model)),
            )
            .route(
                "/logout",
                routing::post(api::post_logout).layer(AuthService::new(&state.model)),
            )
            .with_state(state.clone()),
    )
}
