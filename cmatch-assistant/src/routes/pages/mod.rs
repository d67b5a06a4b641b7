//! HTML page routing. The pages are thin shells; the data they show comes from the
//! `/api/v1` endpoints through the static scripts.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing, Extension, Router,
};
use log::error;
use tera::{Context as TeraContext, Tera};

use cmatch_corelib::{constants::ItemKind, err::ErrResp};

use super::State as AppState;

mod template;

const TMPL_LOGIN: &'static str = "login";
const TMPL_REGISTER: &'static str = "register";
const TMPL_SEARCH: &'static str = "search";
const TMPL_VISUAL: &'static str = "visual";
const TMPL_ITEMS: &'static str = "items";
const TMPL_PROFILE: &'static str = "profile";

pub fn new_service(state: &AppState) -> Router {
    let mut tera = Tera::default();
    if let Err(e) = tera.add_raw_templates(vec![
        (TMPL_LOGIN, template::LOGIN),
        (TMPL_REGISTER, template::REGISTER),
        (TMPL_SEARCH, template::SEARCH),
        (TMPL_VISUAL, template::VISUAL),
        (TMPL_ITEMS, template::ITEMS),
        (TMPL_PROFILE, template::PROFILE),
    ]) {
        error!("[pages] parse templates error: {}", e);
    }

    Router::new()
        .route("/", routing::get(get_login))
        .route("/login", routing::get(get_login))
        .route("/register", routing::get(get_register))
        .route("/search", routing::get(get_search))
        .route("/visual", routing::get(get_visual))
        .route("/wishlist", routing::get(get_wishlist))
        .route("/closet", routing::get(get_closet))
        .route("/profile", routing::get(get_profile))
        .layer(Extension(Arc::new(tera)))
        .with_state(state.clone())
}

async fn get_login(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_LOGIN, |_| ())
}

async fn get_register(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_REGISTER, |_| ())
}

async fn get_search(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_SEARCH, |_| ())
}

async fn get_visual(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_VISUAL, |_| ())
}

async fn get_wishlist(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_ITEMS, |context| {
        context.insert("kind", ItemKind::WISHLIST);
        context.insert("page_title", "Wishlist");
    })
}

async fn get_closet(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_ITEMS, |context| {
        context.insert("kind", ItemKind::CLOSET);
        context.insert("page_title", "Closet");
    })
}

async fn get_profile(
    State(state): State<AppState>,
    Extension(tera): Extension<Arc<Tera>>,
) -> impl IntoResponse {
    render(&state, &tera, TMPL_PROFILE, |_| ())
}

fn render<F>(
    state: &AppState,
    tera: &Tera,
    name: &str,
    insert_fn: F,
) -> Result<Html<String>, ErrResp>
where
    F: FnOnce(&mut TeraContext),
{
    let mut context = TeraContext::new();
    context.insert("scope_path", state.scope_path);
    insert_fn(&mut context);
    match tera.render(name, &context) {
        Err(e) => {
            error!("[pages] render {} error: {}", name, e);
            Err(ErrResp::ErrUnknown(Some(e.to_string())))
        }
        Ok(page) => Ok(Html(page)),
    }
}
