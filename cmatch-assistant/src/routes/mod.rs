use std::{error::Error as StdError, sync::Arc};

use axum::{response::IntoResponse, Router};
use serde::{Deserialize, Serialize};

use cmatch_corelib::http::{Json, Query};
use cmatch_sdk::api::http::{Client as CatalogClient, ClientOptions as CatalogClientOptions};

use crate::{
    libs::{
        config::{self, Config},
        imgbb::ImgbbOptions,
        screenshot::ScreenshotOptions,
    },
    models::{self, ConnOptions, Model, SqliteOptions},
};

pub mod middleware;
mod pages;
mod v1;

/// The resources used by this service.
#[derive(Clone)]
pub struct State {
    /// The scope root path for the service.
    ///
    /// For example `/assistant`, the APIs are
    /// - `http://host:port/assistant/api/v1/auth/xxx`
    /// - `http://host:port/assistant/api/v1/user/xxx`
    /// - `http://host:port/assistant/api/v1/item/xxx`
    /// - `http://host:port/assistant/api/v1/search/xxx`
    pub scope_path: &'static str,
    /// The database model.
    pub model: Arc<dyn Model>,
    /// The catalog API client with its own token management.
    pub catalog: CatalogClient,
    /// The client for internal HTTP requests (image host upload).
    pub client: reqwest::Client,
    /// Image host upload information.
    pub imgbb: ImgbbOptions,
    /// Screenshot capture information.
    pub screenshot: ScreenshotOptions,
}

/// The assistant specific error codes in addition to standard
/// [`ErrResp`](cmatch_corelib::err::ErrResp).
pub struct ErrReq;

/// Query parameters for `GET /version`
#[derive(Deserialize)]
pub struct GetVersionQuery {
    q: Option<String>,
}

#[derive(Serialize)]
struct GetVersionRes<'a> {
    data: GetVersionResData<'a>,
}

#[derive(Serialize)]
struct GetVersionResData<'a> {
    name: &'a str,
    version: &'a str,
}

const SERV_NAME: &'static str = env!("CARGO_PKG_NAME");
const SERV_VER: &'static str = env!("CARGO_PKG_VERSION");

impl ErrReq {
    pub const USER_EXIST: (u16, &'static str) = (400, "err_assistant_user_exist");
}

/// To create resources for the service.
pub async fn new_state(
    scope_path: &'static str,
    conf: &Config,
) -> Result<State, Box<dyn StdError>> {
    let conf = config::apply_default(conf);
    let db_conf = conf.db.as_ref().unwrap().sqlite.as_ref().unwrap();
    let db_opts = ConnOptions::Sqlite(SqliteOptions {
        path: db_conf.path.as_ref().unwrap().to_string(),
    });
    let model = models::new(&db_opts).await?;

    let catalog_conf = conf.catalog.as_ref().unwrap();
    let catalog = match CatalogClient::new(CatalogClientOptions {
        token_url: catalog_conf.token_url.as_ref().unwrap().clone(),
        search_url: catalog_conf.search_url.as_ref().unwrap().clone(),
        visual_search_url: catalog_conf.visual_url.as_ref().unwrap().clone(),
        client_id: catalog_conf.client_id.as_ref().unwrap().clone(),
        client_secret: catalog_conf.client_secret.as_ref().unwrap().clone(),
        scope: catalog_conf.scope.clone(),
        user_agent: catalog_conf.user_agent.clone(),
        timeout_secs: catalog_conf.timeout_secs,
    }) {
        Err(e) => return Err(Box::new(e)),
        Ok(client) => client,
    };

    let imgbb_conf = conf.imgbb.as_ref().unwrap();
    let screenshot_conf = conf.screenshot.as_ref().unwrap();
    Ok(State {
        scope_path: match scope_path.len() {
            0 => "/",
            _ => scope_path,
        },
        model,
        catalog,
        client: reqwest::Client::new(),
        imgbb: ImgbbOptions {
            url: imgbb_conf.url.as_ref().unwrap().clone(),
            key: imgbb_conf.key.as_ref().unwrap().clone(),
        },
        screenshot: ScreenshotOptions {
            webdriver_url: screenshot_conf.webdriver.as_ref().unwrap().clone(),
            timeout_secs: screenshot_conf.timeout_secs.unwrap(),
        },
    })
}

/// To register service URIs in the specified root path.
pub fn new_service(state: &State) -> Router {
    Router::new().nest(
        &state.scope_path,
        Router::new()
            .merge(pages::new_service(state))
            .merge(v1::auth::new_service("/api/v1/auth", state))
            .merge(v1::user::new_service("/api/v1/user", state))
            .merge(v1::item::new_service("/api/v1/item", state))
            .merge(v1::search::new_service("/api/v1/search", state))
            .merge(v1::image::new_service("/api/v1/image", state))
            .merge(v1::screenshot::new_service("/api/v1/screenshot", state)),
    )
}

pub async fn get_version(Query(query): Query<GetVersionQuery>) -> impl IntoResponse {
    if let Some(q) = query.q.as_ref() {
        match q.as_str() {
            "name" => return SERV_NAME.into_response(),
            "version" => return SERV_VER.into_response(),
            _ => (),
        }
    }

    Json(GetVersionRes {
        data: GetVersionResData {
            name: SERV_NAME,
            version: SERV_VER,
        },
    })
    .into_response()
}
