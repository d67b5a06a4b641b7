//! Program configurations.

use std::env;

use clap::{builder::RangedU64ValueParser, Arg, ArgMatches, Command};
use serde::Deserialize;

use cmatch_corelib::constants::DbEngine;

/// Configuration file object.
#[derive(Default, Deserialize)]
pub struct Config {
    pub db: Option<Db>,
    pub catalog: Option<Catalog>,
    pub imgbb: Option<Imgbb>,
    pub screenshot: Option<Screenshot>,
}

/// Database configuration object.
#[derive(Default, Deserialize)]
pub struct Db {
    /// Select the model implementation.
    /// - `sqlite`: pure SQLite.
    pub engine: Option<String>,
    pub sqlite: Option<Sqlite>,
}

/// SQLite configuration object.
#[derive(Default, Deserialize)]
pub struct Sqlite {
    /// Use absolute/relative path.
    pub path: Option<String>,
}

/// Catalog API configuration object.
#[derive(Default, Deserialize)]
pub struct Catalog {
    /// The authorization server token endpoint.
    #[serde(rename = "tokenUrl")]
    pub token_url: Option<String>,
    /// The product (text) search endpoint.
    #[serde(rename = "searchUrl")]
    pub search_url: Option<String>,
    /// The visual (image) search endpoint.
    #[serde(rename = "visualUrl")]
    pub visual_url: Option<String>,
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
    #[serde(rename = "clientSecret")]
    pub client_secret: Option<String>,
    /// The requested token scope. Missing this to use the SDK default.
    pub scope: Option<String>,
    /// The `User-Agent` value for authorization requests. Missing this to use the SDK default.
    #[serde(rename = "userAgent")]
    pub user_agent: Option<String>,
    /// Upstream request timeout in seconds. Missing this to use the SDK default.
    #[serde(rename = "timeoutSecs")]
    pub timeout_secs: Option<u64>,
}

/// Image host configuration object.
#[derive(Default, Deserialize)]
pub struct Imgbb {
    /// The upload endpoint.
    pub url: Option<String>,
    /// The API key sent with every upload.
    pub key: Option<String>,
}

/// Screenshot capture configuration object.
#[derive(Default, Deserialize)]
pub struct Screenshot {
    /// The WebDriver endpoint, for example `http://localhost:9515`.
    pub webdriver: Option<String>,
    /// Page load/capture timeout in seconds.
    #[serde(rename = "timeoutSecs")]
    pub timeout_secs: Option<u64>,
}

pub const DEF_ENGINE: &'static str = DbEngine::SQLITE;
pub const DEF_SQLITE_PATH: &'static str = "assistant.db";
pub const DEF_CATALOG_TOKEN_URL: &'static str =
    "https://auth.inditex.com:443/openam/oauth2/itxid/itxidmp/access_token";
pub const DEF_CATALOG_SEARCH_URL: &'static str = "https://api.inditex.com/searchpmpa/products";
pub const DEF_CATALOG_VISUAL_URL: &'static str = "https://api.inditex.com/pubvsearch/products";
pub const DEF_IMGBB_URL: &'static str = "https://freeimage.host/api/1/upload";
pub const DEF_IMGBB_KEY: &'static str = "6d207e02198a847aa98d0a2a901485a5";
pub const DEF_WEBDRIVER: &'static str = "http://localhost:9515";
pub const DEF_SCREENSHOT_TIMEOUT_SECS: u64 = 30;

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("assistant.db.engine")
            .long("assistant.db.engine")
            .help("database engine")
            .num_args(1)
            .value_parser([DbEngine::SQLITE]),
    )
    .arg(
        Arg::new("assistant.db.sqlite.path")
            .long("assistant.db.sqlite.path")
            .help("SQLite path")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.tokenurl")
            .long("assistant.catalog.tokenurl")
            .help("catalog authorization server token endpoint")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.searchurl")
            .long("assistant.catalog.searchurl")
            .help("catalog product search endpoint")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.visualurl")
            .long("assistant.catalog.visualurl")
            .help("catalog visual search endpoint")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.clientid")
            .long("assistant.catalog.clientid")
            .help("catalog API client ID")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.clientsecret")
            .long("assistant.catalog.clientsecret")
            .help("catalog API client secret")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.scope")
            .long("assistant.catalog.scope")
            .help("catalog API token scope")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.useragent")
            .long("assistant.catalog.useragent")
            .help("User-Agent value for catalog authorization requests")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.catalog.timeout")
            .long("assistant.catalog.timeout")
            .help("catalog request timeout in seconds")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..=3600)),
    )
    .arg(
        Arg::new("assistant.imgbb.url")
            .long("assistant.imgbb.url")
            .help("image host upload endpoint")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.imgbb.key")
            .long("assistant.imgbb.key")
            .help("image host API key")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.screenshot.webdriver")
            .long("assistant.screenshot.webdriver")
            .help("WebDriver endpoint for screenshot capture")
            .num_args(1),
    )
    .arg(
        Arg::new("assistant.screenshot.timeout")
            .long("assistant.screenshot.timeout")
            .help("screenshot capture timeout in seconds")
            .num_args(1)
            .value_parser(RangedU64ValueParser::<u64>::new().range(1..=3600)),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        db: Some(Db {
            engine: match args.get_one::<String>("assistant.db.engine") {
                None => match env::var("ASSISTANT_DB_ENGINE") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            sqlite: Some(Sqlite {
                path: match args.get_one::<String>("assistant.db.sqlite.path") {
                    None => match env::var("ASSISTANT_DB_SQLITE_PATH") {
                        Err(_) => None,
                        Ok(v) => Some(v),
                    },
                    Some(v) => Some(v.clone()),
                },
            }),
        }),
        catalog: Some(Catalog {
            token_url: match args.get_one::<String>("assistant.catalog.tokenurl") {
                None => match env::var("ASSISTANT_CATALOG_TOKEN_URL") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            search_url: match args.get_one::<String>("assistant.catalog.searchurl") {
                None => match env::var("ASSISTANT_CATALOG_SEARCH_URL") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            visual_url: match args.get_one::<String>("assistant.catalog.visualurl") {
                None => match env::var("ASSISTANT_CATALOG_VISUAL_URL") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            client_id: match args.get_one::<String>("assistant.catalog.clientid") {
                None => match env::var("ASSISTANT_CATALOG_CLIENT_ID") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            client_secret: match args.get_one::<String>("assistant.catalog.clientsecret") {
                None => match env::var("ASSISTANT_CATALOG_CLIENT_SECRET") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            scope: match args.get_one::<String>("assistant.catalog.scope") {
                None => match env::var("ASSISTANT_CATALOG_SCOPE") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            user_agent: match args.get_one::<String>("assistant.catalog.useragent") {
                None => match env::var("ASSISTANT_CATALOG_USER_AGENT") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            timeout_secs: match args.get_one::<u64>("assistant.catalog.timeout") {
                None => match env::var("ASSISTANT_CATALOG_TIMEOUT") {
                    Err(_) => None,
                    Ok(v) => match v.parse::<u64>() {
                        Err(_) => None,
                        Ok(v) => Some(v),
                    },
                },
                Some(v) => Some(*v),
            },
        }),
        imgbb: Some(Imgbb {
            url: match args.get_one::<String>("assistant.imgbb.url") {
                None => match env::var("ASSISTANT_IMGBB_URL") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            key: match args.get_one::<String>("assistant.imgbb.key") {
                None => match env::var("ASSISTANT_IMGBB_KEY") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
        }),
        screenshot: Some(Screenshot {
            webdriver: match args.get_one::<String>("assistant.screenshot.webdriver") {
                None => match env::var("ASSISTANT_SCREENSHOT_WEBDRIVER") {
                    Err(_) => None,
                    Ok(v) => Some(v),
                },
                Some(v) => Some(v.clone()),
            },
            timeout_secs: match args.get_one::<u64>("assistant.screenshot.timeout") {
                None => match env::var("ASSISTANT_SCREENSHOT_TIMEOUT") {
                    Err(_) => None,
                    Ok(v) => match v.parse::<u64>() {
                        Err(_) => None,
                        Ok(v) => Some(v),
                    },
                },
                Some(v) => Some(*v),
            },
        }),
    })
}

/// Fill missing configuration with default values.
pub fn apply_default(config: &Config) -> Config {
    Config {
        db: Some(Db {
            engine: match config.db.as_ref() {
                None => Some(DEF_ENGINE.to_string()),
                Some(db) => match db.engine.as_deref() {
                    Some(DbEngine::SQLITE) => Some(DbEngine::SQLITE.to_string()),
                    _ => Some(DEF_ENGINE.to_string()),
                },
            },
            sqlite: Some(Sqlite {
                path: match config.db.as_ref() {
                    None => Some(DEF_SQLITE_PATH.to_string()),
                    Some(db) => match db.sqlite.as_ref() {
                        None => Some(DEF_SQLITE_PATH.to_string()),
                        Some(sqlite) => match sqlite.path.as_ref() {
                            None => Some(DEF_SQLITE_PATH.to_string()),
                            Some(path) => Some(path.clone()),
                        },
                    },
                },
            }),
        }),
        catalog: {
            let catalog = config.catalog.as_ref();
            Some(Catalog {
                token_url: match catalog.and_then(|c| c.token_url.as_ref()) {
                    None => Some(DEF_CATALOG_TOKEN_URL.to_string()),
                    Some(url) => Some(url.clone()),
                },
                search_url: match catalog.and_then(|c| c.search_url.as_ref()) {
                    None => Some(DEF_CATALOG_SEARCH_URL.to_string()),
                    Some(url) => Some(url.clone()),
                },
                visual_url: match catalog.and_then(|c| c.visual_url.as_ref()) {
                    None => Some(DEF_CATALOG_VISUAL_URL.to_string()),
                    Some(url) => Some(url.clone()),
                },
                client_id: match catalog.and_then(|c| c.client_id.as_ref()) {
                    None => Some("".to_string()),
                    Some(id) => Some(id.clone()),
                },
                client_secret: match catalog.and_then(|c| c.client_secret.as_ref()) {
                    None => Some("".to_string()),
                    Some(secret) => Some(secret.clone()),
                },
                scope: catalog.and_then(|c| c.scope.clone()),
                user_agent: catalog.and_then(|c| c.user_agent.clone()),
                timeout_secs: catalog.and_then(|c| c.timeout_secs),
            })
        },
        imgbb: {
            let imgbb = config.imgbb.as_ref();
            Some(Imgbb {
                url: match imgbb.and_then(|c| c.url.as_ref()) {
                    None => Some(DEF_IMGBB_URL.to_string()),
                    Some(url) => Some(url.clone()),
                },
                key: match imgbb.and_then(|c| c.key.as_ref()) {
                    None => Some(DEF_IMGBB_KEY.to_string()),
                    Some(key) => Some(key.clone()),
                },
            })
        },
        screenshot: {
            let screenshot = config.screenshot.as_ref();
            Some(Screenshot {
                webdriver: match screenshot.and_then(|c| c.webdriver.as_ref()) {
                    None => Some(DEF_WEBDRIVER.to_string()),
                    Some(url) => Some(url.clone()),
                },
                timeout_secs: match screenshot.and_then(|c| c.timeout_secs) {
                    None => Some(DEF_SCREENSHOT_TIMEOUT_SECS),
                    Some(secs) => Some(secs),
                },
            })
        },
    }
}
