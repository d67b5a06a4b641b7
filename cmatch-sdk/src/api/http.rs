//! A wrapped HTTP client that is used for catalog APIs with the following features:
//! - Use `client_credentials` grant type to get the access token from the catalog authorization
//!   server.
//! - Cache the token and re-authenticate before it expires, so callers never handle token state.
//!
//! Here is an example to create a client and run a text search:
//!
//! ```rust,no_run
//! use cmatch_sdk::api::{catalog, http::{Client, ClientOptions}};
//!
//! async fn example() {
//!     let opts = ClientOptions {
//!         token_url: "https://auth.catalog.example/oauth2/token".to_string(),
//!         search_url: "https://api.catalog.example/product/search".to_string(),
//!         visual_search_url: "https://api.catalog.example/image/search".to_string(),
//!         client_id: "CLIENT_ID".to_string(),
//!         client_secret: "CLIENT_SECRET".to_string(),
//!         ..Default::default()
//!     };
//!     let client = Client::new(opts).unwrap();
//!     let params = catalog::TextSearch {
//!         query: "shirt".to_string(),
//!         ..Default::default()
//!     };
//!     match catalog::search_products(&client, &params).await {
//!         Err(e) => {
//!             // Handle error.
//!         }
//!         Ok(payload) => {
//!             // `payload` is the upstream JSON document, untouched.
//!         }
//!     }
//! }
//! ```

use std::{
    error::Error as StdError,
    fmt,
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use chrono::{DateTime, Duration, Utc};
use reqwest::{header, Client as ReqwestClient};
use serde::Deserialize;
use serde_json::Value;

/// The HTTP client to request catalog APIs. With this client, you do not need to handle the
/// `client_credentials` token flow.
#[derive(Clone)]
pub struct Client {
    /// The underlying HTTP client instance.
    client: ReqwestClient,
    /// The authorization server token endpoint.
    token_url: String,
    /// The product (text) search endpoint.
    search_url: String,
    /// The visual (image) search endpoint.
    visual_search_url: String,
    /// Client ID.
    client_id: String,
    /// Client secret.
    client_secret: String,
    /// The requested token scope.
    scope: String,
    /// The `User-Agent` value for authorization requests.
    user_agent: String,
    /// The cached access token. Replaced as a whole value only.
    access_token: Arc<Mutex<Option<AccessToken>>>,
}

/// Options of the HTTP client [`Client`] that contains OAuth2 and endpoint information.
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// The authorization server token endpoint.
    pub token_url: String,
    /// The product (text) search endpoint.
    pub search_url: String,
    /// The visual (image) search endpoint.
    pub visual_search_url: String,
    /// Client ID.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// The requested token scope. Default is [`DEF_SCOPE`].
    pub scope: Option<String>,
    /// The `User-Agent` value for authorization requests. Default is [`DEF_USER_AGENT`].
    pub user_agent: Option<String>,
    /// Request timeout in seconds for all upstream calls. Default is [`DEF_TIMEOUT_SECS`].
    pub timeout_secs: Option<u64>,
}

/// A bearer credential with its (margin adjusted) expiry time.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Errors of catalog operations.
#[derive(Debug)]
pub enum Error {
    /// No token can be obtained. The catalog endpoint was not contacted.
    Unauthenticated(AuthError),
    /// Transport level failure talking to the catalog endpoint.
    Transport(String),
    /// The catalog endpoint returned a non-success status.
    Upstream { status: u16, body: String },
    /// The catalog endpoint returned a body that is not valid JSON.
    Malformed(String),
}

/// Errors of the token exchange.
#[derive(Debug)]
pub enum AuthError {
    /// Transport level failure talking to the authorization server.
    Transport(String),
    /// The authorization server returned a non-success status.
    Status { status: u16, body: String },
    /// The token response is not JSON or misses expected fields.
    Malformed(String),
}

/// Response from the OAuth2 token API.
#[derive(Deserialize)]
struct Oauth2TokenRes {
    id_token: String,
    expires_in: i64,
}

/// The default token scope.
pub const DEF_SCOPE: &'static str = "technology.catalog.read";
/// The default `User-Agent` value.
pub const DEF_USER_AGENT: &'static str = "cMatch";
/// The default upstream request timeout in seconds.
pub const DEF_TIMEOUT_SECS: u64 = 30;

/// Seconds subtracted from the upstream TTL so a token is never used within this window of its
/// real expiry.
const EXPIRES_MARGIN_SECS: i64 = 60;

impl AccessToken {
    /// The refresh boundary. A token whose remaining (margin adjusted) validity is gone is
    /// treated as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl Client {
    /// Create an instance.
    pub fn new(opts: ClientOptions) -> Result<Self, Error> {
        let timeout = match opts.timeout_secs {
            None => DEF_TIMEOUT_SECS,
            Some(secs) => secs,
        };
        let client = match ReqwestClient::builder()
            .timeout(StdDuration::from_secs(timeout))
            .build()
        {
            Err(e) => return Err(Error::Transport(e.to_string())),
            Ok(client) => client,
        };
        Ok(Client {
            client,
            token_url: opts.token_url,
            search_url: opts.search_url,
            visual_search_url: opts.visual_search_url,
            client_id: opts.client_id,
            client_secret: opts.client_secret,
            scope: match opts.scope {
                None => DEF_SCOPE.to_string(),
                Some(scope) => scope,
            },
            user_agent: match opts.user_agent {
                None => DEF_USER_AGENT.to_string(),
                Some(agent) => agent,
            },
            access_token: Arc::new(Mutex::new(None)),
        })
    }

    /// The product (text) search endpoint.
    pub fn search_url(&self) -> &str {
        self.search_url.as_str()
    }

    /// The visual (image) search endpoint.
    pub fn visual_search_url(&self) -> &str {
        self.visual_search_url.as_str()
    }

    /// To get a valid bearer token. Returns the cached token when it is not expired, or runs a
    /// `client_credentials` exchange.
    pub async fn token(&self) -> Result<String, AuthError> {
        {
            let mutex = self.access_token.lock().unwrap();
            if let Some(token) = (*mutex).as_ref() {
                if !token.is_expired(Utc::now()) {
                    return Ok(token.token.clone());
                }
            }
        }
        self.auth_token().await
    }

    /// To execute an authenticated GET request against a catalog endpoint and parse the JSON
    /// body. Token acquisition failures short-circuit before any catalog traffic.
    pub async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, Error> {
        let token = match self.token().await {
            Err(e) => return Err(Error::Unauthenticated(e)),
            Ok(token) => token,
        };

        let resp = match self
            .client
            .get(url)
            .query(query)
            .bearer_auth(token.as_str())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
        {
            Err(e) => return Err(Error::Transport(e.to_string())),
            Ok(resp) => resp,
        };
        let status = resp.status();
        let body = match resp.bytes().await {
            Err(e) => return Err(Error::Transport(e.to_string())),
            Ok(body) => body,
        };
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body: String::from_utf8_lossy(body.as_ref()).to_string(),
            });
        }
        match serde_json::from_slice::<Value>(body.as_ref()) {
            Err(e) => Err(Error::Malformed(e.to_string())),
            Ok(value) => Ok(value),
        }
    }

    /// To authorize the client and replace the cached access token.
    async fn auth_token(&self) -> Result<String, AuthError> {
        let body = [
            ("grant_type", "client_credentials"),
            ("scope", self.scope.as_str()),
        ];
        let resp = match self
            .client
            .post(self.token_url.as_str())
            .basic_auth(self.client_id.as_str(), Some(self.client_secret.as_str()))
            .header(header::USER_AGENT, self.user_agent.as_str())
            .form(&body)
            .send()
            .await
        {
            Err(e) => return Err(AuthError::Transport(e.to_string())),
            Ok(resp) => resp,
        };
        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Err(_) => "".to_string(),
                Ok(body) => body,
            };
            return Err(AuthError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let tokens = match resp.json::<Oauth2TokenRes>().await {
            Err(e) => return Err(AuthError::Malformed(e.to_string())),
            Ok(tokens) => tokens,
        };

        let token = AccessToken {
            token: tokens.id_token,
            expires_at: Utc::now() + Duration::seconds(tokens.expires_in - EXPIRES_MARGIN_SECS),
        };
        {
            let mut mutex = self.access_token.lock().unwrap();
            *mutex = Some(token.clone());
        }
        Ok(token.token)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unauthenticated(e) => write!(f, "unable to authenticate: {}", e),
            Error::Transport(e) => write!(f, "transport error: {}", e),
            Error::Upstream { status, body } => {
                write!(f, "upstream status {} with body: {}", status, body)
            }
            Error::Malformed(e) => write!(f, "malformed response: {}", e),
        }
    }
}

impl StdError for Error {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::Transport(e) => write!(f, "transport error: {}", e),
            AuthError::Status { status, body } => {
                write!(f, "token endpoint status {} with body: {}", status, body)
            }
            AuthError::Malformed(e) => write!(f, "malformed token response: {}", e),
        }
    }
}

impl StdError for AuthError {}
