//! Bearer token authentication middleware backed by the access token store.

use std::{
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use futures::future::BoxFuture;
use tower::{Layer, Service};

use cmatch_corelib::{err::ErrResp, http::parse_header_auth};

use crate::models::{user::QueryCond as UserQueryCond, Model};

#[derive(Clone)]
pub struct AuthService {
    model: Arc<dyn Model>,
}

#[derive(Clone)]
pub struct AuthMiddleware<S> {
    model: Arc<dyn Model>,
    service: S,
}

impl AuthService {
    pub fn new(model: &Arc<dyn Model>) -> Self {
        AuthService {
            model: model.clone(),
        }
    }
}

impl<S> Layer<S> for AuthService {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            model: self.model.clone(),
            service: inner,
        }
    }
}

impl<S> Service<Request> for AuthMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let mut svc = self.service.clone();
        let model = self.model.clone();

        Box::pin(async move {
            let token = match parse_header_auth(&req) {
                Err(e) => return Ok(e.into_response()),
                Ok(auth) => match auth {
                    None => {
                        let e = ErrResp::ErrParam(Some("missing token".to_string()));
                        return Ok(e.into_response());
                    }
                    Some(auth) => match parse_bearer_token(auth.as_str()) {
                        None => {
                            let e = ErrResp::ErrParam(Some("not a Bearer token".to_string()));
                            return Ok(e.into_response());
                        }
                        Some(token) => token.to_string(),
                    },
                },
            };

            let token_item = match model.access_token().get(token.as_str()).await {
                Err(e) => {
                    return Ok(ErrResp::ErrDb(Some(e.to_string())).into_response());
                }
                Ok(token_item) => match token_item {
                    None => {
                        let e = ErrResp::ErrAuth(Some("invalid token".to_string()));
                        return Ok(e.into_response());
                    }
                    Some(token_item) => token_item,
                },
            };
            if token_item.expires_at < Utc::now() {
                let e = ErrResp::ErrAuth(Some("token expired".to_string()));
                return Ok(e.into_response());
            }

            let cond = UserQueryCond {
                user_id: Some(token_item.user_id.as_str()),
                account: None,
            };
            let user = match model.user().get(&cond).await {
                Err(e) => {
                    return Ok(ErrResp::ErrDb(Some(e.to_string())).into_response());
                }
                Ok(user) => match user {
                    None => {
                        let e = ErrResp::ErrPerm(Some("user not exist".to_string()));
                        return Ok(e.into_response());
                    }
                    Some(user) => user,
                },
            };
            req.extensions_mut().insert(user);

            let res = svc.call(req).await?;
            Ok(res)
        })
    }
}

/// To extract the token of a `Bearer` Authorization header value.
pub fn parse_bearer_token(auth: &str) -> Option<&str> {
    let mut split = auth.splitn(2, ' ');
    let scheme = split.next()?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    match split.next() {
        None | Some("") => None,
        Some(token) => Some(token),
    }
}
