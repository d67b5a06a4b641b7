use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension,
};
use chrono::{Duration, Utc};
use log::error;

use cmatch_corelib::{err::ErrResp, http::Json, strings};

use super::{
    super::super::{middleware::parse_bearer_token, State as AppState},
    request, response,
};
use crate::models::{
    access_token::{AccessToken, QueryCond as AccessTokenQueryCond, EXPIRES},
    user::{QueryCond as UserQueryCond, User},
};

const TOKEN_LEN: usize = 32;

/// `POST /{base}/api/v1/auth/login`
pub async fn post_login(
    State(state): State<AppState>,
    Json(body): Json<request::PostLoginBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_login";

    let account = body.data.account.to_lowercase();
    let cond = UserQueryCond {
        account: Some(account.as_str()),
        ..Default::default()
    };
    let user = match state.model.user().get(&cond).await {
        Err(e) => {
            error!("[{}] get user error: {}", FN_NAME, e);
            return Err(ErrResp::ErrDb(Some(e.to_string())));
        }
        Ok(user) => match user {
            None => {
                return Err(ErrResp::ErrAuth(Some(
                    "invalid account or password".to_string(),
                )));
            }
            Some(user) => user,
        },
    };
    let hash = strings::password_hash(body.data.password.as_str(), user.salt.as_str());
    if hash != user.password {
        return Err(ErrResp::ErrAuth(Some(
            "invalid account or password".to_string(),
        )));
    }

    let token = AccessToken {
        access_token: strings::randomstring(TOKEN_LEN),
        expires_at: Utc::now() + Duration::seconds(EXPIRES),
        user_id: user.user_id.clone(),
    };
    if let Err(e) = state.model.access_token().add(&token).await {
        error!("[{}] add token error: {}", FN_NAME, e);
        return Err(ErrResp::ErrDb(Some(e.to_string())));
    }
    Ok(Json(response::PostLogin {
        data: response::PostLoginData {
            access_token: token.access_token,
            token_type: "bearer".to_string(),
            expires_in: EXPIRES,
        },
    }))
}

/// `GET /{base}/api/v1/auth/tokeninfo`
pub async fn get_tokeninfo(Extension(user): Extension<User>) -> impl IntoResponse {
    Json(response::GetTokenInfo {
        data: response::GetTokenInfoData {
            user_id: user.user_id,
            account: user.account,
            name: user.name,
        },
    })
}

/// `POST /{base}/api/v1/auth/logout`
pub async fn post_logout(state: State<AppState>, req: Request) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_logout";

    let token = match req.headers().get(header::AUTHORIZATION) {
        None => {
            return Err(ErrResp::ErrUnknown(Some(
                "no Authorization header".to_string(),
            )));
        }
        Some(auth) => match auth.to_str() {
            Err(e) => return Err(ErrResp::ErrParam(Some(e.to_string()))),
            Ok(auth) => match parse_bearer_token(auth) {
                None => return Err(ErrResp::ErrUnknown(Some("no Bearer token".to_string()))),
                Some(token) => token.to_string(),
            },
        },
    };

    let cond = AccessTokenQueryCond {
        access_token: Some(token.as_str()),
        ..Default::default()
    };
    if let Err(e) = state.model.access_token().del(&cond).await {
        error!("[{}] clear access token error: {}", FN_NAME, e);
        let e = ErrResp::ErrDb(Some(format!("clear access token error: {}", e)));
        return Err(e);
    }

    Ok(StatusCode::NO_CONTENT)
}
