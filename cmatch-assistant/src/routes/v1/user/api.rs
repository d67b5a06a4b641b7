use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};
use chrono::Utc;
use log::{error, warn};
use serde_json::Map;

use cmatch_corelib::{
    err::ErrResp,
    http::Json,
    strings::{self, time_str},
};

use super::{
    super::super::{ErrReq, State as AppState},
    request, response,
};
use crate::models::{
    access_token::QueryCond as AccessTokenQueryCond,
    user::{QueryCond, Updates, User},
    Model,
};

const ID_RAND_LEN: usize = 8;
const SALT_LEN: usize = 8;

/// `POST /{base}/api/v1/user`
pub async fn post_user(
    State(state): State<AppState>,
    Json(body): Json<request::PostUserBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_user";

    let account = body.data.account.to_lowercase();
    if !strings::is_account(account.as_str()) {
        return Err(ErrResp::ErrParam(Some(
            "`account` must be email or [A-Za-z0-9]{1}[A-Za-z0-9-_]*".to_string(),
        )));
    } else if body.data.password.len() == 0 {
        return Err(ErrResp::ErrParam(Some(
            "`password` must at least one character".to_string(),
        )));
    }
    if let Some(info) = body.data.info.as_ref() {
        for (k, _) in info.iter() {
            if k.len() == 0 {
                return Err(ErrResp::ErrParam(Some(
                    "`info` key must not be empty".to_string(),
                )));
            }
        }
    }

    let cond = QueryCond {
        account: Some(account.as_str()),
        ..Default::default()
    };
    match state.model.user().get(&cond).await {
        Err(e) => {
            error!("[{}] get error: {}", FN_NAME, e);
            return Err(ErrResp::ErrDb(Some(e.to_string())));
        }
        Ok(user) => match user {
            None => (),
            Some(_) => {
                return Err(ErrResp::Custom(
                    ErrReq::USER_EXIST.0,
                    ErrReq::USER_EXIST.1,
                    None,
                ));
            }
        },
    }

    let now = Utc::now();
    let user_id = strings::random_id(&now, ID_RAND_LEN);
    let salt = strings::randomstring(SALT_LEN);
    let user = User {
        user_id: user_id.clone(),
        account,
        created_at: now,
        modified_at: now,
        password: strings::password_hash(body.data.password.as_str(), salt.as_str()),
        salt,
        name: match body.data.name.as_ref() {
            None => "".to_string(),
            Some(name) => name.clone(),
        },
        info: match body.data.info.as_ref() {
            None => Map::new(),
            Some(info) => info.clone(),
        },
    };
    if let Err(e) = state.model.user().add(&user).await {
        error!("[{}] add error: {}", FN_NAME, e);
        return Err(ErrResp::ErrDb(Some(e.to_string())));
    }
    Ok(Json(response::PostUser {
        data: response::PostUserData { user_id },
    }))
}

/// `GET /{base}/api/v1/user`
pub async fn get_user(Extension(user): Extension<User>) -> impl IntoResponse {
    Json(response::GetUser {
        data: response::GetUserData {
            account: user.account.clone(),
            created_at: time_str(&user.created_at),
            modified_at: time_str(&user.modified_at),
            name: user.name.clone(),
            info: user.info.clone(),
        },
    })
}

/// `PATCH /{base}/api/v1/user`
pub async fn patch_user(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(body): Json<request::PatchUserBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "patch_user";

    let user_id = user.user_id.as_str();
    let updates = get_updates(&body.data)?;
    if let Err(e) = state.model.user().update(user_id, &updates).await {
        error!("[{}] {}", FN_NAME, e);
        return Err(ErrResp::ErrDb(Some(e.to_string())));
    }
    if updates.password.is_some() {
        remove_tokens(&FN_NAME, &state.model, user_id).await;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// To get the updates structure from the request body. Returns error if there is nothing to
/// update.
fn get_updates<'a>(body: &'a request::PatchUserData) -> Result<Updates<'a>, ErrResp> {
    let mut updates = Updates {
        ..Default::default()
    };
    let mut count = 0;
    if let Some(password) = body.password.as_ref() {
        if password.len() == 0 {
            return Err(ErrResp::ErrParam(Some(
                "`password` must at least one character".to_string(),
            )));
        }
        let salt = strings::randomstring(SALT_LEN);
        updates.password = Some(strings::password_hash(password.as_str(), salt.as_str()));
        updates.salt = Some(salt);
        count += 1;
    }
    if let Some(name) = body.name.as_ref() {
        updates.name = Some(name.as_str());
        count += 1;
    }
    if let Some(info) = body.info.as_ref() {
        for (k, _) in info.iter() {
            if k.len() == 0 {
                return Err(ErrResp::ErrParam(Some(
                    "`info` key must not be empty".to_string(),
                )));
            }
        }
        updates.info = Some(info);
        count += 1;
    }
    if count == 0 {
        return Err(ErrResp::ErrParam(Some("at least one parameter".to_string())));
    }
    updates.modified_at = Some(Utc::now());
    Ok(updates)
}

/// To remove the user's access tokens after a password change.
async fn remove_tokens(fn_name: &str, model: &std::sync::Arc<dyn Model>, user_id: &str) {
    let cond = AccessTokenQueryCond {
        user_id: Some(user_id),
        ..Default::default()
    };
    if let Err(e) = model.access_token().del(&cond).await {
        warn!("[{}] delete access token error: {}", fn_name, e);
    }
}
