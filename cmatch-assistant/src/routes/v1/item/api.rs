use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};
use chrono::Utc;
use log::error;

use cmatch_corelib::{
    constants::ItemKind,
    err::ErrResp,
    http::{Json, Path, Query},
    strings::{self, time_str},
};

use super::{super::super::State as AppState, request, response};
use crate::models::{
    item::{Item, ListOptions, ListQueryCond, QueryCond, SortCond, SortKey, Updates},
    user::User,
};

const LIST_LIMIT_DEFAULT: u64 = 100;
const ID_RAND_LEN: usize = 8;

/// `POST /{base}/api/v1/item`
pub async fn post_item(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(body): Json<request::PostItemBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_item";

    if !is_kind(body.data.kind.as_str()) {
        return Err(ErrResp::ErrParam(Some(
            "`kind` must be `wishlist` or `closet`".to_string(),
        )));
    } else if body.data.name.len() == 0 {
        return Err(ErrResp::ErrParam(Some(
            "`name` must at least one character".to_string(),
        )));
    }

    let now = Utc::now();
    let item_id = strings::random_id(&now, ID_RAND_LEN);
    let item = Item {
        item_id: item_id.clone(),
        user_id: user.user_id.clone(),
        kind: body.data.kind.clone(),
        created_at: now,
        modified_at: now,
        name: body.data.name.clone(),
        description: body.data.description.clone(),
        price: body.data.price,
        image: body.data.image.clone(),
    };
    if let Err(e) = state.model.item().add(&item).await {
        error!("[{}] add error: {}", FN_NAME, e);
        return Err(ErrResp::ErrDb(Some(e.to_string())));
    }
    Ok(Json(response::PostItem {
        data: response::PostItemData { item_id },
    }))
}

/// `GET /{base}/api/v1/item/count`
pub async fn get_item_count(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<request::GetItemCountQuery>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "get_item_count";

    let cond = ListQueryCond {
        user_id: Some(user.user_id.as_str()),
        kind: get_kind_cond(query.kind.as_deref())?,
        name_contains: match query.contains.as_deref() {
            None | Some("") => None,
            Some(contains) => Some(contains),
        },
    };
    match state.model.item().count(&cond).await {
        Err(e) => {
            error!("[{}] count error: {}", FN_NAME, e);
            Err(ErrResp::ErrDb(Some(e.to_string())))
        }
        Ok(count) => Ok(Json(response::GetItemCount {
            data: response::GetCountData { count },
        })),
    }
}

/// `GET /{base}/api/v1/item/list`
pub async fn get_item_list(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<request::GetItemListQuery>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "get_item_list";

    let cond = ListQueryCond {
        user_id: Some(user.user_id.as_str()),
        kind: get_kind_cond(query.kind.as_deref())?,
        name_contains: match query.contains.as_deref() {
            None | Some("") => None,
            Some(contains) => Some(contains),
        },
    };
    let sort = [SortCond {
        key: SortKey::CreatedAt,
        asc: false,
    }];
    let opts = ListOptions {
        cond: &cond,
        offset: query.offset,
        limit: match query.limit {
            None => Some(LIST_LIMIT_DEFAULT),
            Some(limit) => Some(limit),
        },
        sort: Some(&sort),
    };
    let list = match state.model.item().list(&opts).await {
        Err(e) => {
            error!("[{}] list error: {}", FN_NAME, e);
            return Err(ErrResp::ErrDb(Some(e.to_string())));
        }
        Ok(list) => list,
    };
    Ok(Json(response::GetItemList {
        data: list
            .into_iter()
            .map(|item| response::GetItemData {
                item_id: item.item_id,
                kind: item.kind,
                created_at: time_str(&item.created_at),
                modified_at: time_str(&item.modified_at),
                name: item.name,
                description: item.description,
                price: item.price,
                image: item.image,
            })
            .collect(),
    }))
}

/// `PATCH /{base}/api/v1/item/{item_id}`
pub async fn patch_item(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(param): Path<request::ItemIdPath>,
    Json(body): Json<request::PatchItemBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "patch_item";

    let updates = get_updates(&body.data)?;

    let item_id = param.item_id.as_str();
    get_own_item(FN_NAME, &state, user.user_id.as_str(), item_id).await?;
    if let Err(e) = state.model.item().update(item_id, &updates).await {
        error!("[{}] update error: {}", FN_NAME, e);
        return Err(ErrResp::ErrDb(Some(e.to_string())));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /{base}/api/v1/item/{item_id}`
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(param): Path<request::ItemIdPath>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "delete_item";

    let item_id = param.item_id.as_str();
    get_own_item(FN_NAME, &state, user.user_id.as_str(), item_id).await?;
    if let Err(e) = state.model.item().del(item_id).await {
        error!("[{}] del error: {}", FN_NAME, e);
        return Err(ErrResp::ErrDb(Some(e.to_string())));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn is_kind(kind: &str) -> bool {
    kind == ItemKind::WISHLIST || kind == ItemKind::CLOSET
}

/// To transform the `kind` query parameter into a list condition.
fn get_kind_cond(kind: Option<&str>) -> Result<Option<&str>, ErrResp> {
    match kind {
        None | Some("") => Ok(None),
        Some(kind) => match is_kind(kind) {
            false => Err(ErrResp::ErrParam(Some(
                "`kind` must be `wishlist` or `closet`".to_string(),
            ))),
            true => Ok(Some(kind)),
        },
    }
}

/// To get the item only when it belongs to the user. Missing or foreign items are "not found".
async fn get_own_item(
    fn_name: &str,
    state: &AppState,
    user_id: &str,
    item_id: &str,
) -> Result<Item, ErrResp> {
    let cond = QueryCond {
        item_id: Some(item_id),
        user_id: Some(user_id),
    };
    match state.model.item().get(&cond).await {
        Err(e) => {
            error!("[{}] get error: {}", fn_name, e);
            Err(ErrResp::ErrDb(Some(e.to_string())))
        }
        Ok(item) => match item {
            None => Err(ErrResp::ErrNotFound(None)),
            Some(item) => Ok(item),
        },
    }
}

/// To get the updates structure from the request body. Returns error if there is nothing to
/// update.
fn get_updates<'a>(body: &'a request::PatchItemData) -> Result<Updates<'a>, ErrResp> {
    let mut updates = Updates {
        ..Default::default()
    };
    let mut count = 0;
    if let Some(name) = body.name.as_ref() {
        if name.len() == 0 {
            return Err(ErrResp::ErrParam(Some(
                "`name` must at least one character".to_string(),
            )));
        }
        updates.name = Some(name.as_str());
        count += 1;
    }
    if let Some(description) = body.description.as_ref() {
        updates.description = Some(Some(description.as_str()));
        count += 1;
    }
    if let Some(price) = body.price {
        updates.price = Some(Some(price));
        count += 1;
    }
    if let Some(image) = body.image.as_ref() {
        updates.image = Some(Some(image.as_str()));
        count += 1;
    }
    if count == 0 {
        return Err(ErrResp::ErrParam(Some("at least one parameter".to_string())));
    }
    updates.modified_at = Some(Utc::now());
    Ok(updates)
}
