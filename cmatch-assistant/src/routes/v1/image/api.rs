use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
};
use log::error;

use cmatch_corelib::{err::ErrResp, http::Json};

use super::{super::super::State as AppState, response};
use crate::libs::imgbb;

/// `POST /{base}/api/v1/image`
///
/// `multipart/form-data` with an `image` part (the bytes) and an optional `name` part. The
/// image lands on the public image host; the returned URL is what visual search accepts.
pub async fn post_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_image";

    let mut image: Option<Vec<u8>> = None;
    let mut name: Option<String> = None;
    loop {
        let field = match multipart.next_field().await {
            Err(e) => return Err(ErrResp::ErrParam(Some(e.to_string()))),
            Ok(field) => match field {
                None => break,
                Some(field) => field,
            },
        };
        match field.name() {
            Some("image") => match field.bytes().await {
                Err(e) => return Err(ErrResp::ErrParam(Some(e.to_string()))),
                Ok(bytes) => image = Some(bytes.to_vec()),
            },
            Some("name") => match field.text().await {
                Err(e) => return Err(ErrResp::ErrParam(Some(e.to_string()))),
                Ok(text) => name = Some(text),
            },
            _ => (),
        }
    }
    let image = match image {
        None => return Err(ErrResp::ErrParam(Some("missing `image` part".to_string()))),
        Some(image) => image,
    };

    match imgbb::upload_image(&state.client, &state.imgbb, image, name).await {
        Err(e) => {
            error!("[{}] upload error: {}", FN_NAME, e);
            Err(ErrResp::ErrIntMsg(Some(format!("upload error: {}", e))))
        }
        Ok(url) => Ok(Json(response::PostImage {
            data: response::PostImageData { url },
        })),
    }
}
