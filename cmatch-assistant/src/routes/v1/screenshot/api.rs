use axum::{extract::State, response::IntoResponse};
use log::error;
use url::Url;

use cmatch_corelib::{err::ErrResp, http::Json};

use super::{super::super::State as AppState, request, response};
use crate::libs::screenshot;

/// `POST /{base}/api/v1/screenshot`
pub async fn post_screenshot(
    State(state): State<AppState>,
    Json(body): Json<request::PostScreenshotBody>,
) -> impl IntoResponse {
    const FN_NAME: &'static str = "post_screenshot";

    let url = body.data.url.as_str();
    if Url::parse(url).is_err() {
        return Err(ErrResp::ErrParam(Some("`url` must be a valid URL".to_string())));
    }

    match screenshot::capture(&state.screenshot, url).await {
        Err(e) => {
            error!("[{}] capture error: {}", FN_NAME, e);
            Err(ErrResp::ErrIntMsg(Some(format!("capture error: {}", e))))
        }
        Ok(image) => Ok(Json(response::PostScreenshot {
            data: response::PostScreenshotData { image },
        })),
    }
}
