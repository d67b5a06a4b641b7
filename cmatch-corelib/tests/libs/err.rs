use axum::{http::StatusCode, response::IntoResponse};
use laboratory::{expect, SpecContext};

use cmatch_corelib::err::{self, ErrResp};

use crate::TestState;

/// Test [`err::to_json`].
pub fn to_json(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(err::to_json(err::E_PARAM, None)).to_equal("{\"code\":\"err_param\"}".to_string())?;
    expect(err::to_json(err::E_AUTH, Some("msg")))
        .to_equal("{\"code\":\"err_auth\",\"message\":\"msg\"}".to_string())
}

/// Test [`ErrResp::fmt`].
pub fn fmt(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(format!("{}", ErrResp::ErrParam(None))).to_equal("{\"code\":\"err_param\"}".to_string())?;
    expect(format!("{}", ErrResp::ErrParam(Some("msg".to_string()))))
        .to_equal("{\"code\":\"err_param\",\"message\":\"msg\"}".to_string())?;
    expect(format!("{}", ErrResp::Custom(400, "err_custom", None)))
        .to_equal("{\"code\":\"err_custom\"}".to_string())
}

/// Test [`ErrResp::into_response`].
pub fn into_response(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let cases = vec![
        (ErrResp::ErrAuth(None), StatusCode::UNAUTHORIZED),
        (ErrResp::ErrDb(None), StatusCode::SERVICE_UNAVAILABLE),
        (ErrResp::ErrIntMsg(None), StatusCode::SERVICE_UNAVAILABLE),
        (ErrResp::ErrNotFound(None), StatusCode::NOT_FOUND),
        (ErrResp::ErrParam(None), StatusCode::BAD_REQUEST),
        (ErrResp::ErrPerm(None), StatusCode::FORBIDDEN),
        (ErrResp::ErrUnknown(None), StatusCode::INTERNAL_SERVER_ERROR),
        (
            ErrResp::Custom(503, "err_custom", None),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    ];
    for (resp, code) in cases {
        expect(resp.into_response().status()).to_equal(code)?;
    }
    Ok(())
}
