use axum::{body::Body, extract::Request, http::header};
use laboratory::{expect, SpecContext};

use cmatch_corelib::http;

use crate::TestState;

/// Test [`http::parse_header_auth`].
pub fn parse_header_auth(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let req = Request::builder().body(Body::empty()).unwrap();
    let result = http::parse_header_auth(&req);
    match result {
        Err(e) => return Err(format!("empty Authorization header error: {}", e)),
        Ok(content) => expect(content).to_equal(None)?,
    }

    let req = Request::builder()
        .header(header::AUTHORIZATION, "test")
        .header(header::AUTHORIZATION, "test")
        .body(Body::empty())
        .unwrap();
    let result = http::parse_header_auth(&req);
    if result.is_ok() {
        return Err("multiple Authorization header not error".to_string());
    }

    let req = Request::builder()
        .header(header::AUTHORIZATION, "test")
        .body(Body::empty())
        .unwrap();
    let result = http::parse_header_auth(&req);
    match result {
        Err(e) => return Err(format!("Authorization header error: {}", e)),
        Ok(content) => expect(content).to_equal(Some("test".to_string())),
    }
}
