use std::sync::atomic::Ordering;

use laboratory::{describe, expect, SpecContext, Suite};

use cmatch_sdk::api::{
    catalog::{self, TextSearch, VisualSearch},
    http::Error,
};

use super::{
    http::new_client,
    stub::{search_payload, SearchMode, TokenMode},
    STATE,
};
use crate::TestState;

pub fn suite() -> Suite<TestState> {
    describe("catalog", |context| {
        context.it("search_products() passes pagination through", fn_search_pass_through);
        context.it("search_products() applies defaults", fn_search_defaults);
        context.it(
            "search_products() short-circuits when unauthenticated",
            fn_search_unauthenticated,
        );
        context.it("search_products() with upstream error", fn_search_upstream_error);
        context.it("search_products() with malformed body", fn_search_malformed);
        context.it("search_by_image()", fn_search_by_image);
    })
}

fn fn_search_pass_through(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let stub = state.stub.as_ref().unwrap();
    stub.reset();

    let client = new_client();
    let params = TextSearch {
        query: "shirt".to_string(),
        brand: Some("zara".to_string()),
        page: Some(2),
        per_page: Some(10),
    };
    let payload = match runtime.block_on(async { catalog::search_products(&client, &params).await })
    {
        Err(e) => return Err(format!("search_products() error: {}", e)),
        Ok(payload) => payload,
    };

    let query = match stub.last_query() {
        None => return Err("no search request arrived".to_string()),
        Some(query) => query,
    };
    expect(query.get("query").map(|v| v.as_str())).to_equal(Some("shirt"))?;
    expect(query.get("brand").map(|v| v.as_str())).to_equal(Some("zara"))?;
    expect(query.get("page").map(|v| v.as_str())).to_equal(Some("2"))?;
    expect(query.get("perPage").map(|v| v.as_str())).to_equal(Some("10"))?;

    // The upstream document must arrive untouched, order included.
    expect(payload.eq(&search_payload())).to_equal(true)?;
    let names: Vec<&str> = payload["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["name"].as_str().unwrap_or(""))
        .collect();
    expect(names).to_equal(vec!["first", "second", "third"])
}

fn fn_search_defaults(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let stub = state.stub.as_ref().unwrap();
    stub.reset();

    let client = new_client();
    let params = TextSearch {
        query: "shirt".to_string(),
        ..Default::default()
    };
    if let Err(e) = runtime.block_on(async { catalog::search_products(&client, &params).await }) {
        return Err(format!("search_products() error: {}", e));
    }
    let query = match stub.last_query() {
        None => return Err("no search request arrived".to_string()),
        Some(query) => query,
    };
    expect(query.get("page").map(|v| v.as_str())).to_equal(Some("1"))?;
    expect(query.get("perPage").map(|v| v.as_str())).to_equal(Some("10"))?;
    expect(query.contains_key("brand")).to_equal(false)
}

fn fn_search_unauthenticated(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let stub = state.stub.as_ref().unwrap();
    stub.reset();

    stub.set_token_mode(TokenMode::Err500);
    let client = new_client();
    let params = TextSearch {
        query: "shirt".to_string(),
        ..Default::default()
    };
    match runtime.block_on(async { catalog::search_products(&client, &params).await }) {
        Err(Error::Unauthenticated(_)) => (),
        Err(e) => return Err(format!("unexpected error: {}", e)),
        Ok(_) => return Err("should not search without a token".to_string()),
    }
    // No catalog traffic may happen for an unauthenticated search.
    expect(stub.search_count.load(Ordering::SeqCst)).to_equal(0)
}

fn fn_search_upstream_error(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let stub = state.stub.as_ref().unwrap();
    stub.reset();

    stub.set_search_mode(SearchMode::Err500);
    let client = new_client();
    let params = TextSearch {
        query: "shirt".to_string(),
        ..Default::default()
    };
    match runtime.block_on(async { catalog::search_products(&client, &params).await }) {
        Err(Error::Upstream { status, body }) => {
            expect(status).to_equal(500)?;
            expect(body).to_equal("search error".to_string())
        }
        Err(e) => Err(format!("unexpected error: {}", e)),
        Ok(_) => Err("should not succeed on upstream error".to_string()),
    }
}

fn fn_search_malformed(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let stub = state.stub.as_ref().unwrap();
    stub.reset();

    stub.set_search_mode(SearchMode::BadJson);
    let client = new_client();
    let params = TextSearch {
        query: "shirt".to_string(),
        ..Default::default()
    };
    match runtime.block_on(async { catalog::search_products(&client, &params).await }) {
        Err(Error::Malformed(_)) => Ok(()),
        Err(e) => Err(format!("unexpected error: {}", e)),
        Ok(_) => Err("should not succeed on non-JSON body".to_string()),
    }
}

fn fn_search_by_image(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let stub = state.stub.as_ref().unwrap();
    stub.reset();

    let client = new_client();
    let params = VisualSearch {
        image: "https://img.example.com/photo.jpg".to_string(),
        ..Default::default()
    };
    let payload = match runtime.block_on(async { catalog::search_by_image(&client, &params).await })
    {
        Err(e) => return Err(format!("search_by_image() error: {}", e)),
        Ok(payload) => payload,
    };
    expect(payload.eq(&search_payload())).to_equal(true)?;

    let query = match stub.last_query() {
        None => return Err("no search request arrived".to_string()),
        Some(query) => query,
    };
    expect(query.get("image").map(|v| v.as_str()))
        .to_equal(Some("https://img.example.com/photo.jpg"))?;
    expect(query.get("page").map(|v| v.as_str())).to_equal(Some("1"))?;
    expect(query.get("perPage").map(|v| v.as_str())).to_equal(Some("5"))?;
    expect(query.contains_key("query")).to_equal(false)
}
