use laboratory::{describe, expect, SpecContext, Suite};
use serde_json::json;

use cmatch_sdk::api::product::{self, MappingError, Product};

use crate::TestState;

pub fn suite() -> Suite<TestState> {
    describe("product", |context| {
        context.it("from_value() with a complete record", fn_from_value_complete);
        context.it("from_value() with missing fields", fn_from_value_missing);
        context.it("from_value() with bad containers", fn_from_value_bad_container);
        context.it("map_products() keeps siblings of bad records", fn_map_skip);
        context.it("map_products() with price-less record", fn_map_missing_price);
        context.it("map_products() payload shapes", fn_map_payload_shapes);
    })
}

fn fn_from_value_complete(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let record = json!({
        "id": "p-1",
        "name": "linen shirt",
        "brand": "zara",
        "link": "https://example.com/p-1",
        "price": {"currency": "EUR", "value": {"current": 19.99, "original": 29.99}}
    });
    let product = match Product::from_value(&record) {
        Err(e) => return Err(format!("from_value() error: {}", e)),
        Ok(product) => product,
    };
    expect(product).to_equal(Product {
        id: Some("p-1".to_string()),
        name: Some("linen shirt".to_string()),
        price_currency: Some("EUR".to_string()),
        price_current: Some(19.99),
        price_original: Some(29.99),
        link: Some("https://example.com/p-1".to_string()),
        brand: Some("zara".to_string()),
    })?;

    // Numeric IDs are kept as their decimal string.
    let record = json!({"id": 42});
    let product = match Product::from_value(&record) {
        Err(e) => return Err(format!("from_value() numeric id error: {}", e)),
        Ok(product) => product,
    };
    expect(product.id).to_equal(Some("42".to_string()))
}

fn fn_from_value_missing(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let record = json!({"name": "bare"});
    let product = match Product::from_value(&record) {
        Err(e) => return Err(format!("from_value() error: {}", e)),
        Ok(product) => product,
    };
    expect(product).to_equal(Product {
        name: Some("bare".to_string()),
        ..Default::default()
    })?;

    // `price` without `value` is not an error.
    let record = json!({"price": {"currency": "EUR"}});
    let product = match Product::from_value(&record) {
        Err(e) => return Err(format!("from_value() currency-only error: {}", e)),
        Ok(product) => product,
    };
    expect(product.price_currency).to_equal(Some("EUR".to_string()))?;
    expect(product.price_current).to_equal(None)?;
    expect(product.price_original).to_equal(None)
}

fn fn_from_value_bad_container(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    expect(Product::from_value(&json!("record"))).to_equal(Err(MappingError::NotObject))?;
    expect(Product::from_value(&json!({"price": "cheap"})))
        .to_equal(Err(MappingError::BadContainer("price")))?;
    expect(Product::from_value(&json!({"price": {"value": 19.99}})))
        .to_equal(Err(MappingError::BadContainer("price.value")))
}

fn fn_map_skip(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let payload = json!([
        {"id": "p-1"},
        {"id": "p-2"},
        "not a record",
        {"id": "p-4"},
    ]);
    let mapped = match product::map_products(&payload) {
        Err(e) => return Err(format!("map_products() error: {}", e)),
        Ok(mapped) => mapped,
    };
    expect(mapped.products.len()).to_equal(3)?;
    expect(mapped.products[2].id.clone()).to_equal(Some("p-4".to_string()))?;
    expect(mapped.skipped).to_equal(vec![(2, MappingError::NotObject)])
}

fn fn_map_missing_price(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let price = json!({"currency": "EUR", "value": {"current": 10.0, "original": 15.0}});
    let payload = json!([
        {"id": "p-1", "price": price},
        {"id": "p-2", "price": price},
        {"id": "p-3"},
        {"id": "p-4", "price": price},
        {"id": "p-5", "price": price},
    ]);
    let mapped = match product::map_products(&payload) {
        Err(e) => return Err(format!("map_products() error: {}", e)),
        Ok(mapped) => mapped,
    };
    expect(mapped.products.len()).to_equal(5)?;
    expect(mapped.skipped.len()).to_equal(0)?;
    let third = &mapped.products[2];
    expect(third.id.clone()).to_equal(Some("p-3".to_string()))?;
    expect(third.price_currency.clone()).to_equal(None)?;
    expect(third.price_current).to_equal(None)?;
    expect(third.price_original).to_equal(None)?;
    expect(mapped.products[3].price_current).to_equal(Some(10.0))
}

fn fn_map_payload_shapes(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let payload = json!({"products": [{"id": "p-1"}], "page": 1});
    let mapped = match product::map_products(&payload) {
        Err(e) => return Err(format!("map_products() object error: {}", e)),
        Ok(mapped) => mapped,
    };
    expect(mapped.products.len()).to_equal(1)?;

    match product::map_products(&json!({"page": 1})) {
        Err(MappingError::NoRecords) => (),
        Err(e) => return Err(format!("unexpected error: {}", e)),
        Ok(_) => return Err("object without records should not map".to_string()),
    }
    match product::map_products(&json!("payload")) {
        Err(MappingError::NoRecords) => (),
        Err(e) => return Err(format!("unexpected error: {}", e)),
        Ok(_) => return Err("scalar payload should not map".to_string()),
    }
    match product::map_products(&json!({"products": "none"})) {
        Err(MappingError::BadContainer("products")) => Ok(()),
        Err(e) => Err(format!("unexpected error: {}", e)),
        Ok(_) => Err("non-array products should not map".to_string()),
    }
}
