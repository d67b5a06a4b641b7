use chrono::{Duration, SubsecRound, Utc};
use laboratory::{expect, SpecContext};

use cmatch_assistant::models::{
    item::{Item, ListOptions, ListQueryCond, QueryCond, SortCond, SortKey, Updates},
    Model,
};

use super::STATE;
use crate::TestState;

fn new_item(item_id: &str, user_id: &str, kind: &str, name: &str) -> Item {
    let now = Utc::now().trunc_subsecs(3);
    Item {
        item_id: item_id.to_string(),
        user_id: user_id.to_string(),
        kind: kind.to_string(),
        created_at: now,
        modified_at: now,
        name: name.to_string(),
        description: None,
        price: None,
        image: None,
    }
}

/// Test table initialization.
pub fn init(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let result = runtime.block_on(async { model.init().await });
    expect(result.is_ok()).to_equal(true)
}

/// Test `get()` with the user condition.
pub fn get(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let mut item = new_item("item_id_get", "user_id_get", "wishlist", "linen shirt");
    item.description = Some("a shirt".to_string());
    item.price = Some(19.99);
    item.image = Some("https://img.example.com/1.jpg".to_string());
    if let Err(e) = runtime.block_on(async { model.add(&item).await }) {
        return Err(format!("model.add() error: {}", e));
    }

    let cond = QueryCond {
        item_id: Some("item_id_get"),
        ..Default::default()
    };
    let get_item = match runtime.block_on(async { model.get(&cond).await }) {
        Err(e) => return Err(format!("model.get() error: {}", e)),
        Ok(get_item) => match get_item {
            None => return Err("should get one".to_string()),
            Some(get_item) => get_item,
        },
    };
    expect(get_item).to_equal(item)?;

    // Another user must not see the item.
    let cond = QueryCond {
        item_id: Some("item_id_get"),
        user_id: Some("user_id_other"),
    };
    match runtime.block_on(async { model.get(&cond).await }) {
        Err(e) => Err(format!("model.get() other error: {}", e)),
        Ok(item) => match item {
            None => Ok(()),
            Some(_) => Err("should not get another user's item".to_string()),
        },
    }
}

/// Test `add()` with and without optional fields.
pub fn add(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let item = new_item("item_id_add", "user_id_add", "closet", "jeans");
    if let Err(e) = runtime.block_on(async { model.add(&item).await }) {
        return Err(format!("model.add() error: {}", e));
    }
    let cond = QueryCond {
        item_id: Some("item_id_add"),
        ..Default::default()
    };
    let get_item = match runtime.block_on(async { model.get(&cond).await }) {
        Err(e) => return Err(format!("model.get() error: {}", e)),
        Ok(get_item) => match get_item {
            None => return Err("should get one".to_string()),
            Some(get_item) => get_item,
        },
    };
    expect(get_item.description).to_equal(None)?;
    expect(get_item.price).to_equal(None)?;
    expect(get_item.image).to_equal(None)?;

    match runtime.block_on(async { model.add(&item).await }) {
        Err(_) => Ok(()),
        Ok(_) => Err("should not add a duplicate item ID".to_string()),
    }
}

/// Test `count()` with the filter conditions.
pub fn count(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let items = vec![
        new_item("item_count1", "user_count", "wishlist", "shirt one"),
        new_item("item_count2", "user_count", "wishlist", "shirt two"),
        new_item("item_count3", "user_count", "closet", "jeans"),
        new_item("item_count4", "user_count_other", "wishlist", "shirt"),
    ];
    for item in items.iter() {
        if let Err(e) = runtime.block_on(async { model.add(item).await }) {
            return Err(format!("model.add() error: {}", e));
        }
    }

    let cond = ListQueryCond {
        user_id: Some("user_count"),
        ..Default::default()
    };
    match runtime.block_on(async { model.count(&cond).await }) {
        Err(e) => return Err(format!("model.count() user error: {}", e)),
        Ok(count) => expect(count).to_equal(3)?,
    }

    let cond = ListQueryCond {
        user_id: Some("user_count"),
        kind: Some("wishlist"),
        ..Default::default()
    };
    match runtime.block_on(async { model.count(&cond).await }) {
        Err(e) => return Err(format!("model.count() kind error: {}", e)),
        Ok(count) => expect(count).to_equal(2)?,
    }

    let cond = ListQueryCond {
        user_id: Some("user_count"),
        name_contains: Some("two"),
        ..Default::default()
    };
    match runtime.block_on(async { model.count(&cond).await }) {
        Err(e) => Err(format!("model.count() contains error: {}", e)),
        Ok(count) => expect(count).to_equal(1),
    }
}

/// Test `list()` with sorting and paging.
pub fn list(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let now = Utc::now().trunc_subsecs(3);
    for (i, item_id) in ["item_list1", "item_list2", "item_list3"].iter().enumerate() {
        let mut item = new_item(item_id, "user_list", "wishlist", item_id);
        item.created_at = now + Duration::seconds(i as i64);
        item.modified_at = item.created_at;
        if let Err(e) = runtime.block_on(async { model.add(&item).await }) {
            return Err(format!("model.add() error: {}", e));
        }
    }

    let cond = ListQueryCond {
        user_id: Some("user_list"),
        ..Default::default()
    };
    let sort = [SortCond {
        key: SortKey::CreatedAt,
        asc: false,
    }];
    let opts = ListOptions {
        cond: &cond,
        offset: None,
        limit: None,
        sort: Some(&sort),
    };
    let list = match runtime.block_on(async { model.list(&opts).await }) {
        Err(e) => return Err(format!("model.list() error: {}", e)),
        Ok(list) => list,
    };
    expect(list.len()).to_equal(3)?;
    expect(list[0].item_id.as_str()).to_equal("item_list3")?;
    expect(list[2].item_id.as_str()).to_equal("item_list1")?;

    let opts = ListOptions {
        cond: &cond,
        offset: Some(1),
        limit: Some(1),
        sort: Some(&sort),
    };
    let list = match runtime.block_on(async { model.list(&opts).await }) {
        Err(e) => return Err(format!("model.list() page error: {}", e)),
        Ok(list) => list,
    };
    expect(list.len()).to_equal(1)?;
    expect(list[0].item_id.as_str()).to_equal("item_list2")
}

/// Test `update()`.
pub fn update(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let item = new_item("item_update", "user_update", "wishlist", "shirt");
    if let Err(e) = runtime.block_on(async { model.add(&item).await }) {
        return Err(format!("model.add() error: {}", e));
    }

    let now = Utc::now().trunc_subsecs(3);
    let updates = Updates {
        modified_at: Some(now),
        name: Some("shirt renamed"),
        description: Some(Some("new description")),
        price: Some(Some(9.99)),
        image: None,
    };
    if let Err(e) = runtime.block_on(async { model.update("item_update", &updates).await }) {
        return Err(format!("model.update() error: {}", e));
    }

    let cond = QueryCond {
        item_id: Some("item_update"),
        ..Default::default()
    };
    let get_item = match runtime.block_on(async { model.get(&cond).await }) {
        Err(e) => return Err(format!("model.get() error: {}", e)),
        Ok(get_item) => match get_item {
            None => return Err("should get the updated one".to_string()),
            Some(get_item) => get_item,
        },
    };
    expect(get_item.modified_at).to_equal(now)?;
    expect(get_item.name).to_equal("shirt renamed".to_string())?;
    expect(get_item.description).to_equal(Some("new description".to_string()))?;
    expect(get_item.price).to_equal(Some(9.99))?;

    // Clear a field with an explicit inner None.
    let updates = Updates {
        description: Some(None),
        ..Default::default()
    };
    if let Err(e) = runtime.block_on(async { model.update("item_update", &updates).await }) {
        return Err(format!("model.update() clear error: {}", e));
    }
    let get_item = match runtime.block_on(async { model.get(&cond).await }) {
        Err(e) => return Err(format!("model.get() clear error: {}", e)),
        Ok(get_item) => match get_item {
            None => return Err("should get the cleared one".to_string()),
            Some(get_item) => get_item,
        },
    };
    expect(get_item.description).to_equal(None)
}

/// Test `del()`.
pub fn del(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();
    let model = state.sqlite.as_ref().unwrap().item();

    let item = new_item("item_del", "user_del", "closet", "jeans");
    if let Err(e) = runtime.block_on(async { model.add(&item).await }) {
        return Err(format!("model.add() error: {}", e));
    }
    if let Err(e) = runtime.block_on(async { model.del("item_del").await }) {
        return Err(format!("model.del() error: {}", e));
    }

    let cond = QueryCond {
        item_id: Some("item_del"),
        ..Default::default()
    };
    match runtime.block_on(async { model.get(&cond).await }) {
        Err(e) => Err(format!("model.get() error: {}", e)),
        Ok(item) => match item {
            None => Ok(()),
            Some(_) => Err("should not get the deleted one".to_string()),
        },
    }
}
