use std::{collections::HashMap, net::SocketAddr, time::Duration};

use laboratory::{describe, expect, SpecContext, Suite};
use tokio::{net::TcpListener, runtime::Runtime, time};

use cmatch_assistant::{
    libs::config::{self, Config},
    routes,
};

use crate::{remove_sqlite, TestState, TEST_ROUTES_SQLITE_PATH};

mod v1;

pub const STATE: &'static str = "routes";
pub const TEST_STUB_BASE: &'static str = "http://localhost:3181";
pub const WAIT_COUNT: isize = 100;
pub const WAIT_TICK: u64 = 100;

pub fn suite() -> Suite<TestState> {
    describe("routes", |context| {
        context.it("new_state", fn_new_state);

        context.describe_import(v1::auth::suite());
        context.describe_import(v1::user::suite());
        context.describe_import(v1::item::suite());
        context.describe_import(v1::search::suite());

        context.before_all(before_all_fn);
        context.after_all(after_all_fn);
    })
}

pub fn test_config() -> Config {
    let mut path = std::env::temp_dir();
    path.push(TEST_ROUTES_SQLITE_PATH);
    Config {
        db: Some(config::Db {
            engine: Some("sqlite".to_string()),
            sqlite: Some(config::Sqlite {
                path: Some(path.to_str().unwrap().to_string()),
            }),
        }),
        catalog: Some(config::Catalog {
            token_url: Some(format!("{}/oauth2/token", TEST_STUB_BASE)),
            search_url: Some(format!("{}/searchProducts", TEST_STUB_BASE)),
            visual_url: Some(format!("{}/imageSearch", TEST_STUB_BASE)),
            client_id: Some("client".to_string()),
            client_secret: Some("secret".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn before_all_fn(state: &mut HashMap<&'static str, TestState>) -> () {
    let runtime = match Runtime::new() {
        Err(e) => panic!("create runtime error: {}", e),
        Ok(runtime) => runtime,
    };

    let control = stub::StubControl::default();
    let app = stub::new_service(&control);
    let stub_svc = runtime.spawn(async move {
        let listener = match TcpListener::bind("0.0.0.0:3181").await {
            Err(e) => panic!("bind stub server error: {}", e),
            Ok(listener) => listener,
        };
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap()
    });
    if let Err(e) = runtime.block_on(async {
        for _ in 0..WAIT_COUNT {
            if reqwest::get(TEST_STUB_BASE).await.is_ok() {
                return Ok(());
            }
            time::sleep(Duration::from_millis(WAIT_TICK)).await;
        }
        Err("timeout")
    }) {
        panic!("create stub server error: {}", e);
    }

    let routes_state =
        match runtime.block_on(async { routes::new_state("/assistant", &test_config()).await }) {
            Err(e) => panic!("create routes state error: {}", e),
            Ok(state) => state,
        };

    state.insert(
        STATE,
        TestState {
            runtime: Some(runtime),
            routes_state: Some(routes_state),
            stub_svc: Some(stub_svc),
            stub: Some(control),
            ..Default::default()
        },
    );
}

fn after_all_fn(state: &mut HashMap<&'static str, TestState>) -> () {
    let state = state.get_mut(STATE).unwrap();
    if let Some(svc) = state.stub_svc.take() {
        svc.abort();
    }
    let mut path = std::env::temp_dir();
    path.push(TEST_ROUTES_SQLITE_PATH);
    remove_sqlite(path.to_str().unwrap());
}

fn fn_new_state(context: &mut SpecContext<TestState>) -> Result<(), String> {
    let state = context.state.borrow();
    let state = state.get(STATE).unwrap();
    let runtime = state.runtime.as_ref().unwrap();

    let new_state =
        match runtime.block_on(async { routes::new_state("scope", &test_config()).await }) {
            Err(e) => return Err(format!("new_state() error: {}", e)),
            Ok(new_state) => new_state,
        };
    expect(new_state.scope_path).to_equal("scope")?;
    if let Err(e) = runtime.block_on(async { new_state.model.close().await }) {
        return Err(format!("close model error: {}", e));
    }
    Ok(())
}
