use clap::Command;
use laboratory::{expect, SpecContext};

use cmatch_corelib::server_config::{self, Config};

use super::set_env_var;
use crate::TestState;

/// Test [`server_config::reg_args`].
pub fn reg_args(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    server_config::reg_args(Command::new("test"));
    Ok(())
}

/// Test [`server_config::read_args`].
pub fn read_args(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let args = server_config::reg_args(Command::new("test")).get_matches_from(vec!["test"]);
    let conf = server_config::read_args(&args);
    expect(conf.http_port).to_equal(Some(server_config::DEF_HTTP_PORT))?;
    expect(conf.https_port).to_equal(Some(server_config::DEF_HTTPS_PORT))?;
    expect(conf.cert_file).to_equal(None)?;
    expect(conf.key_file).to_equal(None)?;
    expect(conf.static_path).to_equal(None)?;

    set_env_var("SERVER_CERT_FILE", "cert");
    set_env_var("SERVER_KEY_FILE", "key");
    set_env_var("SERVER_STATIC_PATH", "static");
    let conf = server_config::read_args(&args);
    expect(conf.cert_file.as_deref()).to_equal(Some("cert"))?;
    expect(conf.key_file.as_deref()).to_equal(Some("key"))?;
    expect(conf.static_path.as_deref()).to_equal(Some("static"))?;

    let args = server_config::reg_args(Command::new("test")).get_matches_from(vec![
        "test",
        "--server.httpport",
        "3081",
        "--server.httpsport",
        "3444",
    ]);
    let conf = server_config::read_args(&args);
    expect(conf.http_port).to_equal(Some(3081))?;
    expect(conf.https_port).to_equal(Some(3444))
}

/// Test [`server_config::apply_default`].
pub fn apply_default(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let conf = Config {
        ..Default::default()
    };
    let conf = server_config::apply_default(&conf);
    expect(conf.http_port).to_equal(Some(server_config::DEF_HTTP_PORT))?;
    expect(conf.https_port).to_equal(Some(server_config::DEF_HTTPS_PORT))?;
    expect(conf.cert_file).to_equal(None)?;
    expect(conf.key_file).to_equal(None)?;
    expect(conf.static_path).to_equal(None)?;

    let conf = Config {
        http_port: Some(3081),
        https_port: Some(3444),
        cert_file: Some("cert".to_string()),
        key_file: Some("key".to_string()),
        static_path: Some("static".to_string()),
    };
    let conf = server_config::apply_default(&conf);
    expect(conf.http_port).to_equal(Some(3081))?;
    expect(conf.https_port).to_equal(Some(3444))?;
    expect(conf.cert_file.as_deref()).to_equal(Some("cert"))?;
    expect(conf.key_file.as_deref()).to_equal(Some("key"))?;
    expect(conf.static_path.as_deref()).to_equal(Some("static"))
}
