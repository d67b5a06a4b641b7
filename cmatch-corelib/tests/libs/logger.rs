use clap::Command;
use laboratory::{expect, SpecContext};

use cmatch_corelib::logger::{self, Config};

use super::set_env_var;
use crate::TestState;

/// Test [`logger::reg_args`].
pub fn reg_args(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    logger::reg_args(Command::new("test"));
    Ok(())
}

/// Test [`logger::read_args`].
pub fn read_args(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let args = logger::reg_args(Command::new("test")).get_matches_from(vec!["test"]);
    let conf = logger::read_args(&args);
    expect(conf.level.as_deref()).to_equal(Some(logger::DEF_LEVEL))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::DEF_STYLE))?;

    set_env_var("LOG_LEVEL", "debug");
    set_env_var("LOG_STYLE", "log4j");
    let conf = logger::read_args(&args);
    expect(conf.level.as_deref()).to_equal(Some(logger::LEVEL_DEBUG))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::STYLE_LOG4J))?;

    set_env_var("LOG_LEVEL", "wrong");
    set_env_var("LOG_STYLE", "wrong");
    let conf = logger::read_args(&args);
    expect(conf.level.as_deref()).to_equal(Some(logger::DEF_LEVEL))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::DEF_STYLE))?;

    let args = logger::reg_args(Command::new("test")).get_matches_from(vec![
        "test",
        "--log.level",
        "warn",
        "--log.style",
        "json",
    ]);
    let conf = logger::read_args(&args);
    expect(conf.level.as_deref()).to_equal(Some(logger::LEVEL_WARN))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::STYLE_JSON))
}

/// Test [`logger::apply_default`].
pub fn apply_default(_context: &mut SpecContext<TestState>) -> Result<(), String> {
    let conf = Config {
        ..Default::default()
    };
    let conf = logger::apply_default(&conf);
    expect(conf.level.as_deref()).to_equal(Some(logger::DEF_LEVEL))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::DEF_STYLE))?;

    let conf = Config {
        level: Some("level".to_string()),
        style: Some("style".to_string()),
    };
    let conf = logger::apply_default(&conf);
    expect(conf.level.as_deref()).to_equal(Some(logger::DEF_LEVEL))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::DEF_STYLE))?;

    let conf = Config {
        level: Some(logger::LEVEL_OFF.to_string()),
        style: Some(logger::STYLE_LOG4J.to_string()),
    };
    let conf = logger::apply_default(&conf);
    expect(conf.level.as_deref()).to_equal(Some(logger::LEVEL_OFF))?;
    expect(conf.style.as_deref()).to_equal(Some(logger::STYLE_LOG4J))
}
