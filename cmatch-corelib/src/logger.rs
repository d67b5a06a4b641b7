//! To configure the logger.

use std::{
    env,
    net::SocketAddr,
    task::{Context as TaskContext, Poll},
    time::Instant,
};

use anyhow::Result;
use axum::{
    extract::{ConnectInfo, Request},
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use clap::{Arg, ArgMatches, Command};
use futures::future::BoxFuture;
use log::{Level, LevelFilter, Record};
use log4rs::{
    self,
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::{Encode, Write},
};
use serde::{Deserialize, Serialize};
use tower::{Layer, Service};

/// Logger configuration object.
#[derive(Default, Deserialize)]
pub struct Config {
    /// Log level. Can be `off`, `error`, `warn`, `info`, `debug`.
    ///
    /// Default is `info`.
    pub level: Option<String>,
    /// Log style. Can be `json`, `log4j`.
    ///
    /// Default is `json`.
    pub style: Option<String>,
}

/// The tower layer that writes one access log record per request.
#[derive(Clone, Default)]
pub struct LoggerLayer;

#[derive(Clone)]
pub struct LoggerMiddleware<S> {
    service: S,
}

/// The log4rs encoder for JSON format.
#[derive(Debug)]
struct JsonEncoder {
    _proj_name: String,
}

/// The log4rs encoder for log4j format.
#[derive(Debug)]
struct Log4jEncoder {
    _proj_name: String,
}

/// Normal log information.
#[derive(Debug, Serialize)]
struct JsonEncoderMsg {
    pub ts: String,
    pub level: String,
    pub module: String,
    pub msg: String,
}

/// HTTP log information.
#[derive(Debug, Serialize)]
struct JsonEncoderHttpMsg {
    pub ts: String,
    pub level: String,
    pub remote: String,
    pub status: String,
    pub method: String,
    pub url: String,
    #[serde(rename = "latencyMs")]
    pub latency_ms: String,
}

/// Log target of [`LoggerLayer`] records. The encoders treat records with this target as access
/// logs in `remote status latency-ms method url` format.
pub const HTTP_LOGGER_NAME: &'static str = "cmatch_corelib::logger::http";

pub const LEVEL_OFF: &'static str = "off";
pub const LEVEL_ERROR: &'static str = "error";
pub const LEVEL_WARN: &'static str = "warn";
pub const LEVEL_INFO: &'static str = "info";
pub const LEVEL_DEBUG: &'static str = "debug";

pub const STYLE_JSON: &'static str = "json";
pub const STYLE_LOG4J: &'static str = "log4j";

pub const DEF_LEVEL: &'static str = LEVEL_INFO;
pub const DEF_STYLE: &'static str = STYLE_JSON;

pub const FILTER_ONLY: [&'static str; 1] = ["/api/"];

impl LoggerLayer {
    pub fn new() -> Self {
        LoggerLayer {}
    }
}

impl<S> Layer<S> for LoggerLayer {
    type Service = LoggerMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggerMiddleware { service: inner }
    }
}

impl<S> Service<Request> for LoggerMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let mut svc = self.service.clone();

        let remote = match req.extensions().get::<ConnectInfo<SocketAddr>>() {
            None => "-".to_string(),
            Some(info) => info.0.to_string(),
        };
        let method = req.method().to_string();
        let url = req.uri().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let res = svc.call(req).await?;
            log::info!(
                target: HTTP_LOGGER_NAME,
                "{} {} {} {} {}",
                remote,
                res.status().as_u16(),
                start.elapsed().as_millis(),
                method,
                url
            );
            Ok(res)
        })
    }
}

impl JsonEncoder {
    pub fn new(proj_name: &str) -> Self {
        JsonEncoder {
            _proj_name: proj_name.to_string(),
        }
    }
}

impl Log4jEncoder {
    pub fn new(proj_name: &str) -> Self {
        Log4jEncoder {
            _proj_name: proj_name.to_string(),
        }
    }
}

impl Encode for JsonEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record<'_>) -> Result<()> {
        let module = match get_module_name(record) {
            None => return Ok(()),
            Some(module) => module,
        };

        let str = match module.eq(HTTP_LOGGER_NAME) {
            false => {
                let msg = JsonEncoderMsg {
                    ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    level: record.level().to_string(),
                    module,
                    msg: record.args().to_string(),
                };
                format!("{}\n", serde_json::to_string(&msg)?)
            }
            true => {
                let msg = match get_http_msg(record) {
                    None => return Ok(()),
                    Some(msg) => msg,
                };
                format!("{}\n", serde_json::to_string(&msg)?)
            }
        };
        w.write_all(str.as_bytes())?;
        Ok(())
    }
}

impl Encode for Log4jEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record<'_>) -> Result<()> {
        let module = match get_module_name(record) {
            None => return Ok(()),
            Some(module) => module,
        };

        let str = match module.eq(HTTP_LOGGER_NAME) {
            false => format!(
                "{} {} [{}] {}\n",
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                record.level(),
                module,
                record.args().to_string().replace("\n", "\\n")
            ),
            true => {
                let msg = match get_http_msg(record) {
                    None => return Ok(()),
                    Some(msg) => msg,
                };
                format!(
                    "{} {} [{}] {} {} {} ({} ms)\n",
                    msg.ts, msg.level, HTTP_LOGGER_NAME, msg.remote, msg.method, msg.url,
                    msg.latency_ms
                )
            }
        };
        w.write_all(str.as_bytes())?;
        Ok(())
    }
}

/// To register Clap arguments.
pub fn reg_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("log.level")
            .long("log.level")
            .help("log level")
            .num_args(1)
            .value_parser([
                LEVEL_OFF,
                LEVEL_ERROR,
                LEVEL_WARN,
                LEVEL_INFO,
                LEVEL_DEBUG,
            ]),
    )
    .arg(
        Arg::new("log.style")
            .long("log.style")
            .help("log style")
            .num_args(1)
            .value_parser([STYLE_JSON, STYLE_LOG4J]),
    )
}

/// To read input arguments from command-line arguments and environment variables.
///
/// This function will call [`apply_default()`] to fill missing values so you do not need call it
/// again.
pub fn read_args(args: &ArgMatches) -> Config {
    apply_default(&Config {
        level: match args.get_one::<String>("log.level") {
            None => match env::var("LOG_LEVEL") {
                Err(_) => None,
                Ok(v) => Some(v),
            },
            Some(v) => Some(v.clone()),
        },
        style: match args.get_one::<String>("log.style") {
            None => match env::var("LOG_STYLE") {
                Err(_) => None,
                Ok(v) => Some(v),
            },
            Some(v) => Some(v.clone()),
        },
    })
}

/// Fill missing configuration with default values.
pub fn apply_default(config: &Config) -> Config {
    Config {
        level: match config.level.as_deref() {
            Some(LEVEL_OFF) => Some(LEVEL_OFF.to_string()),
            Some(LEVEL_ERROR) => Some(LEVEL_ERROR.to_string()),
            Some(LEVEL_WARN) => Some(LEVEL_WARN.to_string()),
            Some(LEVEL_DEBUG) => Some(LEVEL_DEBUG.to_string()),
            _ => Some(DEF_LEVEL.to_string()),
        },
        style: match config.style.as_deref() {
            Some(STYLE_LOG4J) => Some(STYLE_LOG4J.to_string()),
            _ => Some(DEF_STYLE.to_string()),
        },
    }
}

/// To initialize the global logger. Must be called once at process start.
pub fn init(proj_name: &str, config: &Config) {
    let config = apply_default(config);

    let level = match config.level.as_deref() {
        Some(LEVEL_OFF) => LevelFilter::Off,
        Some(LEVEL_ERROR) => LevelFilter::Error,
        Some(LEVEL_WARN) => LevelFilter::Warn,
        Some(LEVEL_DEBUG) => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };
    let encoder: Box<dyn Encode> = match config.style.as_deref() {
        Some(STYLE_LOG4J) => Box::new(Log4jEncoder::new(proj_name)),
        _ => Box::new(JsonEncoder::new(proj_name)),
    };

    let console = ConsoleAppender::builder().encoder(encoder).build();
    let log_config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(console)))
        .build(Root::builder().appender("stdout").build(level));
    match log_config {
        Err(e) => println!("invalid logger configuration: {}", e),
        Ok(log_config) => {
            if let Err(e) = log4rs::init_config(log_config) {
                println!("initialize logger error: {}", e);
            }
        }
    }
}

fn get_module_name(record: &Record) -> Option<String> {
    match record.target().len() {
        0 => record.module_path().map(|path| path.to_string()),
        _ => Some(record.target().to_string()),
    }
}

/// Parse a [`LoggerLayer`] record into its fields, applying [`FILTER_ONLY`] on the URL.
fn get_http_msg(record: &Record) -> Option<JsonEncoderHttpMsg> {
    let args = record.args().to_string();
    let mut iter = args.splitn(5, ' ');
    let remote = iter.next()?;
    let status = iter.next()?;
    let latency_ms = iter.next()?;
    let method = iter.next()?;
    let url = iter.next()?;

    let mut found = false;
    for filter in FILTER_ONLY {
        if url.contains(filter) {
            found = true;
            break;
        }
    }
    if !found {
        return None;
    }

    Some(JsonEncoderHttpMsg {
        ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level: match status.chars().next() {
            Some('4') => Level::Warn.as_str().to_string(),
            Some('5') => Level::Error.as_str().to_string(),
            _ => Level::Info.as_str().to_string(),
        },
        remote: remote.to_string(),
        status: status.to_string(),
        method: method.to_string(),
        url: url.to_string(),
        latency_ms: latency_ms.to_string(),
    })
}
