use std::thread;
use std::time::Duration;
use anyhow::Result;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use taglog::{create, ErrorRecord, LogValue, LoggerConfig};

fn main() -> Result<()> {
    // Internal diagnostics from taglog itself (RUST_LOG=taglog=trace)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(doc) => LoggerConfig::from_json(&doc)?,
        None => LoggerConfig::new().tag("demo").level("profile"),
    };
    let app = create(config)?;

    taglog::log!(app, "starting with threshold", LogValue::display(&app.level()));
    taglog::warn!(app, "cache is cold", json!({"entries": 0}));

    let db = app.sub(LoggerConfig::new().tags(["db", "pool"]))?;
    let profiler = db.profiler("connect");
    thread::sleep(Duration::from_millis(25));
    profiler.finish("connected");

    let quiet = db.sub(LoggerConfig::new().tag("quiet").level("warn"))?;
    taglog::debug!(quiet, "this line is suppressed");

    let err = "NaN".parse::<u32>().unwrap_err();
    taglog::error!(db, "failed to read pool size", LogValue::error(&err));
    taglog::error!(
        db,
        "remote failure",
        ErrorRecord::new("TimeoutError", "no reply", "TimeoutError: no reply\n    at fetch\n    at connect"),
    );

    // rejected at construction, not at log time
    if let Err(err) = create(LoggerConfig::new().level("bogus")) {
        taglog::log!(app, "expected failure:", err.to_string());
    }

    Ok(())
}
