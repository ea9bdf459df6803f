//! Tracing for the demo binary.
//!
//! The terminal belongs to the UI, so events only go to the file named by `MSGBOX_LOG`.
//! Filtering follows `RUST_LOG`, defaulting to `msgbox=debug`.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MSGBOX_LOG";
const DEFAULT_FILTER: &str = "msgbox=debug";

/// Installs a file subscriber when `MSGBOX_LOG` is set. Returns the log path in use.
pub fn init() -> Result<Option<String>, std::io::Error> {
    let Some(path) = std::env::var(LOG_ENV).ok().filter(|path| !path.is_empty()) else {
        return Ok(None);
    };
    let file = File::create(&path)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    // A subscriber set elsewhere wins; logging is best effort here.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
    Ok(Some(path))
}
