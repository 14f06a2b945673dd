//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so events go to `tagbook.log` in the data
//! directory. `TAGBOOK_LOG` takes an `EnvFilter` directive and defaults to
//! `tagbook=info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILE, LOG_FILTER_ENV};

/// Initialize logging into `data_dir`. Returns false if no subscriber was installed.
pub fn init(data_dir: &Path) -> bool {
    let log_path = data_dir.join(LOG_FILE);
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file at {:?}: {}", log_path, e);
            return false;
        }
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
}
