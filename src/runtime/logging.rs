use std::fs::{self, OpenOptions};

use crate::config;

/// Send `log` output to the state-dir log file; the terminal belongs to the UI.
///
/// `RUST_LOG` controls the filter (default `info`). Without a writable log
/// file logging stays off.
pub fn init_logging() {
    let Some(path) = config::default_log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
