//! Logging Configuration
//!
//! Interactive runs keep the screen clean by writing to a log file under
//! the user cache directory; one-shot commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "KARYA_LOG";
const LOG_FILE: &str = "karya-cli.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn log_file_path() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("karya");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join(LOG_FILE))
}

pub fn init(interactive: bool) {
    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let file = log_file_path()
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path).ok());
    match file {
        Some(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            eprintln!("Warning: no writable log location, logging disabled");
        }
    }
}
