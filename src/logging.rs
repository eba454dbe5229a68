//! Log initialisation
//!
//! The interactive UI owns the terminal, so its log goes to a file. The
//! non-interactive print mode logs to stderr. The filter comes from
//! `BOOKVERSE_LOG` using `env_logger` syntax and defaults to `info`.

use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BOOKVERSE_LOG";

fn builder() -> Builder {
    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
}

/// Send log records to a file, appending
///
/// # Errors
///
/// Returns `std::io::Error` if the log directory or file cannot be created.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // A logger may already be installed (e.g. by a test harness)
    let _ = builder()
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    Ok(())
}

/// Send log records to stderr
pub fn init_stderr() {
    let _ = builder().target(Target::Stderr).try_init();
}

/// Discard log records
pub fn init_disabled() {
    log::set_max_level(log::LevelFilter::Off);
}
