use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

/// Default log location (`<local data dir>/cellgrid/cellgrid.log`)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("cellgrid").join("cellgrid.log"))
}

/// Send log records to a file; the terminal is owned by the UI.
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init(path: Option<PathBuf>) -> io::Result<PathBuf> {
    let path = path
        .or_else(default_log_path)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory for log file"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(path)
}
