//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to a size-rotated file
//! under the app log directory and mirrors to stderr. `log` records are
//! bridged, so `log::info!` and `tracing::info!` end up in the same file.

mod rolling_file;

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use rolling_file::{LoggerOptions, RollingFile};

static HANDLE: OnceLock<RollingHandle> = OnceLock::new();

/// Logger setup and usage errors
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Shared handle to the active log file
#[derive(Clone)]
pub struct RollingHandle(Arc<Mutex<RollingFile>>);

impl RollingHandle {
    pub fn new(file: RollingFile) -> Self {
        Self(Arc::new(Mutex::new(file)))
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.0.lock().map(|f| f.recent_lines()).unwrap_or_default()
    }

}

impl Write for RollingHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingHandle {
    type Writer = RollingHandle;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Open `<log_dir>/<app_name>.log` and install the global subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    if HANDLE.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let handle = RollingHandle::new(RollingFile::open(&log_dir, app_name, LoggerOptions::default())?);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(handle.clone())
                .with_ansi(false)
                .with_timer(LocalTime),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_timer(LocalTime),
        )
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    HANDLE
        .set(handle)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(target: "rolling_logger", "Logging to {}", log_dir.display());
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    HANDLE.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::error!("{}", msg);
    Ok(())
}

/// Recent lines of the active log file, oldest first
pub fn recent_lines() -> Vec<String> {
    HANDLE.get().map(RollingHandle::recent_lines).unwrap_or_default()
}
