//! Core logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger exactly once per process.
//! - Capture panics as sanitized `panic_captured` events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical `LoggingConfig`.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "waterfall";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    config: ActiveConfig,
    _logger: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveConfig {
    level: &'static str,
    log_dir: PathBuf,
}

/// Requested logging setup, as received from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory that receives rolling log files.
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Config using [`default_log_level`] for the current build.
    pub fn with_default_level(log_dir: impl Into<PathBuf>) -> Self {
        Self::new(default_log_level(), log_dir)
    }

    fn normalize(&self) -> Result<ActiveConfig, LoggingError> {
        Ok(ActiveConfig {
            level: normalize_level(&self.level)?,
            log_dir: normalize_log_dir(&self.log_dir)?,
        })
    }
}

/// Logging bootstrap failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(PathBuf),
    LevelConflict {
        active: &'static str,
        requested: &'static str,
    },
    DirConflict {
        active: PathBuf,
        requested: PathBuf,
    },
    CreateDir {
        log_dir: PathBuf,
        message: String,
    },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
            Self::LevelConflict { active, requested } => write!(
                f,
                "logging already initialized with level `{active}`; refusing to switch to `{requested}`"
            ),
            Self::DirConflict { active, requested } => write!(
                f,
                "logging already initialized at `{}`; refusing to switch to `{}`",
                active.display(),
                requested.display()
            ),
            Self::CreateDir { log_dir, message } => write!(
                f,
                "failed to create log directory `{}`: {message}",
                log_dir.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Initializes core logging.
///
/// # Errors
/// - `UnsupportedLevel`, `EmptyLogDir` or `RelativeLogDir` for invalid input.
/// - `LevelConflict` / `DirConflict` when logging is already active with a
///   different config.
/// - `CreateDir` / `Backend` when the file logger cannot start.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let requested = config.normalize()?;

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(&requested))?;
    ensure_matches(&state.config, &requested)
}

/// Returns `(level, log_dir)` of the active logger, or `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.config.level, state.config.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: &ActiveConfig) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| LoggingError::CreateDir {
        log_dir: config.log_dir.clone(),
        message: err.to_string(),
    })?;

    let logger = Logger::try_with_str(config.level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // Format: [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();

    info!(
        "event=core_init module=logging status=ok level={} log_dir={} version={}",
        config.level,
        config.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config: config.clone(),
        _logger: logger,
    })
}

fn ensure_matches(active: &ActiveConfig, requested: &ActiveConfig) -> Result<(), LoggingError> {
    if active.log_dir != requested.log_dir {
        return Err(LoggingError::DirConflict {
            active: active.log_dir.clone(),
            requested: requested.log_dir.clone(),
        });
    }
    if active.level != requested.level {
        return Err(LoggingError::LevelConflict {
            active: active.level,
            requested: requested.level,
        });
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, LoggingError> {
    // Non-UTF-8 paths are used byte-for-byte; only UTF-8 input is trimmed.
    let path = match log_dir.to_str() {
        Some(text) => Path::new(text.trim()),
        None => log_dir,
    };
    if path.as_os_str().is_empty() {
        return Err(LoggingError::EmptyLogDir);
    }
    if !path.is_absolute() {
        return Err(LoggingError::RelativeLogDir(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        let payload = panic_payload_summary(panic_info);
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location, payload
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}
