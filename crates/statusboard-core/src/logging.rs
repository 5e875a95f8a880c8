use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "statusboard.log";
const LOG_RETENTION_DAYS: u64 = 7;

/// Return the log directory path.
///
/// Precedence: `STATUSBOARD_LOG_DIR` env var > platform default.
/// macOS: `~/Library/Logs/statusboard/`
/// Linux: `$XDG_DATA_HOME/statusboard/logs/` or `~/.local/share/statusboard/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STATUSBOARD_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("statusboard");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("statusboard").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Remove rolled log files older than `max_age_days`.
///
/// Only files starting with the appender prefix are touched, in case the
/// directory is shared.
fn cleanup_old_logs(log_path: &Path, max_age_days: u64) -> usize {
    let cutoff = SystemTime::now() - Duration::from_secs(max_age_days * 86400);
    let mut removed = 0;
    let Ok(entries) = std::fs::read_dir(log_path) else {
        return removed;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with(LOG_FILE_PREFIX) {
            continue;
        }
        let modified = entry.metadata().and_then(|meta| meta.modified());
        if let Ok(modified) = modified {
            if modified < cutoff && std::fs::remove_file(entry.path()).is_ok() {
                removed += 1;
            }
        }
    }
    removed
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("STATUSBOARD_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize file logging.
///
/// Filter controlled by `STATUSBOARD_LOG` or `RUST_LOG` (default: `info`).
/// Output: daily rotation in [`log_dir`], 7-day retention. The terminal
/// belongs to the board, so nothing is written to stdout or stderr once the
/// subscriber is installed.
pub fn init() {
    let log_path = log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_path) {
        eprintln!(
            "warning: failed to create log directory {:?}: {}",
            log_path, e
        );
    }

    let removed = cleanup_old_logs(&log_path, LOG_RETENTION_DAYS);

    let file_appender = rolling::daily(&log_path, LOG_FILE_PREFIX);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();

    tracing::debug!(dir = %log_path.display(), removed, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn log_dir_respects_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("STATUSBOARD_LOG_DIR").ok();

        std::env::set_var("STATUSBOARD_LOG_DIR", "/tmp/statusboard-test-logs");
        assert_eq!(log_dir(), PathBuf::from("/tmp/statusboard-test-logs"));

        match original {
            Some(v) => std::env::set_var("STATUSBOARD_LOG_DIR", v),
            None => std::env::remove_var("STATUSBOARD_LOG_DIR"),
        }
    }

    #[test]
    fn log_dir_default_ends_in_app_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = std::env::var("STATUSBOARD_LOG_DIR").ok();

        std::env::remove_var("STATUSBOARD_LOG_DIR");
        let dir = log_dir();
        assert!(
            dir.components().any(|c| c.as_os_str() == "statusboard") || dir == PathBuf::from("logs"),
            "unexpected default log dir {:?}",
            dir
        );

        if let Some(v) = original {
            std::env::set_var("STATUSBOARD_LOG_DIR", v);
        }
    }

    #[test]
    fn cleanup_old_logs_removes_stale_files_only() {
        let tmp = std::env::temp_dir().join("statusboard-test-cleanup");
        let _ = std::fs::create_dir_all(&tmp);

        let a = tmp.join("statusboard.log.2025-01-01");
        let b = tmp.join("statusboard.log.2025-01-02");
        let other = tmp.join("notes.txt");
        std::fs::write(&a, "a").unwrap();
        std::fs::write(&b, "b").unwrap();
        std::fs::write(&other, "c").unwrap();

        // max_age_days=0 puts the cutoff at "now", so every rolled file goes
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(cleanup_old_logs(&tmp, 0), 2);
        assert!(!a.exists());
        assert!(!b.exists());
        assert!(other.exists(), "unrelated file should be preserved");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn cleanup_on_missing_dir_is_noop() {
        let missing = std::env::temp_dir().join("statusboard-test-missing-dir");
        let _ = std::fs::remove_dir_all(&missing);
        assert_eq!(cleanup_old_logs(&missing, 7), 0);
    }
}
