//! ログ出力の初期化
//!
//! フィルタは `TABSYNC_LOG` から読み、未設定なら [`DEFAULT_FILTER`]。
//! TUI は代替スクリーンを汚さないようファイルへ書き出す。

use crate::env::{EnvVar, TABSYNC_LOG};
use crate::error::{Result, TabSyncError};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// 実際に適用するフィルタ文字列
pub fn filter_directive() -> String {
    EnvVar::get(TABSYNC_LOG).unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// グローバル subscriber を設定する
///
/// `log_file` があれば追記モードで開いてそこへ書く。なければ stderr。
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_new(filter_directive())
        .map_err(|e| TabSyncError::LoggingInit(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| TabSyncError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_filter_defaults_to_warn() {
        std::env::remove_var(TABSYNC_LOG);
        assert_eq!(filter_directive(), "warn");
    }

    #[test]
    #[serial]
    fn test_filter_reads_env() {
        std::env::set_var(TABSYNC_LOG, "tabsync=trace");
        assert_eq!(filter_directive(), "tabsync=trace");
        std::env::remove_var(TABSYNC_LOG);
    }

    #[test]
    #[serial]
    fn test_invalid_filter_is_reported() {
        std::env::set_var(TABSYNC_LOG, "tabsync=loud");
        let err = init(None).unwrap_err();
        assert!(matches!(err, TabSyncError::LoggingInit(_)));
        std::env::remove_var(TABSYNC_LOG);
    }
}
