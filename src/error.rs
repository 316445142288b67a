use thiserror::Error;

/// tabsync 統一エラー型
#[derive(Debug, Error)]
pub enum TabSyncError {
    #[error("Mediator is already attached")]
    AlreadyAttached,

    #[error("Mediator attached before the list has a data source")]
    NoAdapter,

    #[error("Mediator is not attached")]
    NotAttached,

    #[error("Invalid tab range at index {index}: start {start} is greater than end {end}")]
    InvalidTabRange { index: usize, start: i32, end: i32 },

    #[error("Invalid item at index {index}: height {height} must be positive")]
    InvalidItemHeight { index: usize, height: i32 },

    #[error("Tab count mismatch: expected {expected}, got {actual}")]
    TabCountMismatch { expected: usize, actual: usize },

    #[error("Invalid action: {0}. Expected drag:DY, fling:DY, tap:INDEX, append:TAG, detach or attach")]
    InvalidAction(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unsupported config format: {0}. Expected .toml, .json, .yaml or .yml")]
    UnsupportedConfigFormat(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TabSyncError>;

impl TabSyncError {
    /// attach/detach の前提条件違反かどうか
    ///
    /// 前提条件違反は状態を一切変更せずに呼び出し元へ返される。
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TabSyncError::AlreadyAttached | TabSyncError::NoAdapter | TabSyncError::NotAttached
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(TabSyncError::AlreadyAttached.is_precondition());
        assert!(TabSyncError::NoAdapter.is_precondition());
        assert!(TabSyncError::NotAttached.is_precondition());
        assert!(!TabSyncError::UnknownPreset("x".into()).is_precondition());
    }

    #[test]
    fn test_invalid_tab_range_message() {
        let err = TabSyncError::InvalidTabRange {
            index: 2,
            start: 7,
            end: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid tab range at index 2: start 7 is greater than end 3"
        );
    }
}
