//! 同期エンジンとデモ用フィードの設定

use crate::error::{Result, TabSyncError};
use crate::tab::{TabRange, TabTable};
use crate::widget::Item;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Mediator の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediatorConfig {
    /// 生成するタブ数
    pub tab_count: usize,
    /// 基準線のピクセル位置（リスト上端から）
    pub offset: i32,
    /// データ変更時にタブを自動で作り直すか
    pub auto_refresh: bool,
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self {
            tab_count: 0,
            offset: 0,
            auto_refresh: true,
        }
    }
}

impl MediatorConfig {
    pub fn new(tab_count: usize) -> Self {
        Self {
            tab_count,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_auto_refresh(mut self, auto_refresh: bool) -> Self {
        self.auto_refresh = auto_refresh;
        self
    }
}

// ============================================================================
// フィード設定ファイル
// ============================================================================

/// リストのレイアウト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Linear,
    Staggered { spans: usize },
}

/// タブ 1 つ分の定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub title: String,
    pub start: i32,
    pub end: i32,
}

/// アイテム定義（`repeat` 回並べる）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub view_type: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_repeat")]
    pub repeat: usize,
}

impl ItemSpec {
    pub fn new(view_type: i32, height: i32, title: &str) -> Self {
        Self {
            view_type,
            height,
            title: Some(title.to_string()),
            repeat: 1,
        }
    }

    pub fn repeated(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }
}

fn default_repeat() -> usize {
    1
}

fn default_auto_refresh() -> bool {
    true
}

fn default_viewport_height() -> i32 {
    600
}

/// デモ用フィード（タブ定義とアイテム列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub offset: i32,
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
    /// アプリバーを置くか
    #[serde(default)]
    pub app_bar: bool,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: i32,
    #[serde(default)]
    pub layout: LayoutKind,
    /// 明示した場合は `tabs` の数と一致している必要がある
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_count: Option<usize>,
    #[serde(default)]
    pub tabs: Vec<TabSpec>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// 設定ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// 拡張子から判定
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(TabSyncError::UnsupportedConfigFormat(path.display().to_string())),
        }
    }
}

impl FeedConfig {
    /// ファイルから読み込み、検証する
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let feed = Self::parse(&content, format)?;
        tracing::debug!(path = %path.display(), tabs = feed.tabs.len(), "loaded feed config");
        Ok(feed)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let feed: Self = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        feed.validate()?;
        Ok(feed)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some((index, tab)) = self
            .tabs
            .iter()
            .enumerate()
            .find(|(_, tab)| tab.start > tab.end)
        {
            return Err(TabSyncError::InvalidTabRange {
                index,
                start: tab.start,
                end: tab.end,
            });
        }
        if let Some((index, item)) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, item)| item.height <= 0)
        {
            return Err(TabSyncError::InvalidItemHeight {
                index,
                height: item.height,
            });
        }
        match self.tab_count {
            Some(expected) if expected != self.tabs.len() => Err(TabSyncError::TabCountMismatch {
                expected,
                actual: self.tabs.len(),
            }),
            _ => Ok(()),
        }
    }

    /// `repeat` を展開したアイテム列
    pub fn items(&self) -> Vec<Item> {
        self.items
            .iter()
            .flat_map(|spec| {
                let item = Item {
                    view_type: spec.view_type,
                    height: spec.height,
                    title: spec.title.clone(),
                };
                std::iter::repeat(item).take(spec.repeat)
            })
            .collect()
    }

    pub fn tab_ranges(&self) -> Vec<TabRange> {
        self.tabs
            .iter()
            .map(|t| TabRange::new(t.title.clone(), t.start, t.end))
            .collect()
    }

    pub fn tab_table(&self) -> TabTable {
        TabTable::new(self.tab_ranges())
    }

    pub fn mediator_config(&self) -> MediatorConfig {
        MediatorConfig::new(self.tabs.len())
            .with_offset(self.offset)
            .with_auto_refresh(self.auto_refresh)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
