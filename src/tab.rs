//! タブとアイテム種別範囲の対応

use serde::{Deserialize, Serialize};

/// タブが受け持つアイテム種別タグの閉区間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTypeRange {
    pub start: i32,
    pub end: i32,
}

impl ViewTypeRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// `start..=end` に含まれるか（`start > end` なら常に false）
    pub fn contains(&self, view_type: i32) -> bool {
        (self.start..=self.end).contains(&view_type)
    }
}

/// 設定コールバックが返すタブ定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRange {
    title: String,
    range: ViewTypeRange,
}

impl TabRange {
    pub fn new(title: impl Into<String>, start_tag: i32, end_tag: i32) -> Self {
        Self {
            title: title.into(),
            range: ViewTypeRange::new(start_tag, end_tag),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_tag(&self) -> i32 {
        self.range.start
    }

    pub fn end_tag(&self) -> i32 {
        self.range.end
    }

    pub fn view_types(&self) -> ViewTypeRange {
        self.range
    }
}

/// タブストリップ上の 1 エントリ
///
/// 生成時に種別範囲をタグとして持たせ、スクロール時はそれを読み戻す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHandle {
    position: usize,
    title: String,
    tag: ViewTypeRange,
}

impl TabHandle {
    pub fn new(position: usize, range: TabRange) -> Self {
        Self {
            position,
            title: range.title,
            tag: range.range,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tag(&self) -> ViewTypeRange {
        self.tag
    }
}

/// タブ生成時に呼ばれる設定戦略
///
/// タブ位置ごとにタイトルと種別範囲を返す。タブの再構築のたびに全タブ分呼ばれる。
pub trait TabConfigurationStrategy {
    fn on_configure_tab(&mut self, position: usize) -> TabRange;
}

impl<F> TabConfigurationStrategy for F
where
    F: FnMut(usize) -> TabRange,
{
    fn on_configure_tab(&mut self, position: usize) -> TabRange {
        self(position)
    }
}

/// 固定のタブ定義表を返す設定戦略
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabTable {
    ranges: Vec<TabRange>,
}

impl TabTable {
    pub fn new(ranges: Vec<TabRange>) -> Self {
        Self { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl TabConfigurationStrategy for TabTable {
    /// 表の範囲外の位置には空範囲のタブを返す
    fn on_configure_tab(&mut self, position: usize) -> TabRange {
        self.ranges
            .get(position)
            .cloned()
            .unwrap_or_else(|| TabRange::new(String::new(), 0, -1))
    }
}
