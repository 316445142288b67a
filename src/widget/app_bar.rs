//! ヘッドレスなアプリバー

use super::AppBar;

/// 展開状態と要求履歴を保持するアプリバー
#[derive(Debug, Clone)]
pub struct HeadlessAppBar {
    expanded: bool,
    requests: Vec<(bool, bool)>,
}

impl HeadlessAppBar {
    pub fn new() -> Self {
        Self {
            expanded: true,
            requests: Vec::new(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// `(expanded, animate)` の要求履歴
    pub fn requests(&self) -> &[(bool, bool)] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<(bool, bool)> {
        self.requests.last().copied()
    }
}

impl Default for HeadlessAppBar {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBar for HeadlessAppBar {
    fn set_expanded(&mut self, expanded: bool, animate: bool) {
        self.expanded = expanded;
        self.requests.push((expanded, animate));
    }
}
