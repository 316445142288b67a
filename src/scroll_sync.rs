//! スクロール → タブの同期
//!
//! リストのスクロールを監視し、基準線上のアイテムが属するタブへ
//! インジケーターを動かす。タブタップ由来のスクロール中は何もしない。

use crate::locator::find_first_visible_item_position;
use crate::tab_group::tab_for_view_type;
use crate::widget::{ItemList, ItemSource, ScrollState, TabStrip};

/// インジケーター更新時のアニメーション指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorUpdate {
    /// タブ文字の強調を更新するか
    pub update_text: bool,
    /// インジケーター位置を更新するか
    pub update_indicator: bool,
}

impl IndicatorUpdate {
    /// 直前と現在のスクロール状態から決める
    ///
    /// - 文字: ドラッグ由来でない慣性スクロール中のみ更新しない
    /// - 位置: 停止状態から直接始まった慣性スクロール中のみ更新しない
    pub fn for_states(previous: ScrollState, current: ScrollState) -> Self {
        let settling = current == ScrollState::Settling;
        Self {
            update_text: !settling || previous == ScrollState::Dragging,
            update_indicator: !(settling && previous == ScrollState::Idle),
        }
    }

    pub fn all() -> Self {
        Self {
            update_text: true,
            update_indicator: true,
        }
    }
}

/// スクロール由来の選択同期
#[derive(Debug, Clone)]
pub struct ScrollSyncController {
    offset: i32,
    previous_scroll_state: ScrollState,
    scroll_state: ScrollState,
    tab_click_scroll: bool,
    selected_tab_position: Option<usize>,
}

impl ScrollSyncController {
    pub fn new(offset: i32) -> Self {
        Self {
            offset,
            previous_scroll_state: ScrollState::Idle,
            scroll_state: ScrollState::Idle,
            tab_click_scroll: false,
            selected_tab_position: None,
        }
    }

    /// 現在ハイライトしているタブ
    ///
    /// タブストリップの選択状態とは別に管理する。
    pub fn selected_tab_position(&self) -> Option<usize> {
        self.selected_tab_position
    }

    /// タブタップ由来のスクロール中か
    pub fn is_tab_click_scroll(&self) -> bool {
        self.tab_click_scroll
    }

    /// `(直前, 現在)` のスクロール状態
    pub fn scroll_states(&self) -> (ScrollState, ScrollState) {
        (self.previous_scroll_state, self.scroll_state)
    }

    /// 検出に使う基準線
    ///
    /// 縦方向の移動がないフレームでは 0、それ以外と移動量を伴わない再同期は設定値を使う。
    pub fn effective_offset(&self, dy: Option<i32>) -> i32 {
        match dy {
            Some(0) => 0,
            _ => self.offset,
        }
    }

    pub fn on_scroll_state_changed(&mut self, new_state: ScrollState) {
        self.previous_scroll_state = self.scroll_state;
        self.scroll_state = new_state;
        if new_state == ScrollState::Dragging {
            // ユーザーが触れたらタップ由来の抑止は解除
            self.tab_click_scroll = false;
        }
    }

    /// スクロール量の通知
    ///
    /// 選択タブが変わった場合はその位置を返す。
    pub fn on_scrolled<L, T>(&mut self, list: &L, tabs: &mut T, dx: i32, dy: i32) -> Option<usize>
    where
        L: ItemList,
        T: TabStrip,
    {
        if self.tab_click_scroll {
            tracing::trace!(dx, dy, "ignoring scroll during tab click scroll");
            return None;
        }
        let offset = self.effective_offset(Some(dy));
        let position = self.anchored_tab(list, tabs, offset)?;
        if self.selected_tab_position == Some(position) {
            return None;
        }

        let update = IndicatorUpdate::for_states(self.previous_scroll_state, self.scroll_state);
        self.selected_tab_position = Some(position);
        tabs.set_scroll_position(position, 0.0, update.update_text, update.update_indicator);
        tracing::trace!(position, dx, dy, ?update, "tab followed scroll");
        Some(position)
    }

    /// 現在のリスト位置にタブ選択を合わせ直す
    ///
    /// `force` の場合は選択が変わらなくてもインジケーターを動かす（タブ再生成直後用）。
    pub fn refresh<L, T>(&mut self, list: &L, tabs: &mut T, force: bool) -> Option<usize>
    where
        L: ItemList,
        T: TabStrip,
    {
        let offset = self.effective_offset(None);
        let position = self.anchored_tab(list, tabs, offset)?;
        if self.selected_tab_position != Some(position) || force {
            self.selected_tab_position = Some(position);
            let update = IndicatorUpdate::all();
            tabs.set_scroll_position(position, 0.0, update.update_text, update.update_indicator);
            tracing::debug!(position, force, "refreshed selected tab");
        }
        Some(position)
    }

    /// タブタップ由来のスクロールを開始する
    pub(crate) fn begin_tab_click_scroll(&mut self, tab_position: usize) {
        self.tab_click_scroll = true;
        self.selected_tab_position = Some(tab_position);
    }

    pub(crate) fn clear_tab_click_scroll(&mut self) {
        self.tab_click_scroll = false;
    }

    /// 基準線上のアイテムが属するタブ
    fn anchored_tab<L, T>(&self, list: &L, tabs: &T, offset: i32) -> Option<usize>
    where
        L: ItemList,
        T: TabStrip,
    {
        let source = list.data_source()?;
        let position = find_first_visible_item_position(list.layout(), offset);
        let view_type = source.item_view_type(position)?;
        tab_for_view_type(tabs, view_type)
    }
}

#[cfg(test)]
#[path = "scroll_sync_test.rs"]
mod tests;
