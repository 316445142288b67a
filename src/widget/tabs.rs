//! ヘッドレスなタブストリップ
//!
//! 選択状態（タップで確定するもの）とインジケーター位置（`set_scroll_position` で
//! 動くもの）を別々に保持する。

use super::{ListenerId, TabEvent, TabStrip};
use crate::tab::TabHandle;
use std::collections::VecDeque;

/// `set_scroll_position` の呼び出し記録
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPositionCall {
    pub position: usize,
    pub position_offset: f32,
    pub update_selected_text: bool,
    pub update_indicator_position: bool,
}

/// ヘッドレスなタブストリップ
#[derive(Debug, Default)]
pub struct HeadlessTabStrip {
    tabs: Vec<TabHandle>,
    selected: Option<usize>,
    indicator: Option<usize>,
    highlighted_text: Option<usize>,
    listeners: Vec<ListenerId>,
    next_id: u64,
    queue: VecDeque<(ListenerId, TabEvent)>,
    history: Vec<ScrollPositionCall>,
    removals: usize,
}

impl HeadlessTabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[TabHandle] {
        &self.tabs
    }

    /// タップで確定した選択タブ
    pub fn selected_tab_position(&self) -> Option<usize> {
        self.selected
    }

    /// インジケーターの表示位置
    pub fn indicator_position(&self) -> Option<usize> {
        self.indicator
    }

    /// 強調表示中のタブ文字
    pub fn highlighted_text_position(&self) -> Option<usize> {
        self.highlighted_text
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn scroll_position_history(&self) -> &[ScrollPositionCall] {
        &self.history
    }

    /// `remove_all_tabs` が呼ばれた回数
    pub fn removal_count(&self) -> usize {
        self.removals
    }

    /// タブをタップ
    ///
    /// 選択中のタブなら `Reselected`、それ以外は `Unselected` → `Selected` を発行する。
    pub fn tap(&mut self, position: usize) {
        if position >= self.tabs.len() {
            return;
        }
        let previous = self.selected;
        match previous {
            Some(current) if current == position => {
                self.emit(TabEvent::Reselected(position));
            }
            _ => {
                self.selected = Some(position);
                if let Some(previous) = previous {
                    self.emit(TabEvent::Unselected(previous));
                }
                self.emit(TabEvent::Selected(position));
            }
        }
        self.indicator = Some(position);
        self.highlighted_text = Some(position);
    }

    pub fn drain(&mut self) -> Vec<(ListenerId, TabEvent)> {
        self.queue.drain(..).collect()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.queue.is_empty()
    }

    fn emit(&mut self, event: TabEvent) {
        for &listener in &self.listeners {
            self.queue.push_back((listener, event));
        }
    }
}

impl TabStrip for HeadlessTabStrip {
    fn remove_all_tabs(&mut self) {
        self.tabs.clear();
        self.selected = None;
        self.indicator = None;
        self.highlighted_text = None;
        self.removals += 1;
    }

    fn add_tab(&mut self, tab: TabHandle, set_selected: bool) {
        self.tabs.push(tab);
        if set_selected {
            let position = self.tabs.len() - 1;
            self.tap(position);
        }
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn tab_at(&self, position: usize) -> Option<&TabHandle> {
        self.tabs.get(position)
    }

    fn set_scroll_position(
        &mut self,
        position: usize,
        position_offset: f32,
        update_selected_text: bool,
        update_indicator_position: bool,
    ) {
        self.history.push(ScrollPositionCall {
            position,
            position_offset,
            update_selected_text,
            update_indicator_position,
        });
        if position >= self.tabs.len() {
            return;
        }
        if update_selected_text {
            self.highlighted_text = Some(position);
        }
        if update_indicator_position {
            self.indicator = Some(position);
        }
    }

    fn add_on_tab_selected_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(id);
        id
    }

    fn remove_on_tab_selected_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::TabRange;

    fn strip_with_tabs(count: usize) -> HeadlessTabStrip {
        let mut strip = HeadlessTabStrip::new();
        for i in 0..count {
            strip.add_tab(TabHandle::new(i, TabRange::new(format!("T{i}"), 0, 0)), false);
        }
        strip
    }

    #[test]
    fn test_tap_emits_selected_then_reselected() {
        let mut strip = strip_with_tabs(3);
        let id = strip.add_on_tab_selected_listener();

        strip.tap(1);
        strip.tap(1);
        assert_eq!(
            strip.drain(),
            vec![(id, TabEvent::Selected(1)), (id, TabEvent::Reselected(1))]
        );
    }

    #[test]
    fn test_tap_other_tab_unselects_previous() {
        let mut strip = strip_with_tabs(3);
        let id = strip.add_on_tab_selected_listener();

        strip.tap(0);
        strip.tap(2);
        assert_eq!(
            strip.drain(),
            vec![
                (id, TabEvent::Selected(0)),
                (id, TabEvent::Unselected(0)),
                (id, TabEvent::Selected(2)),
            ]
        );
        assert_eq!(strip.selected_tab_position(), Some(2));
    }

    #[test]
    fn test_set_scroll_position_does_not_change_selection() {
        let mut strip = strip_with_tabs(3);
        strip.tap(0);
        strip.set_scroll_position(2, 0.0, true, true);

        assert_eq!(strip.selected_tab_position(), Some(0));
        assert_eq!(strip.indicator_position(), Some(2));
        assert_eq!(strip.highlighted_text_position(), Some(2));
    }

    #[test]
    fn test_set_scroll_position_respects_update_flags() {
        let mut strip = strip_with_tabs(3);
        strip.set_scroll_position(1, 0.0, true, false);
        assert_eq!(strip.highlighted_text_position(), Some(1));
        assert_eq!(strip.indicator_position(), None);

        strip.set_scroll_position(2, 0.0, false, true);
        assert_eq!(strip.highlighted_text_position(), Some(1));
        assert_eq!(strip.indicator_position(), Some(2));
    }

    #[test]
    fn test_removed_listener_receives_nothing() {
        let mut strip = strip_with_tabs(2);
        let id = strip.add_on_tab_selected_listener();
        strip.remove_on_tab_selected_listener(id);

        strip.tap(1);
        assert!(strip.drain().is_empty());
        assert_eq!(strip.listener_count(), 0);
    }

    #[test]
    fn test_remove_all_tabs_resets_state() {
        let mut strip = strip_with_tabs(2);
        strip.tap(1);
        strip.remove_all_tabs();

        assert_eq!(strip.tab_count(), 0);
        assert_eq!(strip.selected_tab_position(), None);
        assert_eq!(strip.indicator_position(), None);
        assert_eq!(strip.removal_count(), 1);
    }
}
