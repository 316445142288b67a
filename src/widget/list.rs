//! ヘッドレスなスクロールリスト
//!
//! 指ドラッグ・フリング・データ変更を模擬し、発生したイベントを
//! 登録済みリスナーごとにキューへ積む。配送は呼び出し側が `drain` で行う。

use super::{
    DataChange, FrameToken, ItemList, ItemSource, ListDispatch, ListenerId, ScrollState,
};
use crate::layout::LayoutEngine;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// フリング・スムーススクロール時に 1 フレームで進む最大量（px）
pub const SETTLE_STEP: i32 = 60;

/// リストの 1 アイテム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub view_type: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Item {
    pub fn new(view_type: i32, height: i32) -> Self {
        Self {
            view_type,
            height,
            title: None,
        }
    }

    pub fn titled(view_type: i32, height: i32, title: impl Into<String>) -> Self {
        Self {
            view_type,
            height,
            title: Some(title.into()),
        }
    }
}

/// `Vec<Item>` を保持するデータソース
#[derive(Debug, Clone, Default)]
pub struct FeedSource {
    items: Vec<Item>,
}

impl FeedSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn heights(&self) -> Vec<i32> {
        self.items.iter().map(|item| item.height).collect()
    }
}

impl ItemSource for FeedSource {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_view_type(&self, position: usize) -> Option<i32> {
        self.items.get(position).map(|item| item.view_type)
    }
}

/// ヘッドレスなスクロールリスト
#[derive(Debug)]
pub struct HeadlessList<L> {
    source: Option<FeedSource>,
    layout: L,
    scroll_state: ScrollState,
    settle_remaining: i32,
    scroll_listeners: Vec<ListenerId>,
    data_observers: Vec<ListenerId>,
    frame_callbacks: Vec<FrameToken>,
    next_id: u64,
    queue: VecDeque<ListDispatch>,
}

impl<L: LayoutEngine> HeadlessList<L> {
    /// データソース未設定のリストを作成
    pub fn new(layout: L) -> Self {
        Self {
            source: None,
            layout,
            scroll_state: ScrollState::Idle,
            settle_remaining: 0,
            scroll_listeners: Vec::new(),
            data_observers: Vec::new(),
            frame_callbacks: Vec::new(),
            next_id: 1,
            queue: VecDeque::new(),
        }
    }

    /// アイテム付きのリストを作成
    pub fn with_items(layout: L, items: Vec<Item>) -> Self {
        let mut list = Self::new(layout);
        list.set_adapter(FeedSource::new(items));
        list
    }

    /// データソースを設定（オブザーバーへの通知はしない）
    pub fn set_adapter(&mut self, source: FeedSource) {
        self.layout.set_item_heights(&source.heights());
        self.source = Some(source);
    }

    pub fn clear_adapter(&mut self) {
        self.source = None;
        self.layout.set_item_heights(&[]);
    }

    pub fn items(&self) -> &[Item] {
        self.source.as_ref().map(|s| s.items()).unwrap_or(&[])
    }

    pub fn layout_engine(&self) -> &L {
        &self.layout
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_listeners.len()
    }

    pub fn data_observer_count(&self) -> usize {
        self.data_observers.len()
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.frame_callbacks.len()
    }

    /// 未配送イベントや進行中のスクロールがあるか
    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty()
            || !self.frame_callbacks.is_empty()
            || self.scroll_state == ScrollState::Settling
    }

    // ========================================================================
    // ユーザー操作
    // ========================================================================

    /// 指で触れてドラッグを開始
    pub fn begin_drag(&mut self) {
        self.settle_remaining = 0;
        self.set_scroll_state(ScrollState::Dragging);
    }

    /// ドラッグ中に指を動かす（正の値でリスト後方へ進む）
    pub fn drag_by(&mut self, dy: i32) {
        if self.scroll_state != ScrollState::Dragging {
            self.begin_drag();
        }
        let consumed = self.layout.scroll_by(dy);
        self.emit_scrolled(0, consumed);
    }

    /// 指を離して停止
    pub fn release(&mut self) {
        self.set_scroll_state(ScrollState::Idle);
    }

    /// 指を離して慣性スクロール
    pub fn fling(&mut self, distance: i32) {
        if distance == 0 {
            self.release();
            return;
        }
        self.settle_remaining = distance;
        self.set_scroll_state(ScrollState::Settling);
    }

    /// 停止状態からのアニメーション付きスクロール
    pub fn smooth_scroll_by(&mut self, distance: i32) {
        self.fling(distance);
    }

    /// 1 フレーム分のレイアウトパス
    ///
    /// 慣性スクロールを 1 ステップ進め、保留中の位置指定を反映し、
    /// それ以前に予約されたコールバックを配送キューへ移す。
    /// 何か処理した場合は `true`。
    pub fn layout_pass(&mut self) -> bool {
        let mut worked = false;

        if self.scroll_state == ScrollState::Settling {
            let step = self.settle_remaining.clamp(-SETTLE_STEP, SETTLE_STEP);
            let consumed = self.layout.scroll_by(step);
            self.settle_remaining -= step;
            self.emit_scrolled(0, consumed);
            if self.settle_remaining == 0 || consumed == 0 {
                self.settle_remaining = 0;
                self.set_scroll_state(ScrollState::Idle);
            }
            worked = true;
        }

        if self.layout.layout_pass() {
            // 位置指定によるジャンプは移動量 0 として通知される
            self.push_scrolled(0, 0);
            worked = true;
        }

        for token in self.frame_callbacks.drain(..) {
            self.queue.push_back(ListDispatch::Frame(token));
            worked = true;
        }

        worked
    }

    /// キューに積まれたイベントを取り出す
    pub fn drain(&mut self) -> Vec<ListDispatch> {
        self.queue.drain(..).collect()
    }

    // ========================================================================
    // データ変更
    // ========================================================================

    /// 全アイテムを差し替え
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.mutate(DataChange::Reset, |source| source.items = items);
    }

    /// 指定位置にアイテムを挿入
    pub fn insert_items(&mut self, start: usize, items: Vec<Item>) {
        let Some(len) = self.source.as_ref().map(|s| s.items.len()) else {
            return;
        };
        let start = start.min(len);
        let count = items.len();
        self.mutate(DataChange::RangeInserted { start, count }, |source| {
            let tail = source.items.split_off(start);
            source.items.extend(items);
            source.items.extend(tail);
        });
    }

    /// 末尾にアイテムを追加
    pub fn append_items(&mut self, items: Vec<Item>) {
        let len = self.items().len();
        self.insert_items(len, items);
    }

    /// 指定範囲のアイテムを削除
    pub fn remove_items(&mut self, start: usize, count: usize) {
        let Some(len) = self.source.as_ref().map(|s| s.items.len()) else {
            return;
        };
        let start = start.min(len);
        let end = start.saturating_add(count).min(len);
        self.mutate(
            DataChange::RangeRemoved {
                start,
                count: end - start,
            },
            |source| {
                source.items.drain(start..end);
            },
        );
    }

    /// アイテムを 1 件移動
    pub fn move_item(&mut self, from: usize, to: usize) {
        let Some(len) = self.source.as_ref().map(|s| s.items.len()) else {
            return;
        };
        if from >= len || to >= len {
            return;
        }
        self.mutate(DataChange::RangeMoved { from, to, count: 1 }, |source| {
            let item = source.items.remove(from);
            source.items.insert(to, item);
        });
    }

    /// 指定位置のアイテムを置き換え
    pub fn change_item(&mut self, position: usize, item: Item) {
        if position >= self.items().len() {
            return;
        }
        self.mutate(
            DataChange::RangeChanged {
                start: position,
                count: 1,
            },
            |source| source.items[position] = item,
        );
    }

    fn mutate(&mut self, change: DataChange, apply: impl FnOnce(&mut FeedSource)) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        apply(source);
        let heights = source.heights();
        self.layout.set_item_heights(&heights);
        for &observer in &self.data_observers {
            self.queue
                .push_back(ListDispatch::DataChanged { observer, change });
        }
    }

    // ========================================================================
    // イベント発行
    // ========================================================================

    fn set_scroll_state(&mut self, state: ScrollState) {
        if self.scroll_state == state {
            return;
        }
        self.scroll_state = state;
        for &listener in &self.scroll_listeners {
            self.queue
                .push_back(ListDispatch::ScrollStateChanged { listener, state });
        }
    }

    /// 実際に動いた場合のみ通知
    fn emit_scrolled(&mut self, dx: i32, dy: i32) {
        if dx != 0 || dy != 0 {
            self.push_scrolled(dx, dy);
        }
    }

    fn push_scrolled(&mut self, dx: i32, dy: i32) {
        for &listener in &self.scroll_listeners {
            self.queue
                .push_back(ListDispatch::Scrolled { listener, dx, dy });
        }
    }

    fn next_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl<L: LayoutEngine> ItemList for HeadlessList<L> {
    type Layout = L;
    type Source = FeedSource;

    fn data_source(&self) -> Option<&FeedSource> {
        self.source.as_ref()
    }

    fn layout(&self) -> Option<&L> {
        Some(&self.layout)
    }

    fn stop_scroll(&mut self) {
        if self.scroll_state == ScrollState::Settling {
            self.settle_remaining = 0;
            self.set_scroll_state(ScrollState::Idle);
        }
    }

    fn scroll_to_position_with_offset(&mut self, position: usize, offset: i32) {
        self.layout.scroll_to_position_with_offset(position, offset);
    }

    fn scroll_by(&mut self, dx: i32, dy: i32) {
        let consumed = self.layout.scroll_by(dy);
        self.emit_scrolled(dx, consumed);
    }

    fn add_on_scroll_listener(&mut self) -> ListenerId {
        let id = self.next_listener_id();
        self.scroll_listeners.push(id);
        id
    }

    fn remove_on_scroll_listener(&mut self, id: ListenerId) {
        self.scroll_listeners.retain(|l| *l != id);
    }

    fn register_data_observer(&mut self) -> ListenerId {
        let id = self.next_listener_id();
        self.data_observers.push(id);
        id
    }

    fn unregister_data_observer(&mut self, id: ListenerId) {
        self.data_observers.retain(|o| *o != id);
    }

    fn post_frame_callback(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.frame_callbacks.push(token);
        token
    }

    fn remove_frame_callback(&mut self, token: FrameToken) {
        self.frame_callbacks.retain(|t| *t != token);
        self.queue
            .retain(|dispatch| *dispatch != ListDispatch::Frame(token));
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
