//! タブ → スクロールの同期
//!
//! タップされたタブの開始タグを持つ最初のアイテムへリストを動かす。
//! 目標がまだレイアウトされていない場合は粗くジャンプし、次のレイアウトパス後に再試行する。

use crate::layout::LayoutQuery;
use crate::locator::{find_first_visible_item_position, find_last_visible_item_position};
use crate::scroll_sync::ScrollSyncController;
use crate::widget::{FrameToken, ItemList, ItemSource, TabStrip, Widgets};

/// 次フレームに予約した再試行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRetry {
    pub token: FrameToken,
    pub target: usize,
    /// 予約時点の先頭可視位置
    pub first_visible: usize,
}

/// 1 回のスクロール命令の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// 位置指定ジャンプ（オフセット付き）
    JumpTo { target: usize, offset: i32 },
    /// 表示中の目標をピクセル単位で動かす
    ScrollBy { dy: i32 },
    /// 目標が画面外のため粗くジャンプし、再試行を予約した
    CoarseJump { target: usize },
}

/// タブ選択由来のスクロール制御
#[derive(Debug, Clone)]
pub struct TabSelectionController {
    offset: i32,
    pending: Option<PendingRetry>,
}

impl TabSelectionController {
    pub fn new(offset: i32) -> Self {
        Self {
            offset,
            pending: None,
        }
    }

    pub fn pending_retry(&self) -> Option<PendingRetry> {
        self.pending
    }

    /// タブの選択・再選択
    ///
    /// 開始タグに一致するアイテムがなければ何もしない。
    pub fn on_tab_selected<L, T>(
        &mut self,
        widgets: &mut Widgets<'_, L, T>,
        sync: &mut ScrollSyncController,
        tab_position: usize,
    ) -> Option<ScrollCommand>
    where
        L: ItemList,
        T: TabStrip,
    {
        let start_tag = widgets.tabs.tab_at(tab_position)?.tag().start;
        let Some(target) = first_item_with_view_type(&*widgets.list, start_tag) else {
            tracing::debug!(tab_position, start_tag, "no item for tab start tag");
            return None;
        };

        self.cancel(&mut *widgets.list);
        sync.begin_tab_click_scroll(tab_position);
        tracing::debug!(tab_position, target, "tab selected");
        Some(self.scroll_to(widgets, target, None))
    }

    /// 予約済みフレームコールバックの実行
    ///
    /// 自分の予約でなければ `None`。
    pub fn on_frame<L, T>(
        &mut self,
        widgets: &mut Widgets<'_, L, T>,
        token: FrameToken,
    ) -> Option<ScrollCommand>
    where
        L: ItemList,
        T: TabStrip,
    {
        let pending = self.pending.filter(|p| p.token == token)?;
        self.pending = None;

        let item_count = widgets.list.data_source().map_or(0, |s| s.item_count());
        if pending.target >= item_count {
            tracing::debug!(target = pending.target, item_count, "dropped stale retry");
            return None;
        }
        tracing::trace!(target = pending.target, "retrying tab scroll");
        Some(self.scroll_to(widgets, pending.target, Some(pending.first_visible)))
    }

    /// 予約済みの再試行を取り消す
    pub fn cancel<L: ItemList + ?Sized>(&mut self, list: &mut L) {
        if let Some(pending) = self.pending.take() {
            list.remove_frame_callback(pending.token);
        }
    }

    /// `previous_first` は再試行時に、前回予約した時点の先頭可視位置
    fn scroll_to<L, T>(
        &mut self,
        widgets: &mut Widgets<'_, L, T>,
        target: usize,
        previous_first: Option<usize>,
    ) -> ScrollCommand
    where
        L: ItemList,
        T: TabStrip,
    {
        let list = &mut *widgets.list;
        list.stop_scroll();

        // 千鳥グリッドの末尾可視位置はカラム 0 基準なので、表示中かどうかは範囲の有無で判定する
        let (first, last, target_top, laid_out) = {
            let layout = list.layout();
            (
                find_first_visible_item_position(layout, 0),
                find_last_visible_item_position(layout),
                layout
                    .and_then(|l| l.find_view_by_position(target))
                    .map(|b| b.top),
                layout.is_some(),
            )
        };

        tracing::trace!(target, first, last, "resolving tab scroll");
        let command = if target <= first {
            list.scroll_to_position_with_offset(target, self.offset);
            ScrollCommand::JumpTo {
                target,
                offset: self.offset,
            }
        } else if let Some(top) = target_top {
            let dy = top - self.offset;
            list.scroll_by(0, dy);
            ScrollCommand::ScrollBy { dy }
        } else {
            list.scroll_to_position_with_offset(target, 0);
            // 末尾で位置が頭打ちになり粗いジャンプでも動かなければ再試行しない
            if previous_first == Some(first) {
                tracing::debug!(target, first, "coarse jump made no progress, retry dropped");
            } else if laid_out {
                let token = list.post_frame_callback();
                self.pending = Some(PendingRetry {
                    token,
                    target,
                    first_visible: first,
                });
                tracing::debug!(target, "scheduled retry after layout pass");
            }
            ScrollCommand::CoarseJump { target }
        };

        if let Some(app_bar) = widgets.app_bar.as_deref_mut() {
            app_bar.set_expanded(target == 0, false);
        }
        command
    }
}

/// 指定種別を持つ最初のアイテム位置
pub fn first_item_with_view_type<L>(list: &L, view_type: i32) -> Option<usize>
where
    L: ItemList + ?Sized,
{
    let source = list.data_source()?;
    (0..source.item_count()).find(|&position| source.item_view_type(position) == Some(view_type))
}

#[cfg(test)]
#[path = "tab_select_test.rs"]
mod tests;
