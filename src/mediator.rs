//! タブストリップとリストの双方向同期
//!
//! `Detached -> Attached -> Detached` の状態を持ち、attach 時に登録したリスナー宛ての
//! 通知だけを各コントローラーへ振り分ける。ウィジェットは所有せず、呼び出しごとに
//! `Widgets` で借用する。

use crate::config::MediatorConfig;
use crate::data_observer::DataChangeObserver;
use crate::error::{Result, TabSyncError};
use crate::scroll_sync::ScrollSyncController;
use crate::tab::{TabConfigurationStrategy, TabHandle};
use crate::tab_group;
use crate::tab_select::TabSelectionController;
use crate::widget::{
    ItemList, ItemSource, ListDispatch, ListenerId, ScrollState, TabEvent, TabStrip, Widgets,
};

/// attach 中に登録したリスナー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Registrations {
    scroll_listener: ListenerId,
    tab_listener: ListenerId,
    data_observer: Option<DataChangeObserver>,
}

/// 接続状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attachment {
    Detached,
    Attached(Registrations),
}

/// タブストリップとリストを結びつける同期エンジン
#[derive(Debug)]
pub struct Mediator<S> {
    config: MediatorConfig,
    strategy: S,
    attachment: Attachment,
    scroll_sync: ScrollSyncController,
    tab_select: TabSelectionController,
}

impl<S: TabConfigurationStrategy> Mediator<S> {
    pub fn new(config: MediatorConfig, strategy: S) -> Self {
        Self {
            config,
            strategy,
            attachment: Attachment::Detached,
            scroll_sync: ScrollSyncController::new(config.offset),
            tab_select: TabSelectionController::new(config.offset),
        }
    }

    pub fn config(&self) -> &MediatorConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.attachment, Attachment::Attached(_))
    }

    /// 現在ハイライトしているタブ
    pub fn selected_tab_position(&self) -> Option<usize> {
        self.scroll_sync.selected_tab_position()
    }

    /// タブタップ由来のスクロール中か
    pub fn is_tab_click_scroll(&self) -> bool {
        self.scroll_sync.is_tab_click_scroll()
    }

    pub fn scroll_states(&self) -> (ScrollState, ScrollState) {
        self.scroll_sync.scroll_states()
    }

    pub fn has_pending_retry(&self) -> bool {
        self.tab_select.pending_retry().is_some()
    }

    /// ウィジェットに接続する
    ///
    /// 接続済み、またはリストにデータソースがない場合は何も変更せずエラーを返す。
    pub fn attach<L, T>(&mut self, widgets: &mut Widgets<'_, L, T>) -> Result<()>
    where
        L: ItemList,
        T: TabStrip,
    {
        if self.is_attached() {
            return Err(TabSyncError::AlreadyAttached);
        }
        if widgets.list.data_source().is_none() {
            return Err(TabSyncError::NoAdapter);
        }

        self.scroll_sync = ScrollSyncController::new(self.config.offset);
        self.tab_select = TabSelectionController::new(self.config.offset);

        let scroll_listener = widgets.list.add_on_scroll_listener();
        let tab_listener = widgets.tabs.add_on_tab_selected_listener();
        let data_observer = self
            .config
            .auto_refresh
            .then(|| DataChangeObserver::register(&mut *widgets.list));
        self.attachment = Attachment::Attached(Registrations {
            scroll_listener,
            tab_listener,
            data_observer,
        });
        tracing::debug!(
            tab_count = self.config.tab_count,
            offset = self.config.offset,
            auto_refresh = self.config.auto_refresh,
            "mediator attached"
        );

        self.populate_tabs(widgets);
        if has_items(&*widgets.list) {
            self.scroll_sync.refresh(&*widgets.list, &mut *widgets.tabs, false);
        }
        Ok(())
    }

    /// 接続を解除する
    ///
    /// attach で登録した全リスナーを外し、保留中の再試行を取り消す。
    pub fn detach<L, T>(&mut self, widgets: &mut Widgets<'_, L, T>) -> Result<()>
    where
        L: ItemList,
        T: TabStrip,
    {
        let Attachment::Attached(registrations) = self.attachment else {
            return Err(TabSyncError::NotAttached);
        };

        widgets
            .list
            .remove_on_scroll_listener(registrations.scroll_listener);
        widgets
            .tabs
            .remove_on_tab_selected_listener(registrations.tab_listener);
        if let Some(observer) = registrations.data_observer {
            observer.unregister(&mut *widgets.list);
        }
        self.tab_select.cancel(&mut *widgets.list);
        self.scroll_sync.clear_tab_click_scroll();
        self.attachment = Attachment::Detached;
        tracing::debug!("mediator detached");
        Ok(())
    }

    /// タブを作り直し、アイテムがあれば選択を合わせ直す
    pub fn populate_tabs<L, T>(&mut self, widgets: &mut Widgets<'_, L, T>) -> Vec<TabHandle>
    where
        L: ItemList,
        T: TabStrip,
    {
        let handles =
            tab_group::populate(&mut *widgets.tabs, self.config.tab_count, &mut self.strategy);
        if has_items(&*widgets.list) {
            self.scroll_sync.refresh(&*widgets.list, &mut *widgets.tabs, true);
        }
        handles
    }

    // ========================================================================
    // 通知の受け口
    // ========================================================================

    /// リストからの通知
    pub fn on_list_dispatch<L, T>(&mut self, widgets: &mut Widgets<'_, L, T>, dispatch: ListDispatch)
    where
        L: ItemList,
        T: TabStrip,
    {
        let Attachment::Attached(registrations) = self.attachment else {
            return;
        };
        match dispatch {
            ListDispatch::ScrollStateChanged { listener, state }
                if listener == registrations.scroll_listener =>
            {
                self.scroll_sync.on_scroll_state_changed(state);
            }
            ListDispatch::Scrolled { listener, dx, dy }
                if listener == registrations.scroll_listener =>
            {
                self.scroll_sync
                    .on_scrolled(&*widgets.list, &mut *widgets.tabs, dx, dy);
            }
            ListDispatch::DataChanged { observer, change } => {
                let repopulate = registrations
                    .data_observer
                    .is_some_and(|o| o.on_changed(observer, change));
                if repopulate {
                    self.populate_tabs(widgets);
                }
            }
            ListDispatch::Frame(token) => {
                self.tab_select.on_frame(widgets, token);
            }
            _ => {}
        }
    }

    /// タブストリップからの通知
    ///
    /// `Unselected` は無視し、`Reselected` は `Selected` と同じに扱う。
    pub fn on_tab_event<L, T>(
        &mut self,
        widgets: &mut Widgets<'_, L, T>,
        listener: ListenerId,
        event: TabEvent,
    ) where
        L: ItemList,
        T: TabStrip,
    {
        let Attachment::Attached(registrations) = self.attachment else {
            return;
        };
        if listener != registrations.tab_listener {
            return;
        }
        match event {
            TabEvent::Selected(position) | TabEvent::Reselected(position) => {
                self.tab_select
                    .on_tab_selected(widgets, &mut self.scroll_sync, position);
            }
            TabEvent::Unselected(_) => {}
        }
    }
}

fn has_items<L: ItemList + ?Sized>(list: &L) -> bool {
    list.data_source().is_some_and(|s| s.item_count() > 0)
}

#[cfg(test)]
#[path = "mediator_test.rs"]
mod tests;
