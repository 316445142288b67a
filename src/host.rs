//! ヘッドレスウィジェットの実行環境
//!
//! リスト・タブストリップ・アプリバーと Mediator を保持し、
//! ウィジェットが積んだ通知を登録順に Mediator へ配送する。

use crate::config::FeedConfig;
use crate::error::{Result, TabSyncError};
use crate::layout::LayoutEngine;
use crate::locator::find_first_visible_item_position;
use crate::mediator::Mediator;
use crate::tab::TabTable;
use crate::widget::{HeadlessAppBar, HeadlessList, HeadlessTabStrip, Item, ItemList, Widgets};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// `settle` で回すレイアウトパスの上限
pub const MAX_FRAMES: usize = 1000;

/// 追加アイテムの既定の高さ
const APPENDED_ITEM_HEIGHT: i32 = 40;

/// ユーザー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 指でドラッグして離す
    Drag(i32),
    /// ドラッグしてから慣性スクロール
    Fling(i32),
    /// タブをタップ
    Tap(usize),
    /// 指定種別のアイテムを末尾に追加
    Append(i32),
    Detach,
    Attach,
}

impl FromStr for Action {
    type Err = TabSyncError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TabSyncError::InvalidAction(s.to_string());
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        match (name, arg) {
            ("drag", Some(v)) => v.parse().map(Action::Drag).map_err(|_| invalid()),
            ("fling", Some(v)) => v.parse().map(Action::Fling).map_err(|_| invalid()),
            ("tap", Some(v)) => v.parse().map(Action::Tap).map_err(|_| invalid()),
            ("append", Some(v)) => v.parse().map(Action::Append).map_err(|_| invalid()),
            ("detach", None) => Ok(Action::Detach),
            ("attach", None) => Ok(Action::Attach),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Drag(dy) => write!(f, "drag:{dy}"),
            Action::Fling(dy) => write!(f, "fling:{dy}"),
            Action::Tap(index) => write!(f, "tap:{index}"),
            Action::Append(tag) => write!(f, "append:{tag}"),
            Action::Detach => f.write_str("detach"),
            Action::Attach => f.write_str("attach"),
        }
    }
}

/// ある時点の同期状態
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub attached: bool,
    pub scroll_offset: i32,
    pub anchored_position: usize,
    pub anchored_view_type: Option<i32>,
    pub anchored_title: Option<String>,
    pub selected_tab: Option<usize>,
    pub selected_tab_title: Option<String>,
    pub indicator: Option<usize>,
    pub strip_selection: Option<usize>,
    pub app_bar_expanded: Option<bool>,
    pub tab_click_scroll: bool,
}

/// ヘッドレスウィジェット一式と Mediator
#[derive(Debug)]
pub struct Host<L> {
    list: HeadlessList<L>,
    tabs: HeadlessTabStrip,
    app_bar: Option<HeadlessAppBar>,
    mediator: Mediator<TabTable>,
}

impl<L: LayoutEngine> Host<L> {
    pub fn new(
        list: HeadlessList<L>,
        app_bar: Option<HeadlessAppBar>,
        mediator: Mediator<TabTable>,
    ) -> Self {
        Self {
            list,
            tabs: HeadlessTabStrip::new(),
            app_bar,
            mediator,
        }
    }

    /// フィード設定から組み立てる（attach はしない）
    pub fn from_feed(feed: &FeedConfig, layout: L) -> Result<Self> {
        feed.validate()?;
        let mut list = HeadlessList::with_items(layout, feed.items());
        list.layout_pass();
        list.drain();
        let app_bar = feed.app_bar.then(HeadlessAppBar::new);
        let mediator = Mediator::new(feed.mediator_config(), feed.tab_table());
        Ok(Self::new(list, app_bar, mediator))
    }

    pub fn list(&self) -> &HeadlessList<L> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut HeadlessList<L> {
        &mut self.list
    }

    pub fn tabs(&self) -> &HeadlessTabStrip {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut HeadlessTabStrip {
        &mut self.tabs
    }

    pub fn app_bar(&self) -> Option<&HeadlessAppBar> {
        self.app_bar.as_ref()
    }

    pub fn mediator(&self) -> &Mediator<TabTable> {
        &self.mediator
    }

    pub fn attach(&mut self) -> Result<()> {
        let (mediator, mut widgets) = self.parts();
        mediator.attach(&mut widgets)
    }

    pub fn detach(&mut self) -> Result<()> {
        let (mediator, mut widgets) = self.parts();
        mediator.detach(&mut widgets)
    }

    /// キューが空になるまで通知を配送し、配送した件数を返す
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        loop {
            let list_events = self.list.drain();
            let tab_events = self.tabs.drain();
            if list_events.is_empty() && tab_events.is_empty() {
                return delivered;
            }
            delivered += list_events.len() + tab_events.len();

            let (mediator, mut widgets) = self.parts();
            for dispatch in list_events {
                mediator.on_list_dispatch(&mut widgets, dispatch);
            }
            for (listener, event) in tab_events {
                mediator.on_tab_event(&mut widgets, listener, event);
            }
        }
    }

    /// 何も起きなくなるまでレイアウトパスと配送を繰り返す
    ///
    /// 実行したレイアウトパスの回数を返す。
    pub fn settle(&mut self) -> usize {
        self.pump();
        for frame in 0..MAX_FRAMES {
            let worked = self.list.layout_pass();
            self.pump();
            if !worked && !self.list.has_pending_work() {
                return frame + 1;
            }
        }
        tracing::warn!(frames = MAX_FRAMES, "host did not settle");
        MAX_FRAMES
    }

    /// 操作を 1 つ適用して収束させる
    pub fn apply(&mut self, action: Action) -> Result<()> {
        tracing::debug!(%action, "applying action");
        match action {
            Action::Drag(dy) => {
                self.list.begin_drag();
                self.list.drag_by(dy);
                self.list.release();
            }
            Action::Fling(dy) => {
                self.list.begin_drag();
                self.list.fling(dy);
            }
            Action::Tap(index) => self.tabs.tap(index),
            Action::Append(view_type) => {
                let height = self
                    .list
                    .items()
                    .iter()
                    .rev()
                    .find(|item| item.view_type == view_type)
                    .map_or(APPENDED_ITEM_HEIGHT, |item| item.height);
                let title = format!("#{}", self.list.items().len());
                self.list
                    .append_items(vec![Item::titled(view_type, height, title)]);
            }
            Action::Detach => self.detach()?,
            Action::Attach => self.attach()?,
        }
        self.settle();
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        let offset = self.mediator.config().offset;
        let anchored_position = find_first_visible_item_position(self.list.layout(), offset);
        let anchored = self.list.items().get(anchored_position);
        let selected_tab = self.mediator.selected_tab_position();
        Snapshot {
            attached: self.mediator.is_attached(),
            scroll_offset: self.list.layout_engine().scroll_offset(),
            anchored_position,
            anchored_view_type: anchored.map(|item| item.view_type),
            anchored_title: anchored.and_then(|item| item.title.clone()),
            selected_tab,
            selected_tab_title: selected_tab
                .and_then(|p| self.tabs.tabs().get(p))
                .map(|tab| tab.title().to_string()),
            indicator: self.tabs.indicator_position(),
            strip_selection: self.tabs.selected_tab_position(),
            app_bar_expanded: self.app_bar.as_ref().map(|bar| bar.is_expanded()),
            tab_click_scroll: self.mediator.is_tab_click_scroll(),
        }
    }

    /// 表示中アイテムの画面上の範囲
    pub fn visible_items(&self) -> Vec<(usize, i32, i32)> {
        let Some(layout) = self.list.layout() else {
            return Vec::new();
        };
        (0..layout.item_count())
            .filter_map(|p| layout.find_view_by_position(p).map(|b| (p, b.top, b.bottom)))
            .collect()
    }

    fn parts(&mut self) -> (&mut Mediator<TabTable>, Widgets<'_, HeadlessList<L>, HeadlessTabStrip>) {
        let Self {
            list,
            tabs,
            app_bar,
            mediator,
        } = self;
        let mut widgets = Widgets::new(list, tabs);
        if let Some(bar) = app_bar.as_mut() {
            widgets = widgets.with_app_bar(bar);
        }
        (mediator, widgets)
    }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;
