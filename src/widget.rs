//! 同期エンジンが操作する外部ウィジェットの抽象化
//!
//! エンジンはウィジェットを所有しない。各操作の呼び出し中だけ
//! `Widgets` 経由で借用し、リスナー登録は ID で管理する。
//!
//! - `list`: ヘッドレスなスクロールリスト
//! - `tabs`: ヘッドレスなタブストリップ
//! - `app_bar`: ヘッドレスなアプリバー

mod app_bar;
mod list;
mod tabs;

pub use app_bar::HeadlessAppBar;
pub use list::{FeedSource, HeadlessList, Item, SETTLE_STEP};
pub use tabs::{HeadlessTabStrip, ScrollPositionCall};

use crate::layout::LayoutQuery;
use crate::tab::TabHandle;

/// リスナー登録 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// 次フレームに実行される予約コールバックのトークン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// スクロール状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// データセットの構造変更通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataChange {
    Reset,
    RangeChanged { start: usize, count: usize },
    RangeInserted { start: usize, count: usize },
    RangeRemoved { start: usize, count: usize },
    RangeMoved { from: usize, to: usize, count: usize },
}

/// リストから配送されるイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDispatch {
    /// スクロール量の通知（スクロールリスナー宛て）
    Scrolled { listener: ListenerId, dx: i32, dy: i32 },
    /// スクロール状態の変化（スクロールリスナー宛て）
    ScrollStateChanged { listener: ListenerId, state: ScrollState },
    /// データ変更（データオブザーバー宛て）
    DataChanged { observer: ListenerId, change: DataChange },
    /// 予約コールバックの実行
    Frame(FrameToken),
}

/// タブストリップから配送されるイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    Selected(usize),
    Unselected(usize),
    Reselected(usize),
}

/// リストのデータソース
pub trait ItemSource {
    fn item_count(&self) -> usize;

    /// 指定位置のアイテム種別タグ
    fn item_view_type(&self, position: usize) -> Option<i32>;
}

/// スクロール可能なアイテムリスト
pub trait ItemList {
    type Layout: LayoutQuery;
    type Source: ItemSource;

    /// データソース（未設定なら None）
    fn data_source(&self) -> Option<&Self::Source>;

    /// レイアウト（未設定なら None）
    fn layout(&self) -> Option<&Self::Layout>;

    /// 慣性スクロールを止める
    fn stop_scroll(&mut self);

    /// 指定位置の上端を `offset` に合わせる（次のレイアウトパスで反映）
    fn scroll_to_position_with_offset(&mut self, position: usize, offset: i32);

    /// 即座にピクセル単位でスクロールする
    fn scroll_by(&mut self, dx: i32, dy: i32);

    fn add_on_scroll_listener(&mut self) -> ListenerId;

    fn remove_on_scroll_listener(&mut self, id: ListenerId);

    fn register_data_observer(&mut self) -> ListenerId;

    fn unregister_data_observer(&mut self, id: ListenerId);

    /// 次のレイアウトパス後に配送されるコールバックを予約する
    fn post_frame_callback(&mut self) -> FrameToken;

    /// 予約済みコールバックを取り消す
    fn remove_frame_callback(&mut self, token: FrameToken);
}

/// セグメント化されたタブストリップ
pub trait TabStrip {
    fn remove_all_tabs(&mut self);

    fn add_tab(&mut self, tab: TabHandle, set_selected: bool);

    fn tab_count(&self) -> usize;

    fn tab_at(&self, position: usize) -> Option<&TabHandle>;

    /// インジケーターの表示位置を動かす
    ///
    /// タブストリップ自身の選択状態は変更しない。
    fn set_scroll_position(
        &mut self,
        position: usize,
        position_offset: f32,
        update_selected_text: bool,
        update_indicator_position: bool,
    );

    fn add_on_tab_selected_listener(&mut self) -> ListenerId;

    fn remove_on_tab_selected_listener(&mut self, id: ListenerId);
}

/// 折りたたみ可能なアプリバー
pub trait AppBar {
    fn set_expanded(&mut self, expanded: bool, animate: bool);
}

/// 呼び出し中だけ借用するウィジェット一式
pub struct Widgets<'a, L, T> {
    pub list: &'a mut L,
    pub tabs: &'a mut T,
    pub app_bar: Option<&'a mut dyn AppBar>,
}

impl<'a, L, T> Widgets<'a, L, T> {
    pub fn new(list: &'a mut L, tabs: &'a mut T) -> Self {
        Self {
            list,
            tabs,
            app_bar: None,
        }
    }

    pub fn with_app_bar(mut self, app_bar: &'a mut dyn AppBar) -> Self {
        self.app_bar = Some(app_bar);
        self
    }
}
