//! タブストリップと可変高リストの双方向同期エンジン
//!
//! - リストのスクロールに合わせてタブのインジケーターを動かす
//! - タブのタップでリストを該当グループの先頭へスクロールする
//! - データセットが変わればタブを作り直す
//!
//! エンジン本体は `ItemList` / `TabStrip` / `AppBar` trait 越しにウィジェットを操作する。
//! `widget` と `host` はテストとデモ用のヘッドレス実装。

pub mod config;
pub mod data_observer;
pub mod env;
pub mod error;
pub mod host;
pub mod layout;
pub mod locator;
pub mod logging;
pub mod mediator;
pub mod preset;
pub mod scroll_sync;
pub mod tab;
pub mod tab_group;
pub mod tab_select;
pub mod widget;

pub use config::{FeedConfig, MediatorConfig};
pub use error::{Result, TabSyncError};
pub use mediator::Mediator;
pub use tab::{TabConfigurationStrategy, TabHandle, TabRange};
pub use widget::Widgets;
