//! デモ TUI の状態

use tabsync::host::{Action, Host};
use tabsync::layout::LayoutEngine;
use tabsync::Result;

/// アプリケーション状態
pub(super) struct DemoApp<L> {
    /// プリセット名または設定ファイルのパス
    pub(super) name: String,
    pub(super) host: Host<L>,
    pub(super) last_action: Option<Action>,
    /// 直前の操作が失敗した理由
    pub(super) message: Option<String>,
    pub(super) should_quit: bool,
}

impl<L: LayoutEngine> DemoApp<L> {
    pub(super) fn new(name: String, mut host: Host<L>) -> Result<Self> {
        host.attach()?;
        host.settle();
        Ok(Self {
            name,
            host,
            last_action: None,
            message: None,
            should_quit: false,
        })
    }

    pub(super) fn apply(&mut self, action: Action) {
        self.message = self.host.apply(action).err().map(|e| e.to_string());
        self.last_action = Some(action);
    }
}
