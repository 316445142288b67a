//! タブとアイテム種別グループの対応表
//!
//! タブの再構築と、種別タグから担当タブを引く処理。
//! 対応表の実体はタブストリップ上の各タブに持たせたタグで、ここでは保持しない。

use crate::tab::{TabConfigurationStrategy, TabHandle};
use crate::widget::TabStrip;

/// タブを全て作り直す
///
/// 既存タブを削除し、`tab_count` 個のタブを順に生成する。
/// 設定戦略はタブ 1 つにつき 1 回だけ呼ばれる。
pub fn populate<T, S>(tabs: &mut T, tab_count: usize, strategy: &mut S) -> Vec<TabHandle>
where
    T: TabStrip + ?Sized,
    S: TabConfigurationStrategy + ?Sized,
{
    tabs.remove_all_tabs();
    let handles: Vec<TabHandle> = (0..tab_count)
        .map(|position| TabHandle::new(position, strategy.on_configure_tab(position)))
        .collect();
    for handle in &handles {
        tabs.add_tab(handle.clone(), false);
    }
    tracing::debug!(tab_count, "populated tabs");
    handles
}

/// 種別タグを担当するタブ位置を返す
///
/// 範囲が重なる場合はタブ順で最初に一致したものを採用する。
pub fn tab_for_view_type<T>(tabs: &T, view_type: i32) -> Option<usize>
where
    T: TabStrip + ?Sized,
{
    (0..tabs.tab_count()).find(|&position| {
        tabs.tab_at(position)
            .is_some_and(|tab| tab.tag().contains(view_type))
    })
}

#[cfg(test)]
#[path = "tab_group_test.rs"]
mod tests;
