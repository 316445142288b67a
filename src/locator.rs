//! 可視アイテム位置の探索
//!
//! レイアウトの種類を問わず `LayoutQuery` だけで判定する。
//! レイアウト情報がなければ 0 を返し、エラーにはしない。

use crate::layout::LayoutQuery;

/// 先頭の可視アイテム位置を求める
///
/// - `offset == 0` ならレイアウトの先頭可視位置をそのまま返す
/// - それ以外は先頭可視位置から順に走査し、上端 ≤ offset < 下端 となる最初のアイテムを返す
/// - 該当がなければ先頭可視位置に戻す
pub fn find_first_visible_item_position<Q>(layout: Option<&Q>, offset: i32) -> usize
where
    Q: LayoutQuery + ?Sized,
{
    let Some(layout) = layout else {
        return 0;
    };
    let first = layout.first_visible_position().unwrap_or(0);
    if offset == 0 {
        return first;
    }

    (first..layout.item_count())
        .find(|&position| {
            layout
                .find_view_by_position(position)
                .is_some_and(|bounds| bounds.straddles(offset))
        })
        .unwrap_or(first)
}

/// 末尾の可視アイテム位置を求める
pub fn find_last_visible_item_position<Q>(layout: Option<&Q>) -> usize
where
    Q: LayoutQuery + ?Sized,
{
    layout
        .and_then(|layout| layout.last_visible_position())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;

#[cfg(test)]
#[path = "locator_proptests.rs"]
mod proptests;
