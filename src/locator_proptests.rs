use super::*;
use crate::layout::{LayoutEngine, LinearLayout};
use proptest::prelude::*;

/// アイテム高さ一覧（1..=300px、1..40 件）
fn heights_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1i32..=300, 1..40)
}

proptest! {
    /// 返される位置は offset をまたぐアイテム、もしくは先頭可視位置である
    #[test]
    fn prop_result_straddles_offset_or_is_naive_first(
        heights in heights_strategy(),
        viewport in 50i32..800,
        scroll in 0i32..5000,
        offset in 1i32..200,
    ) {
        let mut layout = LinearLayout::new(viewport);
        layout.set_item_heights(&heights);
        layout.layout_pass();
        layout.scroll_by(scroll);

        let naive = find_first_visible_item_position(Some(&layout), 0);
        let result = find_first_visible_item_position(Some(&layout), offset);

        let straddles = layout
            .find_view_by_position(result)
            .is_some_and(|b| b.straddles(offset));
        prop_assert!(straddles || result == naive);
        prop_assert!(result >= naive);
    }

    /// offset をまたぐ可視アイテムが存在すれば、そのうち最小の位置が返される
    #[test]
    fn prop_first_straddling_item_wins(
        heights in heights_strategy(),
        viewport in 50i32..800,
        scroll in 0i32..5000,
        offset in 1i32..200,
    ) {
        let mut layout = LinearLayout::new(viewport);
        layout.set_item_heights(&heights);
        layout.layout_pass();
        layout.scroll_by(scroll);

        let expected = (0..heights.len()).find(|&i| {
            layout
                .find_view_by_position(i)
                .is_some_and(|b| b.straddles(offset))
        });
        if let Some(expected) = expected {
            prop_assert_eq!(find_first_visible_item_position(Some(&layout), offset), expected);
        }
    }

    /// 先頭可視位置は末尾可視位置を超えない
    #[test]
    fn prop_first_never_exceeds_last(
        heights in heights_strategy(),
        viewport in 50i32..800,
        scroll in 0i32..5000,
    ) {
        let mut layout = LinearLayout::new(viewport);
        layout.set_item_heights(&heights);
        layout.layout_pass();
        layout.scroll_by(scroll);

        let first = find_first_visible_item_position(Some(&layout), 0);
        let last = find_last_visible_item_position(Some(&layout));
        prop_assert!(first <= last);
    }
}
