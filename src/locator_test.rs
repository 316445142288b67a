use super::*;
use crate::layout::{ItemBounds, LayoutEngine, LinearLayout, StaggeredGridLayout};

/// 任意のレイアウト状態を返すテスト用スタブ
struct StubLayout {
    first: Option<usize>,
    last: Option<usize>,
    bounds: Vec<Option<ItemBounds>>,
}

impl LayoutQuery for StubLayout {
    fn item_count(&self) -> usize {
        self.bounds.len()
    }

    fn first_visible_position(&self) -> Option<usize> {
        self.first
    }

    fn last_visible_position(&self) -> Option<usize> {
        self.last
    }

    fn find_view_by_position(&self, position: usize) -> Option<ItemBounds> {
        self.bounds.get(position).copied().flatten()
    }
}

fn laid_out_linear(heights: &[i32], viewport: i32, scroll: i32) -> LinearLayout {
    let mut layout = LinearLayout::new(viewport);
    layout.set_item_heights(heights);
    layout.layout_pass();
    layout.scroll_by(scroll);
    layout
}

#[test]
fn no_layout_returns_zero() {
    assert_eq!(find_first_visible_item_position::<LinearLayout>(None, 0), 0);
    assert_eq!(find_first_visible_item_position::<LinearLayout>(None, 40), 0);
    assert_eq!(find_last_visible_item_position::<LinearLayout>(None), 0);
}

#[test]
fn not_yet_laid_out_returns_zero() {
    let mut layout = LinearLayout::new(300);
    layout.set_item_heights(&[100; 5]);
    assert_eq!(find_first_visible_item_position(Some(&layout), 0), 0);
    assert_eq!(find_last_visible_item_position(Some(&layout)), 0);
}

#[test]
fn zero_offset_uses_first_partially_visible_item() {
    let layout = laid_out_linear(&[100; 10], 300, 150);
    assert_eq!(find_first_visible_item_position(Some(&layout), 0), 1);
    assert_eq!(find_last_visible_item_position(Some(&layout)), 4);
}

#[test]
fn offset_selects_item_straddling_the_line() {
    // item 1 は画面上 -50..50、item 2 は 50..150
    let layout = laid_out_linear(&[100; 10], 300, 150);
    assert_eq!(find_first_visible_item_position(Some(&layout), 40), 1);
    assert_eq!(find_first_visible_item_position(Some(&layout), 80), 2);
}

#[test]
fn offset_on_shared_edge_belongs_to_lower_item() {
    let layout = laid_out_linear(&[100; 10], 300, 0);
    assert_eq!(find_first_visible_item_position(Some(&layout), 99), 0);
    assert_eq!(find_first_visible_item_position(Some(&layout), 100), 1);
}

#[test]
fn offset_without_match_falls_back_to_first_visible() {
    let layout = StubLayout {
        first: Some(3),
        last: Some(4),
        bounds: vec![
            None,
            None,
            None,
            Some(ItemBounds::new(0, 10)),
            Some(ItemBounds::new(10, 20)),
        ],
    };
    assert_eq!(find_first_visible_item_position(Some(&layout), 500), 3);
}

#[test]
fn scan_skips_items_without_bounds() {
    let layout = StubLayout {
        first: Some(0),
        last: Some(3),
        bounds: vec![None, Some(ItemBounds::new(-20, 10)), None, Some(ItemBounds::new(30, 90))],
    };
    assert_eq!(find_first_visible_item_position(Some(&layout), 40), 3);
}

#[test]
fn staggered_layout_is_handled_through_the_same_query() {
    let mut layout = StaggeredGridLayout::new(200, 2);
    layout.set_item_heights(&[100, 60, 100, 60, 100, 60]);
    layout.layout_pass();

    // カラム 0: 0 (0..100), 3 (100..160) / カラム 1: 1 (0..60), 2 (60..160)
    assert_eq!(find_first_visible_item_position(Some(&layout), 0), 0);
    assert_eq!(find_first_visible_item_position(Some(&layout), 99), 0);
    assert_eq!(find_first_visible_item_position(Some(&layout), 100), 2);
    assert_eq!(find_first_visible_item_position(Some(&layout), 110), 2);
}

#[test]
fn works_through_trait_object() {
    let layout = laid_out_linear(&[100; 4], 200, 100);
    let query: &dyn LayoutQuery = &layout;
    assert_eq!(find_first_visible_item_position(Some(query), 0), 1);
    assert_eq!(find_last_visible_item_position(Some(query)), 2);
}
