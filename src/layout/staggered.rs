//! 千鳥グリッドレイアウト
//!
//! 各アイテムはその時点で最も短いカラムに積まれる。
//! 先頭・末尾の可視位置はカラム 0 の値を採用し、
//! カラム 0 に可視アイテムがなければ全カラムから求める。

use super::viewport::Viewport;
use super::{ItemBounds, LayoutEngine, LayoutQuery};

/// 複数カラムの千鳥グリッド
#[derive(Debug, Clone)]
pub struct StaggeredGridLayout {
    viewport: Viewport,
    span_count: usize,
    spans: Vec<usize>,
}

impl StaggeredGridLayout {
    pub fn new(viewport_height: i32, span_count: usize) -> Self {
        Self {
            viewport: Viewport::new(viewport_height),
            span_count: span_count.max(1),
            spans: Vec::new(),
        }
    }

    /// カラムごとの先頭可視位置
    pub fn find_first_visible_item_positions(&self) -> Vec<Option<usize>> {
        (0..self.span_count)
            .map(|span| self.visible_in_span(span).next())
            .collect()
    }

    /// カラムごとの末尾可視位置
    pub fn find_last_visible_item_positions(&self) -> Vec<Option<usize>> {
        (0..self.span_count)
            .map(|span| self.visible_in_span(span).last())
            .collect()
    }

    fn visible_in_span(&self, span: usize) -> impl Iterator<Item = usize> + '_ {
        self.spans
            .iter()
            .enumerate()
            .filter(move |(i, s)| **s == span && self.viewport.is_visible(*i))
            .map(|(i, _)| i)
    }
}

impl LayoutQuery for StaggeredGridLayout {
    fn item_count(&self) -> usize {
        self.viewport.item_count()
    }

    fn first_visible_position(&self) -> Option<usize> {
        if !self.viewport.is_laid_out() {
            return None;
        }
        let per_span = self.find_first_visible_item_positions();
        per_span
            .first()
            .copied()
            .flatten()
            .or_else(|| per_span.iter().flatten().min().copied())
    }

    fn last_visible_position(&self) -> Option<usize> {
        if !self.viewport.is_laid_out() {
            return None;
        }
        let per_span = self.find_last_visible_item_positions();
        per_span
            .first()
            .copied()
            .flatten()
            .or_else(|| per_span.iter().flatten().max().copied())
    }

    fn find_view_by_position(&self, position: usize) -> Option<ItemBounds> {
        self.viewport.visible_bounds(position)
    }
}

impl LayoutEngine for StaggeredGridLayout {
    fn set_item_heights(&mut self, heights: &[i32]) {
        let mut columns = vec![0i32; self.span_count];
        let mut tops = Vec::with_capacity(heights.len());
        let mut spans = Vec::with_capacity(heights.len());
        for &h in heights {
            // 同じ高さなら左のカラムを優先
            let (span, top) = columns
                .iter()
                .copied()
                .enumerate()
                .min_by_key(|(i, y)| (*y, *i))
                .unwrap_or((0, 0));
            tops.push(top);
            spans.push(span);
            columns[span] = top + h.max(0);
        }
        let content_height = columns.iter().copied().max().unwrap_or(0);
        let heights = heights.iter().map(|h| (*h).max(0)).collect();
        self.spans = spans;
        self.viewport.place(tops, heights, content_height);
    }

    fn scroll_to_position_with_offset(&mut self, position: usize, offset: i32) {
        self.viewport.request_position(position, offset);
    }

    fn scroll_by(&mut self, dy: i32) -> i32 {
        self.viewport.scroll_by(dy)
    }

    fn layout_pass(&mut self) -> bool {
        self.viewport.layout_pass()
    }

    fn viewport_height(&self) -> i32 {
        self.viewport.height()
    }

    fn scroll_offset(&self) -> i32 {
        self.viewport.scroll_y()
    }

    fn span_count(&self) -> usize {
        self.span_count
    }

    fn span_of(&self, position: usize) -> usize {
        self.spans.get(position).copied().unwrap_or(0)
    }
}
