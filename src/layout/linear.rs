//! 単一カラムのレイアウト

use super::viewport::Viewport;
use super::{ItemBounds, LayoutEngine, LayoutQuery};

/// 縦一列にアイテムを並べるレイアウト
#[derive(Debug, Clone)]
pub struct LinearLayout {
    viewport: Viewport,
}

impl LinearLayout {
    pub fn new(viewport_height: i32) -> Self {
        Self {
            viewport: Viewport::new(viewport_height),
        }
    }

    fn visible_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.viewport.item_count()).filter(|&i| self.viewport.is_visible(i))
    }
}

impl LayoutQuery for LinearLayout {
    fn item_count(&self) -> usize {
        self.viewport.item_count()
    }

    fn first_visible_position(&self) -> Option<usize> {
        if !self.viewport.is_laid_out() {
            return None;
        }
        self.visible_positions().next()
    }

    fn last_visible_position(&self) -> Option<usize> {
        if !self.viewport.is_laid_out() {
            return None;
        }
        self.visible_positions().last()
    }

    fn find_view_by_position(&self, position: usize) -> Option<ItemBounds> {
        self.viewport.visible_bounds(position)
    }
}

impl LayoutEngine for LinearLayout {
    fn set_item_heights(&mut self, heights: &[i32]) {
        let mut tops = Vec::with_capacity(heights.len());
        let mut y = 0;
        for &h in heights {
            tops.push(y);
            y += h.max(0);
        }
        let heights = heights.iter().map(|h| (*h).max(0)).collect();
        self.viewport.place(tops, heights, y);
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
}
