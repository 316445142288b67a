//! 表示領域とスクロール位置の共通計算

use super::ItemBounds;

/// 配置済みアイテムの座標とスクロール状態
#[derive(Debug, Clone)]
pub(super) struct Viewport {
    /// コンテンツ座標での上端
    tops: Vec<i32>,
    heights: Vec<i32>,
    content_height: i32,
    height: i32,
    scroll_y: i32,
    pending: Option<(usize, i32)>,
    laid_out: bool,
}

impl Viewport {
    pub(super) fn new(height: i32) -> Self {
        Self {
            tops: Vec::new(),
            heights: Vec::new(),
            content_height: 0,
            height: height.max(0),
            scroll_y: 0,
            pending: None,
            laid_out: false,
        }
    }

    /// 配置結果を差し替え、スクロール位置を収まる範囲に戻す
    pub(super) fn place(&mut self, tops: Vec<i32>, heights: Vec<i32>, content_height: i32) {
        self.tops = tops;
        self.heights = heights;
        self.content_height = content_height;
        self.scroll_y = self.clamp(self.scroll_y);
    }

    pub(super) fn item_count(&self) -> usize {
        self.tops.len()
    }

    pub(super) fn height(&self) -> i32 {
        self.height
    }

    pub(super) fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub(super) fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    fn max_scroll(&self) -> i32 {
        (self.content_height - self.height).max(0)
    }

    fn clamp(&self, y: i32) -> i32 {
        y.clamp(0, self.max_scroll())
    }

    /// 画面座標での範囲（レイアウト状態を問わない）
    pub(super) fn bounds(&self, position: usize) -> Option<ItemBounds> {
        let top = *self.tops.get(position)? - self.scroll_y;
        let height = *self.heights.get(position)?;
        Some(ItemBounds::new(top, top + height))
    }

    /// 1 ピクセルでも表示領域に入っているか
    pub(super) fn is_visible(&self, position: usize) -> bool {
        self.bounds(position)
            .is_some_and(|b| b.bottom > 0 && b.top < self.height)
    }

    /// 表示中アイテムの範囲（未レイアウトまたは画面外なら None）
    pub(super) fn visible_bounds(&self, position: usize) -> Option<ItemBounds> {
        if self.laid_out && self.is_visible(position) {
            self.bounds(position)
        } else {
            None
        }
    }

    pub(super) fn request_position(&mut self, position: usize, offset: i32) {
        self.pending = Some((position, offset));
    }

    pub(super) fn scroll_by(&mut self, dy: i32) -> i32 {
        let target = self.clamp(self.scroll_y.saturating_add(dy));
        let consumed = target - self.scroll_y;
        self.scroll_y = target;
        consumed
    }

    pub(super) fn layout_pass(&mut self) -> bool {
        let first_pass = !self.laid_out;
        self.laid_out = true;
        match self.pending.take() {
            Some((position, offset)) => {
                if let Some(top) = self.tops.get(position) {
                    self.scroll_y = self.clamp(top - offset);
                }
                true
            }
            None => first_pass,
        }
    }
}
