//! スクロールコンテナのレイアウト抽象化
//!
//! 同期エンジンが参照するのは `LayoutQuery` のみ。
//! 単一カラム（`LinearLayout`）と千鳥グリッド（`StaggeredGridLayout`）の
//! 2 種類の実装を提供し、どちらを使うかはリスト構築時に一度だけ決まる。

mod linear;
mod staggered;
mod viewport;

pub use linear::LinearLayout;
pub use staggered::StaggeredGridLayout;

/// アイテムの画面上の上端・下端（リスト上端からのピクセル座標）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBounds {
    pub top: i32,
    pub bottom: i32,
}

impl ItemBounds {
    pub fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// 水平線 `line` をまたいでいるか
    ///
    /// `bottom` は次のアイテムの `top` と同じ座標なので含めない。
    pub fn straddles(&self, line: i32) -> bool {
        self.top <= line && line < self.bottom
    }
}

/// レイアウト情報の問い合わせ
///
/// まだレイアウトされていない場合は `None` を返す。エラーにはしない。
pub trait LayoutQuery {
    /// レイアウト対象のアイテム数
    fn item_count(&self) -> usize;

    /// 一部でも表示されている先頭アイテムの位置
    fn first_visible_position(&self) -> Option<usize>;

    /// 一部でも表示されている末尾アイテムの位置
    fn last_visible_position(&self) -> Option<usize>;

    /// 表示中アイテムの画面上の範囲
    ///
    /// 画面外、または未レイアウトなら `None`。
    fn find_view_by_position(&self, position: usize) -> Option<ItemBounds>;
}

/// ヘッドレスなレイアウトエンジン
///
/// `HeadlessList` が保持し、スクロール命令とレイアウトパスを実行する。
/// `scroll_to_position_with_offset` は次の `layout_pass` まで反映されない。
pub trait LayoutEngine: LayoutQuery {
    /// アイテムの高さ一覧を差し替える
    fn set_item_heights(&mut self, heights: &[i32]);

    /// 指定位置のアイテム上端を `offset` に合わせる（次のレイアウトパスで反映）
    fn scroll_to_position_with_offset(&mut self, position: usize, offset: i32);

    /// 即座にスクロールし、実際に移動した量を返す
    fn scroll_by(&mut self, dy: i32) -> i32;

    /// レイアウトパスを実行する
    ///
    /// 保留中の位置指定を反映した場合は `true`。
    fn layout_pass(&mut self) -> bool;

    /// 表示領域の高さ
    fn viewport_height(&self) -> i32;

    /// コンテンツ先頭からのスクロール量
    fn scroll_offset(&self) -> i32;

    /// カラム数
    fn span_count(&self) -> usize {
        1
    }

    /// アイテムが配置されたカラム
    fn span_of(&self, _position: usize) -> usize {
        0
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
