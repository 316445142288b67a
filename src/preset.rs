//! 組み込みのデモフィード

use crate::config::{FeedConfig, ItemSpec, LayoutKind, TabSpec};
use crate::error::TabSyncError;
use std::fmt;
use std::str::FromStr;

pub const A: i32 = 0;
pub const B: i32 = 1;
pub const C: i32 = 2;
pub const D: i32 = 3;
pub const E: i32 = 4;
pub const F: i32 = 5;
pub const G: i32 = 6;
pub const H: i32 = 7;
pub const OTHER: i32 = 100;
/// どのタブにも属さない先頭ギャラリー
pub const GALLERY: i32 = 101;

/// 組み込みプリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// アプリバー付き、基準線 0
    NoOffset,
    /// 先頭ギャラリー付き、基準線 40px
    WithOffset,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::NoOffset, Preset::WithOffset]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::NoOffset => "no-offset",
            Preset::WithOffset => "with-offset",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::NoOffset => "App bar above the tabs, anchor line at the top edge",
            Preset::WithOffset => "Leading gallery outside every tab, anchor line 40px down",
        }
    }

    pub fn feed(&self) -> FeedConfig {
        let mut items = Vec::new();
        if *self == Preset::WithOffset {
            items.push(ItemSpec::new(GALLERY, 200, "GALLERY"));
        }
        items.extend(lettered_items());
        items.push(ItemSpec::new(OTHER, 40, "OTHER").repeated(20));

        let (offset, app_bar) = match self {
            Preset::NoOffset => (0, true),
            Preset::WithOffset => (40, false),
        };
        FeedConfig {
            offset,
            auto_refresh: true,
            app_bar,
            viewport_height: 600,
            layout: LayoutKind::Linear,
            tab_count: None,
            tabs: feed_tabs(),
            items,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = TabSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| TabSyncError::UnknownPreset(s.to_string()))
    }
}

fn lettered_items() -> Vec<ItemSpec> {
    [
        (A, 100, "A"),
        (B, 200, "B"),
        (C, 100, "C"),
        (D, 200, "D"),
        (E, 100, "E"),
        (F, 100, "F"),
        (G, 100, "G"),
        (H, 100, "H"),
    ]
    .into_iter()
    .map(|(view_type, height, title)| ItemSpec::new(view_type, height, title))
    .collect()
}

fn feed_tabs() -> Vec<TabSpec> {
    [("Gallery", A, C), ("D", D, F), ("G", G, H), ("OTHER", OTHER, OTHER)]
        .into_iter()
        .map(|(title, start, end)| TabSpec {
            title: title.to_string(),
            start,
            end,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_offset_feed_shape() {
        let feed = Preset::NoOffset.feed();
        let items = feed.items();
        assert_eq!(items.len(), 28);
        assert_eq!(items[8].view_type, OTHER);
        assert!(feed.app_bar);
        assert_eq!(feed.offset, 0);
        assert!(feed.validate().is_ok());
    }

    #[test]
    fn test_with_offset_feed_leads_with_gallery() {
        let feed = Preset::WithOffset.feed();
        let items = feed.items();
        assert_eq!(items.len(), 29);
        assert_eq!(items[0].view_type, GALLERY);
        assert_eq!(feed.offset, 40);
        assert!(!feed.app_bar);
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!("no-offset".parse::<Preset>().ok(), Some(Preset::NoOffset));
        assert_eq!("with-offset".parse::<Preset>().ok(), Some(Preset::WithOffset));
        assert!(matches!(
            "nope".parse::<Preset>(),
            Err(TabSyncError::UnknownPreset(name)) if name == "nope"
        ));
    }
}
