//! tabsync run コマンド
//!
//! 対話型デモ。ログは `--log-file` 指定時のみファイルへ出る。

use super::FeedArgs;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(after_help = "KEYS:\n  Up/Down      drag the list\n  PgUp/PgDn    fling the list\n  1-9          tap a tab\n  Left/Right   tap the previous/next tab\n  r            append an item\n  d            detach/attach the mediator\n  q, Esc       quit")]
pub struct Args {
    #[command(flatten)]
    pub feed: FeedArgs,
}

pub fn run(args: Args) -> Result<(), String> {
    let (name, feed) = args.feed.load()?;
    crate::tui::run(name, feed).map_err(|e| e.to_string())
}
