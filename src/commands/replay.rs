//! tabsync replay コマンド
//!
//! 操作列をヘッドレスウィジェット上で再生し、各ステップ後の同期状態を表示する。

use super::FeedArgs;
use crate::output::{anchored_label, app_bar_label, position_label, tab_label, ReplaySummary};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use tabsync::config::{FeedConfig, LayoutKind};
use tabsync::host::{Action, Host, Snapshot};
use tabsync::layout::{LayoutEngine, LinearLayout, StaggeredGridLayout};

#[derive(Debug, Parser)]
#[command(after_help = "ACTIONS:\n  drag:DY     drag by DY pixels and release\n  fling:DY    drag and fling DY pixels\n  tap:INDEX   tap the tab at INDEX\n  append:TAG  append an item with view type TAG\n  detach      detach the mediator\n  attach      attach the mediator")]
pub struct Args {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Actions to replay in order
    #[arg(required = true, value_name = "ACTION")]
    pub actions: Vec<Action>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 1 ステップ分の記録
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Step {
    pub step: usize,
    pub action: String,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

pub fn run(args: Args) -> Result<(), String> {
    let (_, feed) = args.feed.load()?;
    let steps = replay_feed(&feed, &args.actions)?;

    if args.json {
        print_json(&steps)
    } else {
        print_table(&steps);
        Ok(())
    }
}

/// フィードのレイアウト種別に応じてホストを組み立てて再生する
pub(crate) fn replay_feed(feed: &FeedConfig, actions: &[Action]) -> Result<Vec<Step>, String> {
    match feed.layout {
        LayoutKind::Linear => replay(build(feed, LinearLayout::new(feed.viewport_height))?, actions),
        LayoutKind::Staggered { spans } => replay(
            build(feed, StaggeredGridLayout::new(feed.viewport_height, spans))?,
            actions,
        ),
    }
}

fn build<L: LayoutEngine>(feed: &FeedConfig, layout: L) -> Result<Host<L>, String> {
    let mut host = Host::from_feed(feed, layout).map_err(|e| e.to_string())?;
    host.attach().map_err(|e| e.to_string())?;
    host.settle();
    Ok(host)
}

fn replay<L: LayoutEngine>(mut host: Host<L>, actions: &[Action]) -> Result<Vec<Step>, String> {
    let mut steps = vec![Step {
        step: 0,
        action: "attach".to_string(),
        snapshot: host.snapshot(),
    }];
    for (index, action) in actions.iter().enumerate() {
        host.apply(*action)
            .map_err(|e| format!("step {} ({action}): {e}", index + 1))?;
        steps.push(Step {
            step: index + 1,
            action: action.to_string(),
            snapshot: host.snapshot(),
        });
    }
    Ok(steps)
}

fn print_json(steps: &[Step]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(steps).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_table(steps: &[Step]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Step",
        "Action",
        "Offset",
        "Anchored",
        "Tab",
        "Indicator",
        "App bar",
        "Tab click",
    ]);

    for step in steps {
        let snapshot = &step.snapshot;
        table.add_row(vec![
            step.step.to_string(),
            step.action.clone(),
            snapshot.scroll_offset.to_string(),
            anchored_label(snapshot),
            tab_label(snapshot),
            position_label(snapshot.indicator),
            app_bar_label(snapshot.app_bar_expanded).to_string(),
            if snapshot.tab_click_scroll { "yes" } else { "-" }.to_string(),
        ]);
    }

    println!("{table}");

    if let Some(last) = steps.last() {
        let summary = ReplaySummary::format(steps.len() - 1, &last.snapshot);
        println!("{} {}", summary.prefix, summary.message);
    }
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
