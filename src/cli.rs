use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{presets, replay, run};

#[derive(Debug, Parser)]
#[command(name = "tabsync")]
#[command(about = "Tab strip and list scroll synchronization demo", long_about = None)]
pub struct Cli {
    /// Append logs to FILE instead of stderr (filter via TABSYNC_LOG)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 対話型デモを起動
    #[command(about = "Run the interactive terminal demo")]
    Run(run::Args),

    /// 操作列をヘッドレスで再生
    #[command(about = "Replay actions headlessly and print the synced state")]
    Replay(replay::Args),

    /// 組み込みプリセット一覧
    #[command(about = "List built-in presets")]
    Presets(presets::Args),
}
