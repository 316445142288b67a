use crate::cli::Command;
use std::path::PathBuf;
use tabsync::config::FeedConfig;
use tabsync::preset::Preset;

pub mod presets;
pub mod replay;
pub mod run;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Run(args) => run::run(args),
        Command::Replay(args) => replay::run(args),
        Command::Presets(args) => presets::run(args),
    }
}

/// フィードの指定方法（プリセットか設定ファイル）
#[derive(Debug, Clone, clap::Args)]
pub struct FeedArgs {
    /// Built-in preset: no-offset or with-offset [default: no-offset]
    #[arg(long, conflicts_with = "config")]
    pub preset: Option<Preset>,

    /// Feed file (.toml, .json, .yaml or .yml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl FeedArgs {
    /// 表示用の名前と読み込んだフィード
    pub fn load(&self) -> Result<(String, FeedConfig), String> {
        match &self.config {
            Some(path) => {
                let feed = FeedConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?;
                Ok((path.display().to_string(), feed))
            }
            None => {
                let preset = self.preset.unwrap_or(Preset::NoOffset);
                Ok((preset.name().to_string(), preset.feed()))
            }
        }
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
