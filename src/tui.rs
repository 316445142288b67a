//! 対話型デモ TUI
//!
//! ヘッドレスウィジェットの状態をそのまま描画する。
//!
//! ## モジュール構成
//!
//! - `state`: アプリケーション状態
//! - `input`: キー入力処理
//! - `render`: 画面描画

mod input;
mod render;
mod state;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use state::DemoApp;
use std::io::{self, stdout, Stdout};
use tabsync::config::{FeedConfig, LayoutKind};
use tabsync::host::Host;
use tabsync::layout::{LayoutEngine, LinearLayout, StaggeredGridLayout};
use tabsync::Result;

/// TUI を実行
pub fn run(name: String, feed: FeedConfig) -> Result<()> {
    match feed.layout {
        LayoutKind::Linear => {
            let host = Host::from_feed(&feed, LinearLayout::new(feed.viewport_height))?;
            run_app(DemoApp::new(name, host)?)
        }
        LayoutKind::Staggered { spans } => {
            let layout = StaggeredGridLayout::new(feed.viewport_height, spans);
            let host = Host::from_feed(&feed, layout)?;
            run_app(DemoApp::new(name, host)?)
        }
    }
}

fn run_app<L: LayoutEngine>(mut app: DemoApp<L>) -> Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result?;
    Ok(())
}

fn event_loop<L: LayoutEngine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut DemoApp<L>,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}
