//! デモ TUI の描画処理

use super::state::DemoApp;
use crate::output::{anchored_label, tab_label};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use tabsync::host::Snapshot;
use tabsync::layout::LayoutEngine;
use tabsync::tab_group::tab_for_view_type;

const TAB_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::Red,
];

/// UI をレンダリング
pub(super) fn draw<L: LayoutEngine>(f: &mut Frame, app: &DemoApp<L>) {
    f.render_widget(Clear, f.area());

    let snapshot = app.host.snapshot();
    let app_bar_height = if snapshot.app_bar_expanded == Some(true) { 3 } else { 1 };

    // レイアウト（アプリバー + タブバー + リスト + ステータス + ヘルプ）
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app_bar_height),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_app_bar(f, app, &snapshot, chunks[0]);
    render_tabs(f, app, &snapshot, chunks[1]);
    render_list(f, app, &snapshot, chunks[2]);
    render_status(f, app, &snapshot, chunks[3]);

    let help = Paragraph::new(" ↑/↓: drag · PgUp/PgDn: fling · 1-9 ←/→: tab · r: append · d: detach · q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

fn render_app_bar<L: LayoutEngine>(f: &mut Frame, app: &DemoApp<L>, snapshot: &Snapshot, area: Rect) {
    let title = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    match snapshot.app_bar_expanded {
        Some(true) => {
            let bar = Paragraph::new(format!(" {}", app.name))
                .block(Block::default().title(" tabsync ").borders(Borders::ALL))
                .style(title);
            f.render_widget(bar, area);
        }
        _ => {
            let bar = Paragraph::new(format!(" tabsync · {}", app.name)).style(title);
            f.render_widget(bar, area);
        }
    }
}

fn render_tabs<L: LayoutEngine>(f: &mut Frame, app: &DemoApp<L>, snapshot: &Snapshot, area: Rect) {
    let titles: Vec<String> = app
        .host
        .tabs()
        .tabs()
        .iter()
        .map(|tab| tab.title().to_string())
        .collect();
    let tabs = Tabs::new(titles)
        .select(snapshot.indicator)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

fn render_list<L: LayoutEngine>(f: &mut Frame, app: &DemoApp<L>, snapshot: &Snapshot, area: Rect) {
    let title = format!(
        " {} items · scroll {}px · anchor {}px ",
        app.host.list().items().len(),
        snapshot.scroll_offset,
        app.host.mediator().config().offset
    );
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    let lines = list_lines(app, snapshot.anchored_position, inner.height, inner.width);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status<L: LayoutEngine>(f: &mut Frame, app: &DemoApp<L>, snapshot: &Snapshot, area: Rect) {
    let mut spans = vec![Span::raw(format!(
        " {} · tab {} · {:?}",
        anchored_label(snapshot),
        tab_label(snapshot),
        app.host.list().scroll_state()
    ))];
    if !snapshot.attached {
        spans.push(Span::styled(" · detached", Style::default().fg(Color::Yellow)));
    }
    if let Some(action) = app.last_action {
        spans.push(Span::styled(
            format!(" · last {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(message) = &app.message {
        spans.push(Span::styled(
            format!(" · {message}"),
            Style::default().fg(Color::Red),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// リスト領域の各行
///
/// ビューポートの高さを `rows` 行に縮尺し、スパンごとに `width / span_count` 桁を割り当てる。
pub(super) fn list_lines<L: LayoutEngine>(
    app: &DemoApp<L>,
    anchored: usize,
    rows: u16,
    width: u16,
) -> Vec<Line<'static>> {
    let rows = rows as usize;
    let engine = app.host.list().layout_engine();
    let spans = engine.span_count().max(1);
    let column = (width as usize / spans).max(1);
    let viewport = engine.viewport_height().max(1) as usize;
    let scale = |y: i32| y.max(0) as usize * rows / viewport;

    let mut cells: Vec<Vec<Option<(String, Style)>>> = vec![vec![None; spans]; rows];
    for (position, top, bottom) in app.host.visible_items() {
        let Some(item) = app.host.list().items().get(position) else {
            continue;
        };
        let tab = tab_for_view_type(app.host.tabs(), item.view_type);
        let style = Style::default().fg(tab.map_or(Color::DarkGray, |t| TAB_COLORS[t % TAB_COLORS.len()]));
        let span = engine.span_of(position).min(spans - 1);
        let start = scale(top);
        let end = scale(bottom).max(start + 1).min(rows);
        for (row, line) in cells.iter_mut().enumerate().take(end).skip(start) {
            let text = if row == start {
                let marker = if position == anchored { '▶' } else { ' ' };
                let title = item.title.as_deref().unwrap_or_default();
                format!("{marker} #{position} {title} [{}]", item.view_type)
            } else {
                "  │".to_string()
            };
            line[span] = Some((text, style));
        }
    }

    cells
        .into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|cell| match cell {
                    Some((text, style)) => Span::styled(pad(&text, column), style),
                    None => Span::raw(" ".repeat(column)),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// 桁数に合わせて切り詰め・空白埋めする
fn pad(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
