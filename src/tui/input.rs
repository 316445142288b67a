//! デモ TUI の入力処理

use super::state::DemoApp;
use crossterm::event::KeyCode;
use tabsync::host::Action;
use tabsync::layout::LayoutEngine;
use tabsync::widget::TabStrip;

/// ↑/↓ 1 回分のドラッグ量
pub(super) const DRAG_STEP: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Input {
    Apply(Action),
    Quit,
}

impl<L: LayoutEngine> DemoApp<L> {
    /// キーに対応する操作（割り当てがなければ None）
    pub(super) fn input_for(&self, code: KeyCode) -> Option<Input> {
        let viewport = self.host.list().layout_engine().viewport_height();
        let tab_count = self.host.tabs().tab_count();
        let current = self.host.mediator().selected_tab_position().unwrap_or(0);

        let action = match code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Input::Quit),
            KeyCode::Up => Action::Drag(-DRAG_STEP),
            KeyCode::Down => Action::Drag(DRAG_STEP),
            KeyCode::PageUp => Action::Fling(-viewport),
            KeyCode::PageDown => Action::Fling(viewport),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index >= tab_count {
                    return None;
                }
                Action::Tap(index)
            }
            KeyCode::Left if current > 0 => Action::Tap(current - 1),
            KeyCode::Right if current + 1 < tab_count => Action::Tap(current + 1),
            KeyCode::Char('r') => Action::Append(self.host.list().items().last()?.view_type),
            KeyCode::Char('d') if self.host.mediator().is_attached() => Action::Detach,
            KeyCode::Char('d') => Action::Attach,
            _ => return None,
        };
        Some(Input::Apply(action))
    }

    pub(super) fn handle_key(&mut self, code: KeyCode) {
        match self.input_for(code) {
            Some(Input::Quit) => self.should_quit = true,
            Some(Input::Apply(action)) => self.apply(action),
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
