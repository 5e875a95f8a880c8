//! Mapping from terminal input to session actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use statusboard_core::session::Action;
use statusboard_core::state::ViewMode;
use statusboard_ui::layout::{HitTarget, ScreenLayout};

/// What the main loop should do with an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    Quit,
}

/// Keyboard highlight over the selector grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
    pub len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    fn left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    fn right(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    fn up(&mut self, columns: usize) {
        if self.index >= columns {
            self.index -= columns;
        }
    }

    fn down(&mut self, columns: usize) {
        if self.index + columns < self.len {
            self.index += columns;
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a key press for the current screen.
///
/// `columns` is the grid width last drawn, so up/down move by whole rows.
pub fn key_command(
    key: KeyEvent,
    mode: ViewMode,
    cursor: &mut Cursor,
    columns: usize,
    has_status: bool,
) -> Option<Command> {
    if is_quit(&key) {
        return Some(Command::Quit);
    }

    match mode {
        ViewMode::Display => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => {
                Some(Command::Apply(Action::OpenSettings))
            }
            _ => None,
        },
        ViewMode::Selector => {
            let columns = columns.max(1);
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => cursor.left(),
                KeyCode::Right | KeyCode::Char('l') => cursor.right(),
                KeyCode::Up | KeyCode::Char('k') => cursor.up(columns),
                KeyCode::Down | KeyCode::Char('j') => cursor.down(columns),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Some(Command::Apply(Action::Select(cursor.index)));
                }
                KeyCode::Char('c') if has_status => {
                    return Some(Command::Apply(Action::Clear));
                }
                KeyCode::Char(d @ '1'..='9') => {
                    let index = d as usize - '1' as usize;
                    if index < cursor.len {
                        cursor.set(index);
                        return Some(Command::Apply(Action::Select(index)));
                    }
                }
                _ => {}
            }
            None
        }
    }
}

/// Translate a left click using the geometry of the last frame.
pub fn mouse_action(mouse: MouseEvent, screen: &ScreenLayout) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match screen.hit(mouse.column, mouse.row)? {
        HitTarget::Status(index) => Some(Action::Select(index)),
        HitTarget::Clear => Some(Action::Clear),
        HitTarget::Settings => Some(Action::OpenSettings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use statusboard_ui::layout::selector_layout;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys_work_everywhere() {
        let mut cursor = Cursor::new(8);
        for mode in [ViewMode::Selector, ViewMode::Display] {
            assert_eq!(
                key_command(key(KeyCode::Char('q')), mode, &mut cursor, 4, false),
                Some(Command::Quit)
            );
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(
                key_command(ctrl_c, mode, &mut cursor, 4, true),
                Some(Command::Quit)
            );
        }
    }

    #[test]
    fn display_keys_open_settings() {
        let mut cursor = Cursor::new(8);
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('s')] {
            assert_eq!(
                key_command(key(code), ViewMode::Display, &mut cursor, 4, true),
                Some(Command::Apply(Action::OpenSettings))
            );
        }
        assert_eq!(
            key_command(key(KeyCode::Char('x')), ViewMode::Display, &mut cursor, 4, true),
            None
        );
    }

    #[test]
    fn arrows_move_over_grid() {
        let mut cursor = Cursor::new(8);
        let mut press = |code| key_command(key(code), ViewMode::Selector, &mut cursor, 4, false);
        assert_eq!(press(KeyCode::Down), None);
        assert_eq!(press(KeyCode::Right), None);
        assert_eq!(press(KeyCode::Enter), Some(Command::Apply(Action::Select(5))));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut cursor = Cursor::new(8);
        for code in [KeyCode::Up, KeyCode::Left] {
            key_command(key(code), ViewMode::Selector, &mut cursor, 4, false);
        }
        assert_eq!(cursor.index, 0);
        for _ in 0..10 {
            key_command(key(KeyCode::Right), ViewMode::Selector, &mut cursor, 4, false);
            key_command(key(KeyCode::Down), ViewMode::Selector, &mut cursor, 4, false);
        }
        assert_eq!(cursor.index, 7);
    }

    #[test]
    fn number_keys_select_directly() {
        let mut cursor = Cursor::new(8);
        assert_eq!(
            key_command(key(KeyCode::Char('3')), ViewMode::Selector, &mut cursor, 4, false),
            Some(Command::Apply(Action::Select(2)))
        );
        assert_eq!(cursor.index, 2);
        assert_eq!(
            key_command(key(KeyCode::Char('9')), ViewMode::Selector, &mut cursor, 4, false),
            None
        );
    }

    #[test]
    fn clear_key_needs_a_status() {
        let mut cursor = Cursor::new(8);
        assert_eq!(
            key_command(key(KeyCode::Char('c')), ViewMode::Selector, &mut cursor, 4, false),
            None
        );
        assert_eq!(
            key_command(key(KeyCode::Char('c')), ViewMode::Selector, &mut cursor, 4, true),
            Some(Command::Apply(Action::Clear))
        );
    }

    #[test]
    fn left_click_on_tile_selects() {
        let layout = selector_layout(Rect::new(0, 0, 120, 40), 8, true);
        let tile = layout.tiles[2];
        let clear = layout.clear.unwrap();
        let screen = ScreenLayout::Selector(layout);

        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            mouse_action(click(down, tile.x + 1, tile.y + 1), &screen),
            Some(Action::Select(2))
        );
        assert_eq!(
            mouse_action(click(down, clear.x + 1, clear.y + 1), &screen),
            Some(Action::Clear)
        );
        assert_eq!(mouse_action(click(down, 0, 0), &screen), None);
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let layout = selector_layout(Rect::new(0, 0, 120, 40), 8, false);
        let tile = layout.tiles[0];
        let screen = ScreenLayout::Selector(layout);
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
        ] {
            assert_eq!(mouse_action(click(kind, tile.x + 1, tile.y + 1), &screen), None);
        }
    }
}
