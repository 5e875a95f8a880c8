use crate::clock::Timestamp;

#[derive(Debug, Clone)]
pub enum Event {
    Tick { now: Timestamp },
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize { cols: u16, rows: u16 },
}
