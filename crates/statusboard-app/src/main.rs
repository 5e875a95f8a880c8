mod input;

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use statusboard_config::BoardConfig;
use statusboard_core::{
    bus::EventBus,
    catalog::Catalog,
    clock::{Clock, SystemClock},
    event::Event,
    logging,
    session::{Action, Session},
    ticker::{ClockTicker, CLOCK_PERIOD},
};
use statusboard_ui::{
    format::ClockFormat,
    layout::ScreenLayout,
    palette,
    view::{compose, Chrome},
};

use crate::input::{Command, Cursor};

type Term = Terminal<CrosstermBackend<Stdout>>;

struct App {
    session: Session,
    chrome: Chrome,
    clock_format: ClockFormat,
    bus: EventBus,
    cursor: Cursor,
    /// Geometry of the last frame, for mouse hit-testing.
    screen: Option<ScreenLayout>,
    ticker_alive: bool,
}

impl App {
    fn new(session: Session, chrome: Chrome, clock_format: ClockFormat) -> Self {
        let cursor = Cursor::new(session.catalog().len());
        Self {
            session,
            chrome,
            clock_format,
            bus: EventBus::new(),
            cursor,
            screen: None,
            ticker_alive: true,
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let view = compose(
            self.session.state(),
            self.session.catalog(),
            &self.chrome,
            &self.clock_format,
        );
        self.screen = Some(statusboard_ui::draw(f, &view, Some(self.cursor.index)));
    }

    fn columns(&self) -> usize {
        match &self.screen {
            Some(ScreenLayout::Selector(layout)) => usize::from(layout.columns),
            _ => 1,
        }
    }

    /// Returns `Some(Command::Quit)` when the loop should end.
    fn handle(&mut self, event: Event) -> Option<Command> {
        let command = match event {
            Event::Tick { now } => Some(Command::Apply(Action::Tick(now))),
            Event::Key(key) => {
                let has_status = self.session.state().current_status().is_some();
                let columns = self.columns();
                input::key_command(
                    key,
                    self.session.view_mode(),
                    &mut self.cursor,
                    columns,
                    has_status,
                )
            }
            Event::Mouse(mouse) => self
                .screen
                .as_ref()
                .and_then(|screen| input::mouse_action(mouse, screen))
                .map(Command::Apply),
            Event::Resize { cols, rows } => {
                tracing::debug!(cols, rows, "terminal resized");
                None
            }
        };

        match command? {
            Command::Quit => Some(Command::Quit),
            Command::Apply(action) => {
                let opens_selector = action == Action::OpenSettings;
                self.session.apply(action);
                if opens_selector {
                    self.focus_current();
                }
                None
            }
        }
    }

    /// Put the keyboard cursor on the status being shown.
    fn focus_current(&mut self) {
        let current = self.session.state().current_status().map(|s| s.id.clone());
        if let Some(index) = current.and_then(|id| self.session.catalog().position(&id)) {
            self.cursor.set(index);
        }
    }
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Owns the terminal while the board is up and hands it back on drop,
/// including when the loop fails or panics.
struct TerminalSession {
    terminal: Term,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        let terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
                return Err(err.context("failed to prepare terminal"));
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut self.terminal) {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

fn warn_unknown_colors(catalog: &Catalog) {
    for status in catalog.iter() {
        let style = &status.style;
        let tokens = [
            style.background.as_str(),
            style.text.as_str(),
            style.accent.as_str(),
            style.shadow.as_str(),
        ];
        for token in palette::unknown_tokens(tokens) {
            tracing::warn!(id = %status.id, token, "unknown color token; using terminal default");
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    tracing::info!("statusboard starting up");

    let config = BoardConfig::load().context("failed to load board config")?;
    let catalog = config.catalog()?;
    warn_unknown_colors(&catalog);
    let clock_format = ClockFormat::new(config.locale()?, config.pad_hour);
    let chrome = Chrome {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        ascii_icons: config.ascii_icons,
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let session = Session::new(catalog, clock);
    let mut app = App::new(session, chrome, clock_format);

    let (tx, rx) = mpsc::channel();
    let mut ticker = ClockTicker::spawn(CLOCK_PERIOD, app.session.clock(), tx)?;

    let res = match TerminalSession::enter() {
        Ok(mut term) => run(&mut term.terminal, &mut app, &rx),
        Err(err) => Err(err),
    };
    ticker.stop();

    match &res {
        Ok(()) => tracing::info!("statusboard shut down"),
        Err(err) => tracing::error!(error = %err, "statusboard exited with error"),
    }
    res
}

fn run(terminal: &mut Term, app: &mut App, ticks: &Receiver<Event>) -> Result<()> {
    let poll_timeout = Duration::from_millis(50);

    loop {
        // ── Render ──
        terminal.draw(|f| app.draw(f))?;

        // ── Poll → Publish ──
        if event::poll(poll_timeout)? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    app.bus.publish(Event::Key(key));
                }
                CEvent::Mouse(mouse) => app.bus.publish(Event::Mouse(mouse)),
                CEvent::Resize(cols, rows) => app.bus.publish(Event::Resize { cols, rows }),
                _ => {}
            }
        }
        if !app.bus.collect_from(ticks) && app.ticker_alive {
            app.ticker_alive = false;
            tracing::warn!("clock ticker stopped; clock will no longer advance");
        }

        // ── Drain → Apply ──
        for ev in app.bus.drain() {
            if let Some(Command::Quit) = app.handle(ev) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use statusboard_core::clock::{ManualClock, Timestamp};
    use statusboard_core::state::ViewMode;

    fn t0() -> Timestamp {
        Local.with_ymd_and_hms(2025, 1, 7, 15, 47, 0).unwrap()
    }

    fn app() -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(t0()));
        let session = Session::new(Catalog::builtin(), clock.clone());
        (
            App::new(session, Chrome::default(), ClockFormat::default()),
            clock,
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn frame(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    #[test]
    fn keyboard_select_then_reopen() {
        let (mut app, _) = app();
        frame(&mut app);
        assert!(app.handle(key(KeyCode::Right)).is_none());
        assert!(app.handle(key(KeyCode::Enter)).is_none());
        assert_eq!(app.session.view_mode(), ViewMode::Display);
        assert_eq!(app.session.state().current_status().unwrap().id, "lunch");

        app.cursor.set(0);
        frame(&mut app);
        app.handle(key(KeyCode::Char('s')));
        assert_eq!(app.session.view_mode(), ViewMode::Selector);
        assert_eq!(app.cursor.index, 1);
    }

    #[test]
    fn ticks_flow_into_state() {
        let (mut app, clock) = app();
        let later = clock.advance(chrono::Duration::seconds(5));
        app.bus.publish(Event::Tick { now: later });
        for ev in app.bus.drain() {
            app.handle(ev);
        }
        assert_eq!(app.session.state().now(), later);
    }

    #[test]
    fn quit_ends_loop() {
        let (mut app, _) = app();
        assert_eq!(app.handle(key(KeyCode::Char('q'))), Some(Command::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.handle(ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn mouse_before_first_frame_is_ignored() {
        let (mut app, _) = app();
        let click = crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        assert!(app.handle(Event::Mouse(click)).is_none());
        assert_eq!(app.session.view_mode(), ViewMode::Selector);
    }
}
