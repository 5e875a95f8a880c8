use crate::catalog::StatusDefinition;
use crate::clock::Timestamp;

/// Which of the two screens the current state renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Selector,
    Display,
}

/// Ephemeral board state for one session.
///
/// Mutated only through the four operations below; nothing here outlives the
/// process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    current_status: Option<StatusDefinition>,
    last_updated: Option<Timestamp>,
    show_settings: bool,
    now: Timestamp,
}

impl AppState {
    pub fn new(started_at: Timestamp) -> Self {
        Self {
            current_status: None,
            last_updated: None,
            show_settings: false,
            now: started_at,
        }
    }

    pub fn current_status(&self) -> Option<&StatusDefinition> {
        self.current_status.as_ref()
    }

    pub fn last_updated(&self) -> Option<Timestamp> {
        self.last_updated
    }

    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Make `status` current as of `at` and close the selector.
    pub fn select_status(&mut self, status: StatusDefinition, at: Timestamp) {
        self.current_status = Some(status);
        self.last_updated = Some(at);
        self.show_settings = false;
    }

    pub fn clear_status(&mut self) {
        self.current_status = None;
        self.last_updated = None;
        self.show_settings = false;
    }

    /// Force the selector open. Leaves the current status untouched.
    pub fn open_settings(&mut self) {
        self.show_settings = true;
    }

    pub fn tick(&mut self, now: Timestamp) {
        self.now = now;
    }

    pub fn view_mode(&self) -> ViewMode {
        if self.show_settings || self.current_status.is_none() {
            ViewMode::Selector
        } else {
            ViewMode::Display
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::{Duration, Local, TimeZone};

    fn t0() -> Timestamp {
        Local.with_ymd_and_hms(2025, 1, 7, 15, 47, 0).unwrap()
    }

    fn lunch() -> StatusDefinition {
        Catalog::builtin().by_id("lunch").unwrap().clone()
    }

    #[test]
    fn fresh_state_shows_selector() {
        let state = AppState::new(t0());
        assert!(state.current_status().is_none());
        assert!(state.last_updated().is_none());
        assert!(!state.show_settings());
        assert_eq!(state.now(), t0());
        assert_eq!(state.view_mode(), ViewMode::Selector);
    }

    #[test]
    fn select_sets_status_and_timestamp_for_every_entry() {
        let catalog = Catalog::builtin();
        for (i, status) in catalog.iter().enumerate() {
            let mut state = AppState::new(t0());
            state.open_settings();
            let at = t0() + Duration::minutes(i as i64);
            state.select_status(status.clone(), at);
            assert_eq!(state.current_status(), Some(status));
            assert_eq!(state.last_updated(), Some(at));
            assert!(!state.show_settings());
        }
    }

    #[test]
    fn clear_resets_regardless_of_prior_state() {
        let mut state = AppState::new(t0());
        state.select_status(lunch(), t0());
        state.open_settings();
        state.clear_status();
        assert!(state.current_status().is_none());
        assert!(state.last_updated().is_none());
        assert!(!state.show_settings());

        let mut fresh = AppState::new(t0());
        fresh.clear_status();
        assert_eq!(fresh, AppState::new(t0()));
    }

    #[test]
    fn clear_twice_equals_clear_once() {
        let mut once = AppState::new(t0());
        once.select_status(lunch(), t0());
        once.clear_status();

        let mut twice = once.clone();
        twice.clear_status();
        assert_eq!(once, twice);
    }

    #[test]
    fn open_settings_only_touches_flag() {
        let mut state = AppState::new(t0());
        state.select_status(lunch(), t0());
        let before = state.clone();
        state.open_settings();
        assert_eq!(state.current_status(), before.current_status());
        assert_eq!(state.last_updated(), before.last_updated());
        assert!(state.show_settings());

        let mut empty = AppState::new(t0());
        empty.open_settings();
        assert!(empty.current_status().is_none());
        assert!(empty.last_updated().is_none());
    }

    #[test]
    fn tick_only_moves_now() {
        let mut state = AppState::new(t0());
        state.select_status(lunch(), t0());
        let later = t0() + Duration::seconds(1);
        state.tick(later);
        assert_eq!(state.now(), later);
        assert_eq!(state.last_updated(), Some(t0()));
        assert_eq!(state.current_status(), Some(&lunch()));
        assert!(!state.show_settings());
    }

    #[test]
    fn view_mode_for_all_four_combinations() {
        let mut none_closed = AppState::new(t0());
        assert_eq!(none_closed.view_mode(), ViewMode::Selector);

        none_closed.open_settings();
        assert_eq!(none_closed.view_mode(), ViewMode::Selector);

        let mut some_closed = AppState::new(t0());
        some_closed.select_status(lunch(), t0());
        assert_eq!(some_closed.view_mode(), ViewMode::Display);

        some_closed.open_settings();
        assert_eq!(some_closed.view_mode(), ViewMode::Selector);
    }

    #[test]
    fn latest_selection_wins() {
        let catalog = Catalog::builtin();
        let a = catalog.by_id("lunch").unwrap().clone();
        let b = catalog.by_id("meeting").unwrap().clone();
        let at = t0() + Duration::minutes(5);

        let mut twice = AppState::new(t0());
        twice.select_status(a.clone(), t0());
        assert_eq!(twice.current_status(), Some(&a));
        twice.select_status(b.clone(), at);

        let mut once = AppState::new(t0());
        once.select_status(b, at);

        assert_eq!(twice, once);
    }

    #[test]
    fn last_updated_tracks_current_status() {
        let mut state = AppState::new(t0());
        let check = |s: &AppState| {
            assert_eq!(s.current_status().is_some(), s.last_updated().is_some());
        };
        check(&state);
        state.select_status(lunch(), t0());
        check(&state);
        state.open_settings();
        check(&state);
        state.tick(t0() + Duration::seconds(1));
        check(&state);
        state.clear_status();
        check(&state);
    }
}
