use std::sync::Arc;

use crate::catalog::{Catalog, StatusDefinition};
use crate::clock::{Clock, Timestamp};
use crate::state::{AppState, ViewMode};

/// A request to change the board, produced by input handling or the ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the catalog entry at this position.
    Select(usize),
    /// Select the catalog entry with this id.
    SelectId(String),
    Clear,
    OpenSettings,
    Tick(Timestamp),
}

/// One running board: the catalog, the state, and the clock that stamps
/// selections.
pub struct Session {
    catalog: Catalog,
    state: AppState,
    clock: Arc<dyn Clock>,
}

impl Session {
    pub fn new(catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        let state = AppState::new(clock.now());
        Self {
            catalog,
            state,
            clock,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    /// Apply an action. Returns `true` if it named something to act on;
    /// selections of unknown entries are ignored.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Select(index) => match self.catalog.get(index) {
                Some(status) => {
                    let status = status.clone();
                    self.select(status);
                    true
                }
                None => {
                    tracing::debug!(index, "ignoring selection outside catalog");
                    false
                }
            },
            Action::SelectId(id) => match self.catalog.by_id(&id) {
                Some(status) => {
                    let status = status.clone();
                    self.select(status);
                    true
                }
                None => {
                    tracing::debug!(id = %id, "ignoring selection of unknown status");
                    false
                }
            },
            Action::Clear => {
                self.state.clear_status();
                tracing::info!("status cleared");
                true
            }
            Action::OpenSettings => {
                self.state.open_settings();
                tracing::info!("status selector opened");
                true
            }
            Action::Tick(now) => {
                self.state.tick(now);
                true
            }
        }
    }

    fn select(&mut self, status: StatusDefinition) {
        let at = self.clock.now();
        tracing::info!(id = %status.id, label = %status.label, "status selected");
        self.state.select_status(status, at);
    }
}
