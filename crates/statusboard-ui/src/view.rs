//! Pure composition of the screen from session state.
//!
//! [`compose`] decides which of the two screens to show and resolves every
//! string it needs. Drawing happens elsewhere, so the decision rule can be
//! tested without a terminal.

use statusboard_core::catalog::{Catalog, Icon, StatusDefinition};
use statusboard_core::state::{AppState, ViewMode};

use crate::format::ClockFormat;

pub const CLEAR_LABEL: &str = "Clear Status";
pub const DISPLAY_HINT: &str = "Click anywhere on the status or the ⚙ icon to change status";
pub const DISPLAY_HINT_ASCII: &str = "Click anywhere on the status or the [*] icon to change status";

/// Static text and glyph choices around the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub title: String,
    pub subtitle: String,
    /// Use ASCII stand-ins instead of pictographs.
    pub ascii_icons: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            title: "Office Status Board".to_string(),
            subtitle: "Select your current status to display".to_string(),
            ascii_icons: false,
        }
    }
}

impl Chrome {
    pub fn icon(&self, icon: Icon) -> &'static str {
        if self.ascii_icons {
            icon.ascii()
        } else {
            icon.glyph()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorEntry<'a> {
    pub index: usize,
    /// Number key that selects this entry, for the first nine.
    pub key: Option<char>,
    pub icon: &'static str,
    pub status: &'a StatusDefinition,
    /// This entry is the status currently on display.
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorView<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub entries: Vec<SelectorEntry<'a>>,
    /// Offer the clear action; only when a status is set.
    pub show_clear: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayView<'a> {
    pub status: &'a StatusDefinition,
    pub icon: &'static str,
    pub gear: &'static str,
    pub clock_icon: &'static str,
    pub date_line: String,
    pub time_line: String,
    pub updated_line: Option<String>,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Selector(SelectorView<'a>),
    Display(DisplayView<'a>),
}

impl View<'_> {
    pub fn mode(&self) -> ViewMode {
        match self {
            View::Selector(_) => ViewMode::Selector,
            View::Display(_) => ViewMode::Display,
        }
    }
}

/// Build the screen for `state`.
///
/// Selector when settings are open or nothing is selected, display otherwise.
pub fn compose<'a>(
    state: &'a AppState,
    catalog: &'a Catalog,
    chrome: &'a Chrome,
    clock: &ClockFormat,
) -> View<'a> {
    match (state.view_mode(), state.current_status()) {
        (ViewMode::Display, Some(status)) => View::Display(DisplayView {
            status,
            icon: chrome.icon(status.icon),
            gear: chrome.icon(Icon::Settings),
            clock_icon: chrome.icon(Icon::Clock),
            date_line: clock.date(&state.now()),
            time_line: clock.time(&state.now()),
            updated_line: state.last_updated().map(|at| clock.updated_line(&at)),
            hint: if chrome.ascii_icons {
                DISPLAY_HINT_ASCII
            } else {
                DISPLAY_HINT
            },
        }),
        _ => {
            let current_id = state.current_status().map(|s| s.id.as_str());
            let entries = catalog
                .iter()
                .enumerate()
                .map(|(index, status)| SelectorEntry {
                    index,
                    key: char::from_digit(index as u32 + 1, 10).filter(|_| index < 9),
                    icon: chrome.icon(status.icon),
                    status,
                    current: current_id == Some(status.id.as_str()),
                })
                .collect();
            View::Selector(SelectorView {
                title: &chrome.title,
                subtitle: &chrome.subtitle,
                entries,
                show_clear: state.current_status().is_some(),
            })
        }
    }
}
