//! TUI rendering layer for the status board.
//!
//! [`view::compose`] turns session state into a [`view::View`]; [`draw`] lays
//! it out and paints it with [`ratatui`], returning the geometry so the app
//! can hit-test mouse clicks. This crate owns the visual presentation while
//! [`statusboard_core`] owns the state.

pub mod digits;
pub mod display;
pub mod format;
pub mod layout;
pub mod palette;
pub mod selector;
pub mod view;

use ratatui::Frame;

use crate::layout::ScreenLayout;
use crate::view::View;

/// Lay out and draw `view` over the whole frame.
///
/// `highlight` is the keyboard cursor in the selector; ignored on the
/// display screen.
pub fn draw(f: &mut Frame, view: &View<'_>, highlight: Option<usize>) -> ScreenLayout {
    let screen = ScreenLayout::compute(f.area(), view);
    match (view, &screen) {
        (View::Selector(v), ScreenLayout::Selector(l)) => selector::render_selector(f, l, v, highlight),
        (View::Display(v), ScreenLayout::Display(l)) => display::render_display(f, l, v),
        // compute() always pairs layouts with their view
        _ => {}
    }
    screen
}
