//! Core of the office status board.
//!
//! Holds everything that is independent of drawing: the status catalog, the
//! per-session state machine, the clock and its ticker, the event bus that
//! feeds the main loop, and the logging subsystem.

pub mod bus;
pub mod catalog;
pub mod clock;
pub mod event;
pub mod logging;
pub mod session;
pub mod state;
pub mod ticker;
