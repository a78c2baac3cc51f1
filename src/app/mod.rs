mod state;

use crossterm::event::KeyCode;

pub use state::{App, ConfirmPopup};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Generator,
    Saved,
    Help,
}
