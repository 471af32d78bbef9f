//! Views: the summary form and the two modal popups.

pub mod dice;
pub mod religion;
pub mod summary;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use mf_core::ChosenBlessing;
use mf_core::roll::SEQUENCE_LEN;

/// Result of handing an event to a popup. This is the one-shot callback
/// contract between the dialogs and the summary view, rendered as a
/// return value instead of a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    /// Nothing to report.
    None,
    /// The popup wants to close without a result.
    Close,
    /// A completed roll sequence, after offsets. Emitted exactly once per
    /// sequence; the popup stays open so the values can be read.
    RollResults([i32; SEQUENCE_LEN]),
    /// The wizard emitted a blessing and the popup closes.
    BlessingChosen(ChosenBlessing),
}

/// Trait implemented by the modal popups.
pub trait Popup {
    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> PopupEvent;

    /// Advance time-driven state. Called on every tick of the event loop,
    /// so a close is honored between any two animation steps.
    fn on_tick(&mut self) -> PopupEvent;

    /// Draw the popup overlay on top of the summary.
    fn draw(&self, frame: &mut Frame);

    /// Context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}
