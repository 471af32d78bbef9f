//! Top-level application state: the draft, the summary form, and the
//! currently open popup.

use std::time::Duration;

use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mf_core::roll::SEQUENCE_LEN;
use mf_core::{CharacterDraft, ForgeConfig};

use crate::views::dice::DicePopup;
use crate::views::religion::BlessingPopup;
use crate::views::summary::{SummaryEvent, SummaryView};
use crate::views::{Popup, PopupEvent};

/// The popup currently covering the summary, if any.
pub enum ActivePopup {
    /// The dice roll popup.
    Dice(DicePopup),
    /// The blessing wizard popup.
    Blessing(BlessingPopup),
}

impl ActivePopup {
    /// Borrow the popup as a trait object.
    pub fn as_popup(&self) -> &dyn Popup {
        match self {
            Self::Dice(popup) => popup,
            Self::Blessing(popup) => popup,
        }
    }

    /// Mutably borrow the popup as a trait object.
    pub fn as_popup_mut(&mut self) -> &mut dyn Popup {
        match self {
            Self::Dice(popup) => popup,
            Self::Blessing(popup) => popup,
        }
    }
}

/// Main application state.
///
/// The app owns the character draft; popups run to completion or
/// cancellation and hand results back as [`PopupEvent`] values, never by
/// touching the draft themselves.
pub struct ForgeApp {
    /// The character being edited.
    pub draft: CharacterDraft,
    /// Cursor/editing state of the summary form.
    pub summary: SummaryView,
    /// The open popup, if any.
    pub popup: Option<ActivePopup>,
    /// Adjusted results of the last completed roll sequence, kept on the
    /// summary as a distribution hint. Never applied to stats directly.
    pub last_roll: Option<[i32; SEQUENCE_LEN]>,
    /// Whether to show the help overlay.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    config: ForgeConfig,
    /// Source of per-popup seeds, itself seeded from the config.
    rng: StdRng,
}

impl ForgeApp {
    /// Create a new app from a configuration.
    pub fn new(config: ForgeConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            draft: CharacterDraft::new(),
            summary: SummaryView::new(),
            popup: None,
            last_roll: None,
            show_help: false,
            should_quit: false,
            config,
            rng,
        }
    }

    /// Route a key press to the open popup or the summary form.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(popup) = &mut self.popup {
            let event = popup.as_popup_mut().handle_key(key);
            self.apply_popup_event(event);
            return;
        }

        match self.summary.handle_key(key, &mut self.draft) {
            SummaryEvent::OpenDice => self.open_dice(),
            SummaryEvent::OpenBlessing => {
                self.popup = Some(ActivePopup::Blessing(BlessingPopup::new()));
            }
            SummaryEvent::Quit => self.should_quit = true,
            SummaryEvent::None => {}
        }
    }

    /// Advance time-driven popup state. Called on every event-loop tick.
    pub fn on_tick(&mut self) {
        if let Some(popup) = &mut self.popup {
            let event = popup.as_popup_mut().on_tick();
            self.apply_popup_event(event);
        }
    }

    /// Status bar text for the current focus.
    pub fn status_hint(&self) -> &str {
        match &self.popup {
            Some(popup) => popup.as_popup().status_hint(),
            None => self.summary.status_hint(),
        }
    }

    /// Open the dice popup with a fresh session. Each open draws its own
    /// seed so re-opening does not replay the previous rolls.
    fn open_dice(&mut self) {
        let seed = self.rng.random();
        self.popup = Some(ActivePopup::Dice(DicePopup::new(
            seed,
            Duration::from_millis(self.config.spin_ms),
            Duration::from_millis(self.config.reveal_ms),
        )));
    }

    /// Apply a popup result to the draft and view state.
    fn apply_popup_event(&mut self, event: PopupEvent) {
        match event {
            PopupEvent::None => {}
            PopupEvent::Close => self.popup = None,
            PopupEvent::RollResults(results) => self.last_roll = Some(results),
            PopupEvent::BlessingChosen(blessing) => {
                self.draft.apply_blessing(blessing);
                self.popup = None;
            }
        }
    }
}
