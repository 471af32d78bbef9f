//! Dice roll popup: the animated "Divine vs Chaotic" six-roll sequence.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use mf_core::roll::RollSequencer;

use super::{Popup, PopupEvent};
use crate::shared::centered_rect;

/// Modal popup wrapping the roll sequencer and its reveal animation.
///
/// The popup owns the whole roll session; closing it (at any point, even
/// mid-sequence) drops the session, so an abandoned sequence can never
/// report results.
pub struct DicePopup {
    seq: RollSequencer,
    rng: StdRng,
    spin: Duration,
    reveal: Duration,
    /// Deadline for the next draw while a sequence is running.
    next_draw: Option<Instant>,
}

impl DicePopup {
    /// Create a popup with its own seeded RNG and animation delays.
    pub fn new(seed: u64, spin: Duration, reveal: Duration) -> Self {
        Self {
            seq: RollSequencer::new(),
            rng: StdRng::seed_from_u64(seed),
            spin,
            reveal,
            next_draw: None,
        }
    }

    /// Begin a sequence (or a re-roll). Ignored while one is running.
    fn start(&mut self) {
        if self.seq.start().is_ok() {
            self.next_draw = Some(Instant::now() + self.spin);
        }
    }

    /// Perform one animation step: draw the next die and schedule the one
    /// after it, or finish the sequence and report the results.
    fn step(&mut self) -> PopupEvent {
        if self.seq.roll_next(&mut self.rng).is_none() {
            self.next_draw = None;
            return PopupEvent::None;
        }
        if self.seq.is_complete() {
            self.next_draw = None;
            match self.seq.take_results() {
                Some(results) => PopupEvent::RollResults(results),
                None => PopupEvent::None,
            }
        } else {
            self.next_draw = Some(Instant::now() + self.reveal + self.spin);
            PopupEvent::None
        }
    }
}

impl Popup for DicePopup {
    fn handle_key(&mut self, key: KeyEvent) -> PopupEvent {
        match key.code {
            KeyCode::Esc => PopupEvent::Close,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.start();
                PopupEvent::None
            }
            KeyCode::Char('x') => {
                // Rejected mid-roll; the guard lives in the sequencer.
                self.seq.reset().ok();
                PopupEvent::None
            }
            _ => PopupEvent::None,
        }
    }

    fn on_tick(&mut self) -> PopupEvent {
        if let Some(deadline) = self.next_draw
            && Instant::now() >= deadline
        {
            return self.step();
        }
        PopupEvent::None
    }

    fn draw(&self, frame: &mut Frame) {
        let area = centered_rect(80, 70, frame.area());
        let block = Block::default()
            .title(" Divine vs Chaotic Dice Roll ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(50),
                Constraint::Percentage(25),
            ])
            .split(inner);

        draw_blessing_panel(frame, columns[0]);
        draw_dice_column(frame, self, columns[1]);
        draw_curse_panel(frame, columns[2]);
    }

    fn status_hint(&self) -> &str {
        if self.seq.is_rolling() {
            "rolling...  Esc:close"
        } else if self.seq.is_complete() {
            "Enter/Space:roll again  x:clear  Esc:close"
        } else {
            "Enter/Space:roll  Esc:close"
        }
    }
}

/// Left panel: Aella's blessing flavor.
fn draw_blessing_panel(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Aella's Blessing",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Divine fortune guides your rolls",
            Style::default().fg(Color::Cyan),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Right panel: Vexoth's curse flavor with the offset curve.
fn draw_curse_panel(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Vexoth's Curse",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Chaos diminishes your fortune",
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            "(-10, -8, -6, -4, -2, 0)",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Center column: current roll, the roll list, and the cursed results.
fn draw_dice_column(frame: &mut Frame, popup: &DicePopup, area: Rect) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(""));
    match popup.seq.current_roll() {
        Some(roll) => {
            let style = if popup.seq.is_rolling() {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White).bold()
            };
            lines.push(Line::from(Span::styled(format!("\u{2684} {roll}"), style)));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "\u{2684} Press Enter to roll!",
                Style::default().fg(Color::Green),
            )));
        }
    }
    lines.push(Line::from(""));

    if !popup.seq.raw_rolls().is_empty() {
        lines.push(Line::from(Span::styled(
            "Rolls:",
            Style::default().fg(Color::DarkGray),
        )));
        let roll_spans: Vec<Span<'static>> = popup
            .seq
            .raw_rolls()
            .iter()
            .map(|roll| {
                Span::styled(
                    format!(" [{roll}] "),
                    Style::default().fg(Color::Yellow).bold(),
                )
            })
            .collect();
        lines.push(Line::from(roll_spans));
        lines.push(Line::from(""));
    }

    if let Some(adjusted) = popup.seq.adjusted() {
        lines.push(Line::from(Span::styled(
            "After Vexoth's Curse:",
            Style::default().fg(Color::Magenta).bold(),
        )));
        let result_spans: Vec<Span<'static>> = adjusted
            .iter()
            .map(|value| {
                let (text, color) = if *value >= 0 {
                    (format!(" [+{value}] "), Color::Cyan)
                } else {
                    (format!(" [{value}] "), Color::Magenta)
                };
                Span::styled(text, Style::default().fg(color).bold())
            })
            .collect();
        lines.push(Line::from(result_spans));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Distribute these values freely to STR, CON, DEX, INT, WIS, CHA",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn instant_popup() -> DicePopup {
        DicePopup::new(7, Duration::ZERO, Duration::ZERO)
    }

    #[test]
    fn full_sequence_reports_once() {
        let mut popup = instant_popup();
        assert_eq!(popup.handle_key(key(KeyCode::Enter)), PopupEvent::None);

        let mut reported = None;
        for _ in 0..6 {
            if let PopupEvent::RollResults(results) = popup.on_tick() {
                assert!(reported.is_none());
                reported = Some(results);
            }
        }
        let results = reported.expect("sixth tick reports the results");
        for value in results {
            assert!((-9..=20).contains(&value));
        }
        // Nothing further is reported after completion.
        assert_eq!(popup.on_tick(), PopupEvent::None);
    }

    #[test]
    fn start_is_ignored_while_rolling() {
        let mut popup = instant_popup();
        popup.handle_key(key(KeyCode::Enter));
        popup.on_tick();
        popup.on_tick();
        assert_eq!(popup.seq.raw_rolls().len(), 2);

        // A second start mid-sequence must not restart the run.
        popup.handle_key(key(KeyCode::Enter));
        assert_eq!(popup.seq.raw_rolls().len(), 2);
        popup.on_tick();
        assert_eq!(popup.seq.raw_rolls().len(), 3);
    }

    #[test]
    fn clear_is_ignored_mid_roll() {
        let mut popup = instant_popup();
        popup.handle_key(key(KeyCode::Enter));
        popup.on_tick();
        popup.handle_key(key(KeyCode::Char('x')));
        assert_eq!(popup.seq.raw_rolls().len(), 1);
    }

    #[test]
    fn clear_after_completion_resets() {
        let mut popup = instant_popup();
        popup.handle_key(key(KeyCode::Enter));
        for _ in 0..6 {
            popup.on_tick();
        }
        popup.handle_key(key(KeyCode::Char('x')));
        assert!(popup.seq.raw_rolls().is_empty());
        assert!(popup.seq.adjusted().is_none());
    }

    #[test]
    fn escape_closes_at_any_point() {
        let mut popup = instant_popup();
        popup.handle_key(key(KeyCode::Enter));
        popup.on_tick();
        assert_eq!(popup.handle_key(key(KeyCode::Esc)), PopupEvent::Close);
    }

    #[test]
    fn reroll_reports_again() {
        let mut popup = instant_popup();
        popup.handle_key(key(KeyCode::Enter));
        let mut first = None;
        for _ in 0..6 {
            if let PopupEvent::RollResults(results) = popup.on_tick() {
                first = Some(results);
            }
        }
        assert!(first.is_some());

        popup.handle_key(key(KeyCode::Enter));
        let mut second = None;
        for _ in 0..6 {
            if let PopupEvent::RollResults(results) = popup.on_tick() {
                second = Some(results);
            }
        }
        assert!(second.is_some());
    }
}
