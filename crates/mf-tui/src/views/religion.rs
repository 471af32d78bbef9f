//! Blessing popup: the two-step religion and deity wizard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use mf_core::religion::{self, RELIGIONS};
use mf_core::{BlessingWizard, WizardStep};

use super::{Popup, PopupEvent};
use crate::shared::centered_rect;

/// Religion cards per grid row.
const GRID_COLUMNS: usize = 4;

/// Modal popup wrapping the blessing wizard.
pub struct BlessingPopup {
    wizard: BlessingWizard,
    cursor: usize,
}

impl BlessingPopup {
    /// Create a popup at the religion-picking step.
    pub fn new() -> Self {
        Self {
            wizard: BlessingWizard::new(),
            cursor: 0,
        }
    }

    /// Number of entries navigable at the current step.
    fn cursor_len(&self) -> usize {
        match self.wizard.step() {
            WizardStep::ChoosingReligion => RELIGIONS.len(),
            WizardStep::ChoosingDeity => self
                .wizard
                .selected_religion()
                .map(|r| r.deities.len())
                .unwrap_or(0),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor as isize + delta;
        self.cursor = cursor.rem_euclid(len as isize) as usize;
    }

    fn handle_religion_key(&mut self, key: KeyEvent) -> PopupEvent {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
                self.move_cursor(1);
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
                self.move_cursor(-1);
            }
            KeyCode::Char(' ') => {
                self.wizard.select_religion(RELIGIONS[self.cursor].name);
            }
            KeyCode::Enter => {
                // No-op until a religion is tentatively selected.
                self.wizard.proceed();
                if self.wizard.step() == WizardStep::ChoosingDeity {
                    self.cursor = 0;
                }
            }
            KeyCode::Esc => {
                self.wizard.cancel();
                return PopupEvent::Close;
            }
            _ => {}
        }
        PopupEvent::None
    }

    fn handle_deity_key(&mut self, key: KeyEvent) -> PopupEvent {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Enter => {
                let deity = self
                    .wizard
                    .selected_religion()
                    .and_then(|r| r.deities.get(self.cursor))
                    .map(|d| d.name);
                if let Some(name) = deity
                    && let Some(blessing) = self.wizard.select_deity(name)
                {
                    return PopupEvent::BlessingChosen(blessing);
                }
            }
            KeyCode::Backspace => {
                self.wizard.back();
                self.cursor = 0;
            }
            KeyCode::Esc => {
                self.wizard.cancel();
                return PopupEvent::Close;
            }
            _ => {}
        }
        PopupEvent::None
    }
}

impl Default for BlessingPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl Popup for BlessingPopup {
    fn handle_key(&mut self, key: KeyEvent) -> PopupEvent {
        match self.wizard.step() {
            WizardStep::ChoosingReligion => self.handle_religion_key(key),
            WizardStep::ChoosingDeity => self.handle_deity_key(key),
        }
    }

    fn on_tick(&mut self) -> PopupEvent {
        PopupEvent::None
    }

    fn draw(&self, frame: &mut Frame) {
        let area = centered_rect(85, 80, frame.area());
        let block = Block::default()
            .title(" Religions & Blessings ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        match self.wizard.step() {
            WizardStep::ChoosingReligion => draw_religion_grid(frame, self, inner),
            WizardStep::ChoosingDeity => draw_deity_list(frame, self, inner),
        }
    }

    fn status_hint(&self) -> &str {
        match self.wizard.step() {
            WizardStep::ChoosingReligion => {
                if self.wizard.selected_religion().is_some() {
                    "j/k:move  Space:select  Enter:proceed  Esc:close"
                } else {
                    "j/k:move  Space:select  Esc:close"
                }
            }
            WizardStep::ChoosingDeity => "j/k:move  Enter:choose  Backspace:back  Esc:close",
        }
    }
}

/// Draw the grid of religion cards with the proceed prompt underneath.
fn draw_religion_grid(frame: &mut Frame, popup: &BlessingPopup, area: Rect) {
    let rows_needed = RELIGIONS.len().div_ceil(GRID_COLUMNS);
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(std::iter::repeat_n(Constraint::Min(6), rows_needed));
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let intro = Paragraph::new("Choose your divine path from the eight great religions")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(intro, rows[0]);

    for (row_index, chunk) in RELIGIONS.chunks(GRID_COLUMNS).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLUMNS as u32);
                GRID_COLUMNS
            ])
            .split(rows[row_index + 1]);

        for (col_index, religion) in chunk.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col_index;
            draw_religion_card(frame, popup, religion, index, columns[col_index]);
        }
    }

    if popup.wizard.selected_religion().is_some() {
        let prompt = Paragraph::new("Proceed to Pantheon (Enter)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).bold());
        frame.render_widget(prompt, rows[rows.len() - 1]);
    }
}

/// Draw one religion card.
fn draw_religion_card(
    frame: &mut Frame,
    popup: &BlessingPopup,
    religion: &religion::Religion,
    index: usize,
    area: Rect,
) {
    let selected = popup
        .wizard
        .selected_religion()
        .is_some_and(|r| r.name == religion.name);
    let under_cursor = popup.cursor == index;

    let border_style = if under_cursor {
        Style::default().fg(Color::Yellow).bold()
    } else if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let name_style = if selected {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    let card = Paragraph::new(vec![
        Line::from(religion.symbol),
        Line::from(Span::styled(religion.name, name_style)),
        Line::from(Span::styled(
            religion.subtitle,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            religion.emblem,
            Style::default().fg(Color::Magenta),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(card, area);
}

/// Draw the deity list for the chosen religion.
fn draw_deity_list(frame: &mut Frame, popup: &BlessingPopup, area: Rect) {
    let Some(religion) = popup.wizard.selected_religion() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} Pantheon", religion.name),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(Span::styled(
            religion.subtitle,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = religion
        .deities
        .iter()
        .map(|deity| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(deity.name, Style::default().fg(Color::White).bold()),
                    Span::raw("  "),
                    Span::styled(deity.domain, Style::default().fg(Color::Cyan)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", deity.blessing),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("\u{25b6} ");

    let mut state = ListState::default();
    state.select(Some(popup.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
