//! Summary view: the character sheet form.
//!
//! Owns only cursor and editing state; the draft itself is owned by the
//! app and passed in by the caller for both input handling and drawing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mf_core::roll::SEQUENCE_LEN;
use mf_core::stats::Ability;
use mf_core::{CharacterDraft, pantheon, race, weapon};

/// Fields of the summary form, in navigation order. Some are only visible
/// in certain draft states (weapon fields, manual blessing entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Race,
    RaceAbility,
    HasWeapon,
    WeaponCategory,
    WeaponItem,
    Pantheon,
    God,
    BlessingText,
}

/// Events the summary form reports to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryEvent {
    /// Nothing to report.
    None,
    /// Open the dice roll popup.
    OpenDice,
    /// Open the blessing wizard popup.
    OpenBlessing,
    /// Quit the application.
    Quit,
}

/// Cursor and editing state of the summary form.
pub struct SummaryView {
    cursor: usize,
    editing: bool,
}

impl SummaryView {
    /// Create a view with the cursor on the first field.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            editing: false,
        }
    }

    /// True while a text field is being edited (keys are consumed as text).
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Handle a key event against the given draft.
    pub fn handle_key(&mut self, key: KeyEvent, draft: &mut CharacterDraft) -> SummaryEvent {
        if self.editing {
            self.handle_edit_key(key, draft);
            return SummaryEvent::None;
        }

        let fields = visible_fields(draft);
        match key.code {
            KeyCode::Char('q') => return SummaryEvent::Quit,
            KeyCode::Char('r') => return SummaryEvent::OpenDice,
            KeyCode::Char('b') => return SummaryEvent::OpenBlessing,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < fields.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = fields.len().saturating_sub(1),
            KeyCode::Char('h') | KeyCode::Left => {
                self.change_value(draft, fields[self.cursor.min(fields.len() - 1)], -1);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.change_value(draft, fields[self.cursor.min(fields.len() - 1)], 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(draft, fields[self.cursor.min(fields.len() - 1)]);
            }
            _ => {}
        }

        // A mutation may have hidden the field under the cursor.
        let fields = visible_fields(draft);
        self.cursor = self.cursor.min(fields.len().saturating_sub(1));
        SummaryEvent::None
    }

    /// Keys while editing a text field.
    fn handle_edit_key(&mut self, key: KeyEvent, draft: &mut CharacterDraft) {
        let Some(text) = self.edited_text(draft) else {
            self.editing = false;
            return;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.editing = false,
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            _ => {}
        }
    }

    /// The text buffer under the cursor, if the cursor is on a text field.
    fn edited_text<'a>(&self, draft: &'a mut CharacterDraft) -> Option<&'a mut String> {
        let fields = visible_fields(draft);
        match fields.get(self.cursor)? {
            Field::RaceAbility => Some(draft.race_ability_mut()),
            Field::BlessingText => Some(draft.blessing_text_mut()),
            _ => None,
        }
    }

    /// Cycle the value of a selection field or toggle the checkbox.
    fn change_value(&mut self, draft: &mut CharacterDraft, field: Field, delta: isize) {
        match field {
            Field::Race => {
                let names = race::race_names();
                if let Some(next) = cycle(&names, draft.race(), delta) {
                    draft.set_race(next);
                }
            }
            Field::HasWeapon => draft.set_has_weapon(!draft.has_weapon()),
            Field::WeaponCategory => {
                let names = weapon::category_names();
                if let Some(next) = cycle(&names, draft.weapon_category(), delta) {
                    draft.set_weapon_category(next);
                }
            }
            Field::WeaponItem => {
                if let Some(items) = draft.weapon_category().and_then(weapon::items_for)
                    && let Some(next) = cycle(items, draft.weapon_item(), delta)
                {
                    draft.set_weapon_item(next);
                }
            }
            Field::Pantheon => {
                let names = pantheon::pantheon_names();
                if let Some(next) = cycle(&names, draft.pantheon(), delta) {
                    draft.set_pantheon(next);
                }
            }
            Field::God => {
                if let Some(gods) = draft.pantheon().and_then(pantheon::gods_of)
                    && let Some(next) = cycle(gods, draft.god(), delta)
                {
                    draft.set_god(next);
                }
            }
            Field::RaceAbility | Field::BlessingText => {}
        }
    }

    /// Enter/Space on a field: start editing text fields, toggle the
    /// checkbox, or advance a selection.
    fn activate(&mut self, draft: &mut CharacterDraft, field: Field) {
        match field {
            Field::RaceAbility | Field::BlessingText => self.editing = true,
            Field::HasWeapon => draft.set_has_weapon(!draft.has_weapon()),
            _ => self.change_value(draft, field, 1),
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &str {
        if self.editing {
            "type to edit  Enter/Esc:done"
        } else {
            "j/k:field  h/l:change  Enter:edit/toggle  r:dice  b:blessing  ?:help  q:quit"
        }
    }

    /// Draw the summary form.
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        draft: &CharacterDraft,
        last_roll: Option<&[i32; SEQUENCE_LEN]>,
    ) {
        let block = Block::default()
            .title(" Character Summary ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fields = visible_fields(draft);
        let selected = |field: Field| fields.get(self.cursor) == Some(&field);
        let mut lines: Vec<Line<'static>> = Vec::new();

        section(&mut lines, "Race");
        lines.push(select_line(
            "Race",
            draft.race().unwrap_or("Select a race"),
            selected(Field::Race),
        ));
        lines.push(text_line(
            "Race Ability",
            draft.race_ability(),
            "Enter race ability",
            selected(Field::RaceAbility),
            self.editing,
        ));
        lines.push(Line::from(""));

        section(&mut lines, "Character Stats");
        lines.push(stat_labels());
        lines.push(stat_values(draft));
        lines.push(Line::from(""));

        section(&mut lines, "Weapon");
        let checkbox = if draft.has_weapon() { "[x]" } else { "[ ]" };
        lines.push(select_line(
            "Has Weapon",
            checkbox,
            selected(Field::HasWeapon),
        ));
        if draft.has_weapon() {
            lines.push(select_line(
                "Weapon Type",
                draft.weapon_category().unwrap_or("Select weapon type"),
                selected(Field::WeaponCategory),
            ));
            if draft.weapon_category().is_some() {
                lines.push(select_line(
                    "Weapon Item",
                    draft.weapon_item().unwrap_or("Select weapon item"),
                    selected(Field::WeaponItem),
                ));
            }
        }
        lines.push(Line::from(""));

        section(&mut lines, "Blessing");
        match draft.chosen_blessing() {
            Some(blessing) => {
                lines.push(display_line("Religion", blessing.religion.clone()));
                lines.push(display_line("God/Goddess", blessing.god.clone()));
                lines.push(display_line("Domain", blessing.domain.clone()));
                lines.push(display_line("Blessing", blessing.blessing.clone()));
            }
            None => {
                lines.push(select_line(
                    "Pantheon you serve",
                    draft.pantheon().unwrap_or("Select pantheon"),
                    selected(Field::Pantheon),
                ));
                if draft.pantheon().is_some() {
                    lines.push(select_line(
                        "God you serve",
                        draft.god().unwrap_or("Select god"),
                        selected(Field::God),
                    ));
                }
                lines.push(text_line(
                    "Blessing",
                    draft.blessing_text(),
                    "Enter blessing",
                    selected(Field::BlessingText),
                    self.editing,
                ));
            }
        }

        if let Some(results) = last_roll {
            lines.push(Line::from(""));
            section(&mut lines, "Luck of the Dice");
            let mut spans: Vec<Span<'static>> = vec![Span::styled(
                "  After Vexoth's Curse: ",
                Style::default().fg(Color::Magenta),
            )];
            for value in results {
                let (text, color) = if *value >= 0 {
                    (format!("+{value} "), Color::Cyan)
                } else {
                    (format!("{value} "), Color::Magenta)
                };
                spans.push(Span::styled(text, Style::default().fg(color).bold()));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(Span::styled(
                "  Distribute these values freely to STR, CON, DEX, INT, WIS, CHA",
                Style::default().fg(Color::Yellow),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

impl Default for SummaryView {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields visible for the current draft state, in navigation order.
fn visible_fields(draft: &CharacterDraft) -> Vec<Field> {
    let mut fields = vec![Field::Race, Field::RaceAbility, Field::HasWeapon];
    if draft.has_weapon() {
        fields.push(Field::WeaponCategory);
        if draft.weapon_category().is_some() {
            fields.push(Field::WeaponItem);
        }
    }
    if draft.chosen_blessing().is_none() {
        fields.push(Field::Pantheon);
        if draft.pantheon().is_some() {
            fields.push(Field::God);
        }
        fields.push(Field::BlessingText);
    }
    fields
}

/// Step through a closed option list: the entry after/before `current`,
/// or the first entry when nothing is selected yet.
fn cycle(options: &[&'static str], current: Option<&str>, delta: isize) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let index = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        Some(index) => (index as isize + delta).rem_euclid(options.len() as isize) as usize,
        None => 0,
    };
    options.get(index).copied()
}

/// Push a section heading.
fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(Color::Yellow).bold(),
    )));
}

/// A label with a cyclable value, marked with arrows when selected.
fn select_line(label: &'static str, value: &str, selected: bool) -> Line<'static> {
    let value_style = if selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let value_text = if selected {
        format!("\u{25c0} {value} \u{25b6}")
    } else {
        value.to_string()
    };
    Line::from(vec![
        Span::styled(
            format!("  {label}: "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value_text, value_style),
    ])
}

/// A label with an editable text value and placeholder.
fn text_line(
    label: &'static str,
    value: &str,
    placeholder: &'static str,
    selected: bool,
    editing: bool,
) -> Line<'static> {
    let (text, style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (value.to_string(), Style::default().fg(Color::White))
    };
    let mut style = style;
    if selected {
        style = style.fg(Color::Yellow).bold();
    }
    let caret = if selected && editing { "\u{258c}" } else { "" };
    Line::from(vec![
        Span::styled(
            format!("  {label}: "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{text}{caret}"), style),
    ])
}

/// A read-only display line for the applied blessing.
fn display_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {label}: "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// The six stat tile labels.
fn stat_labels() -> Line<'static> {
    let spans: Vec<Span<'static>> = Ability::ALL
        .iter()
        .map(|ability| {
            Span::styled(
                format!("  {:^5}", ability.label()),
                Style::default().fg(Color::DarkGray),
            )
        })
        .collect();
    Line::from(spans)
}

/// The six stat tile values.
fn stat_values(draft: &CharacterDraft) -> Line<'static> {
    let spans: Vec<Span<'static>> = Ability::ALL
        .iter()
        .map(|ability| {
            Span::styled(
                format!("  {:^5}", draft.stats().get(*ability)),
                Style::default().fg(Color::Yellow).bold(),
            )
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn cycling_race_applies_stats() {
        let mut view = SummaryView::new();
        let mut draft = CharacterDraft::new();

        // First step selects the first race in the table.
        view.handle_key(key(KeyCode::Char('l')), &mut draft);
        assert_eq!(draft.race(), Some("Golem"));
        assert_eq!(draft.stats().as_array(), [5, 6, 9, 8, 12, 10]);

        view.handle_key(key(KeyCode::Char('l')), &mut draft);
        assert_eq!(draft.race(), Some("Lizardfolk"));
        assert_eq!(draft.stats().as_array(), [7, 7, 8, 5, 5, 4]);

        view.handle_key(key(KeyCode::Char('h')), &mut draft);
        assert_eq!(draft.race(), Some("Golem"));
    }

    #[test]
    fn weapon_fields_appear_progressively() {
        let mut view = SummaryView::new();
        let mut draft = CharacterDraft::new();
        assert_eq!(visible_fields(&draft).len(), 5);

        // Move to the weapon checkbox and toggle it.
        view.handle_key(key(KeyCode::Char('j')), &mut draft);
        view.handle_key(key(KeyCode::Char('j')), &mut draft);
        view.handle_key(key(KeyCode::Enter), &mut draft);
        assert!(draft.has_weapon());
        assert!(visible_fields(&draft).contains(&Field::WeaponCategory));
        assert!(!visible_fields(&draft).contains(&Field::WeaponItem));

        // Pick a category; the item field appears.
        view.handle_key(key(KeyCode::Char('j')), &mut draft);
        view.handle_key(key(KeyCode::Char('l')), &mut draft);
        assert_eq!(draft.weapon_category(), Some("Melee Weapons"));
        assert!(visible_fields(&draft).contains(&Field::WeaponItem));
    }

    #[test]
    fn category_change_via_keys_clears_item() {
        let mut view = SummaryView::new();
        let mut draft = CharacterDraft::new();
        draft.set_has_weapon(true);
        draft.set_weapon_category("Melee Weapons");
        draft.set_weapon_item("Axe");

        // Cursor onto the category field, cycle forward.
        view.cursor = 3;
        view.handle_key(key(KeyCode::Char('l')), &mut draft);
        assert_eq!(draft.weapon_category(), Some("Ranged Weapons"));
        assert_eq!(draft.weapon_item(), None);
    }

    #[test]
    fn editing_race_ability_captures_keys() {
        let mut view = SummaryView::new();
        let mut draft = CharacterDraft::new();

        view.handle_key(key(KeyCode::Char('j')), &mut draft);
        view.handle_key(key(KeyCode::Enter), &mut draft);
        assert!(view.is_editing());

        for c in "stone".chars() {
            view.handle_key(key(KeyCode::Char(c)), &mut draft);
        }
        view.handle_key(key(KeyCode::Backspace), &mut draft);
        view.handle_key(key(KeyCode::Enter), &mut draft);

        assert!(!view.is_editing());
        assert_eq!(draft.race_ability(), "ston");
    }

    #[test]
    fn quit_and_popup_events() {
        let mut view = SummaryView::new();
        let mut draft = CharacterDraft::new();
        assert_eq!(
            view.handle_key(key(KeyCode::Char('q')), &mut draft),
            SummaryEvent::Quit
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Char('r')), &mut draft),
            SummaryEvent::OpenDice
        );
        assert_eq!(
            view.handle_key(key(KeyCode::Char('b')), &mut draft),
            SummaryEvent::OpenBlessing
        );
    }

    #[test]
    fn manual_blessing_fields_hidden_once_applied() {
        let mut draft = CharacterDraft::new();
        let blessing = mf_core::religion::religion("Mercury")
            .unwrap()
            .bless("Vexoth")
            .unwrap();
        draft.apply_blessing(blessing);

        let fields = visible_fields(&draft);
        assert!(!fields.contains(&Field::Pantheon));
        assert!(!fields.contains(&Field::God));
        assert!(!fields.contains(&Field::BlessingText));
    }

    #[test]
    fn cursor_clamped_when_fields_disappear() {
        let mut view = SummaryView::new();
        let mut draft = CharacterDraft::new();
        draft.set_has_weapon(true);
        draft.set_weapon_category("Melee Weapons");

        // Park the cursor on the last field, then drop the weapon.
        view.handle_key(key(KeyCode::Char('G')), &mut draft);
        view.cursor = 2;
        view.handle_key(key(KeyCode::Enter), &mut draft);
        assert!(!draft.has_weapon());
        let fields = visible_fields(&draft);
        assert!(view.cursor < fields.len());
    }
}
