//! Character draft: the in-progress, unsaved character record.
//!
//! The draft lives for one page session and is discarded on exit. All
//! setters follow the silent-miss policy: unknown keys leave the draft
//! untouched rather than raising an error.

use crate::pantheon;
use crate::race;
use crate::religion::ChosenBlessing;
use crate::stats::StatBlock;
use crate::weapon;

/// The mutable character record edited by the summary view.
#[derive(Debug, Clone, Default)]
pub struct CharacterDraft {
    race: Option<&'static str>,
    race_ability: String,
    stats: StatBlock,
    has_weapon: bool,
    weapon_category: Option<&'static str>,
    weapon_item: Option<&'static str>,
    pantheon: Option<&'static str>,
    god: Option<&'static str>,
    blessing_text: String,
    chosen_blessing: Option<ChosenBlessing>,
}

impl CharacterDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a race. A known race overwrites all six stats with its fixed
    /// tuple; unknown or empty names leave both the race and the stats
    /// untouched.
    pub fn set_race(&mut self, name: &str) {
        if let Some((race, stats)) = race::race_entry(name) {
            self.race = Some(race);
            self.stats = *stats;
        }
    }

    /// The selected race, if any.
    pub fn race(&self) -> Option<&'static str> {
        self.race
    }

    /// Free-text race ability.
    pub fn race_ability(&self) -> &str {
        &self.race_ability
    }

    /// Mutable access to the race ability text for editing.
    pub fn race_ability_mut(&mut self) -> &mut String {
        &mut self.race_ability
    }

    /// The current ability scores.
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    /// Whether the character carries a weapon.
    pub fn has_weapon(&self) -> bool {
        self.has_weapon
    }

    /// Toggle weapon possession. Dropping the weapon clears the category
    /// and item.
    pub fn set_has_weapon(&mut self, has_weapon: bool) {
        self.has_weapon = has_weapon;
        if !has_weapon {
            self.weapon_category = None;
            self.weapon_item = None;
        }
    }

    /// The chosen weapon category, if any.
    pub fn weapon_category(&self) -> Option<&'static str> {
        self.weapon_category
    }

    /// Choose a weapon category. Changing category always clears the chosen
    /// item, since an item of the old category is no longer valid. Unknown
    /// categories are ignored.
    pub fn set_weapon_category(&mut self, category: &str) {
        let Some(canonical) = weapon::WEAPON_CATEGORIES
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(name, _)| *name)
        else {
            return;
        };
        if self.weapon_category != Some(canonical) {
            self.weapon_item = None;
        }
        self.weapon_category = Some(canonical);
    }

    /// The chosen weapon item, if any.
    pub fn weapon_item(&self) -> Option<&'static str> {
        self.weapon_item
    }

    /// Choose a weapon item. Valid only when a category is chosen and the
    /// item belongs to it; anything else is ignored.
    pub fn set_weapon_item(&mut self, item: &str) {
        let Some(category) = self.weapon_category else {
            return;
        };
        if let Some(items) = weapon::items_for(category)
            && let Some(canonical) = items.iter().find(|i| **i == item)
        {
            self.weapon_item = Some(canonical);
        }
    }

    /// The manually entered pantheon, if any.
    pub fn pantheon(&self) -> Option<&'static str> {
        self.pantheon
    }

    /// Manually pick a pantheon. Changing pantheon clears the manually
    /// picked god, mirroring the weapon category/item rule. Unknown
    /// pantheons are ignored.
    pub fn set_pantheon(&mut self, name: &str) {
        let canonical = pantheon::PANTHEONS
            .iter()
            .find(|(pantheon, _)| *pantheon == name)
            .map(|(pantheon, _)| *pantheon);
        if canonical.is_none() {
            return;
        }
        if self.pantheon != canonical {
            self.god = None;
        }
        self.pantheon = canonical;
    }

    /// The manually picked god, if any.
    pub fn god(&self) -> Option<&'static str> {
        self.god
    }

    /// Manually pick a god of the chosen pantheon. Ignored without a
    /// pantheon or for gods outside it.
    pub fn set_god(&mut self, name: &str) {
        let Some(pantheon) = self.pantheon else {
            return;
        };
        if let Some(gods) = pantheon::gods_of(pantheon)
            && let Some(canonical) = gods.iter().find(|g| **g == name)
        {
            self.god = Some(canonical);
        }
    }

    /// Free-text blessing entry, used while no wizard blessing is applied.
    pub fn blessing_text(&self) -> &str {
        &self.blessing_text
    }

    /// Mutable access to the blessing text for editing.
    pub fn blessing_text_mut(&mut self) -> &mut String {
        &mut self.blessing_text
    }

    /// The blessing applied via the wizard, if any. When set, the blessing
    /// section shows this record instead of the manual-entry fields.
    pub fn chosen_blessing(&self) -> Option<&ChosenBlessing> {
        self.chosen_blessing.as_ref()
    }

    /// Apply a wizard blessing: replaces all blessing-related fields in one
    /// atomic update and switches the blessing section to fixed display.
    pub fn apply_blessing(&mut self, blessing: ChosenBlessing) {
        self.blessing_text = blessing.blessing.clone();
        self.chosen_blessing = Some(blessing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::RACES;
    use crate::religion;

    #[test]
    fn every_race_sets_its_tuple() {
        let mut draft = CharacterDraft::new();
        for (name, stats) in RACES {
            draft.set_race(name);
            assert_eq!(draft.race(), Some(*name));
            assert_eq!(draft.stats().as_array(), stats.as_array());
        }
    }

    #[test]
    fn unknown_race_leaves_stats_untouched() {
        let mut draft = CharacterDraft::new();
        draft.set_race("Dwarf");
        let before = *draft.stats();

        draft.set_race("Gnome");
        assert_eq!(draft.race(), Some("Dwarf"));
        assert_eq!(*draft.stats(), before);

        draft.set_race("");
        assert_eq!(*draft.stats(), before);
    }

    #[test]
    fn stats_never_survive_a_race_change() {
        let mut draft = CharacterDraft::new();
        draft.set_race("Troll");
        draft.set_race("Halfling");
        assert_eq!(draft.stats().as_array(), [5, 6, 11, 7, 9, 8]);
    }

    #[test]
    fn category_change_clears_item() {
        let mut draft = CharacterDraft::new();
        draft.set_has_weapon(true);
        draft.set_weapon_category("Melee Weapons");
        draft.set_weapon_item("Dagger");
        assert_eq!(draft.weapon_item(), Some("Dagger"));

        draft.set_weapon_category("Magic Weapons");
        assert_eq!(draft.weapon_category(), Some("Magic Weapons"));
        assert_eq!(draft.weapon_item(), None);
    }

    #[test]
    fn same_category_keeps_item() {
        let mut draft = CharacterDraft::new();
        draft.set_has_weapon(true);
        draft.set_weapon_category("Ranged Weapons");
        draft.set_weapon_item("Sling");
        draft.set_weapon_category("Ranged Weapons");
        assert_eq!(draft.weapon_item(), Some("Sling"));
    }

    #[test]
    fn item_must_belong_to_category() {
        let mut draft = CharacterDraft::new();
        draft.set_has_weapon(true);
        draft.set_weapon_item("Sword");
        assert_eq!(draft.weapon_item(), None);

        draft.set_weapon_category("Magic Weapons");
        draft.set_weapon_item("Sword");
        assert_eq!(draft.weapon_item(), None);
        draft.set_weapon_item("Wand");
        assert_eq!(draft.weapon_item(), Some("Wand"));
    }

    #[test]
    fn dropping_weapon_clears_selection() {
        let mut draft = CharacterDraft::new();
        draft.set_has_weapon(true);
        draft.set_weapon_category("Exotic Weapons");
        draft.set_weapon_item("Whip");
        draft.set_has_weapon(false);
        assert_eq!(draft.weapon_category(), None);
        assert_eq!(draft.weapon_item(), None);
    }

    #[test]
    fn pantheon_change_clears_god() {
        let mut draft = CharacterDraft::new();
        draft.set_pantheon("Dark Pantheon");
        draft.set_god("Vexoth");
        assert_eq!(draft.god(), Some("Vexoth"));

        draft.set_pantheon("Divine Pantheon");
        assert_eq!(draft.god(), None);
        draft.set_god("Vexoth");
        assert_eq!(draft.god(), None);
        draft.set_god("Aella");
        assert_eq!(draft.god(), Some("Aella"));
    }

    #[test]
    fn apply_blessing_is_atomic() {
        let mut draft = CharacterDraft::new();
        draft.blessing_text_mut().push_str("scribbled notes");

        let blessing = religion::religion("Mercury").unwrap().bless("Vexoth").unwrap();
        draft.apply_blessing(blessing.clone());

        let applied = draft.chosen_blessing().unwrap();
        assert_eq!(*applied, blessing);
        assert_eq!(draft.blessing_text(), "+1 reroll per session (any D20 roll)");
    }
}
