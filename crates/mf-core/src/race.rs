//! Race table mapping each race to its fixed ability scores.
//!
//! Selecting a race overwrites all six stats with its tuple; the values are
//! user-visible game content and are reproduced exactly.

use crate::stats::StatBlock;

/// All playable races with their fixed stat tuples, in display order.
pub const RACES: &[(&str, StatBlock)] = &[
    ("Golem", StatBlock::new([5, 6, 9, 8, 12, 10])),
    ("Lizardfolk", StatBlock::new([7, 7, 8, 5, 5, 4])),
    ("Kobold", StatBlock::new([4, 5, 6, 8, 6, 6])),
    ("Halfling", StatBlock::new([5, 6, 11, 7, 9, 8])),
    ("Goblin", StatBlock::new([4, 5, 9, 9, 7, 6])),
    ("Merfolk", StatBlock::new([6, 7, 10, 8, 10, 7])),
    ("Centaur", StatBlock::new([11, 10, 8, 6, 7, 6])),
    ("Human", StatBlock::new([7, 7, 7, 7, 7, 7])),
    ("Orc", StatBlock::new([10, 10, 6, 4, 6, 5])),
    ("Dwarf", StatBlock::new([9, 10, 6, 7, 8, 5])),
    ("High Elf", StatBlock::new([6, 6, 13, 10, 9, 10])),
    ("Dark Elf", StatBlock::new([6, 7, 13, 9, 8, 9])),
    ("Troll", StatBlock::new([11, 12, 4, 3, 4, 3])),
    ("Tiefling", StatBlock::new([10, 10, 10, 10, 7, 7])),
    ("Netherborn", StatBlock::new([9, 9, 5, 7, 10, 4])),
    ("Elemental", StatBlock::new([11, 11, 8, 8, 7, 5])),
    ("ArchFey", StatBlock::new([7, 6, 12, 10, 10, 10])),
    ("Dragonkin", StatBlock::new([12, 10, 8, 7, 7, 6])),
    ("Celestial", StatBlock::new([11, 9, 10, 12, 12, 12])),
    ("Demi-God", StatBlock::new([15, 15, 15, 15, 15, 15])),
];

/// Race names in table order.
pub fn race_names() -> Vec<&'static str> {
    RACES.iter().map(|(name, _)| *name).collect()
}

/// Look up the stat tuple for a race. Unknown names return `None`.
pub fn race_stats(name: &str) -> Option<StatBlock> {
    RACES
        .iter()
        .find(|(race, _)| *race == name)
        .map(|(_, stats)| *stats)
}

/// Canonical table entry for a race name, if present.
pub fn race_entry(name: &str) -> Option<&'static (&'static str, StatBlock)> {
    RACES.iter().find(|(race, _)| *race == name)
}
