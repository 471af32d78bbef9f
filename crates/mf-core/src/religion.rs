//! Religion and deity tables with blessing text.
//!
//! Eight religions, each with a handful of deities granting a fixed
//! narrative blessing. All strings are user-visible game content and are
//! reproduced exactly.

use serde::{Deserialize, Serialize};

/// A deity within a religion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deity {
    /// The deity's name.
    pub name: &'static str,
    /// The deity's domain, e.g. "Trickery & Luck".
    pub domain: &'static str,
    /// The blessing text granted by choosing this deity.
    pub blessing: &'static str,
}

/// A religion entry: display info plus its deities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Religion {
    /// The religion's name, also its lookup key.
    pub name: &'static str,
    /// Pantheon subtitle shown under the name.
    pub subtitle: &'static str,
    /// Symbol glyph shown on the religion card.
    pub symbol: &'static str,
    /// Description of the religion's emblem.
    pub emblem: &'static str,
    /// Deities of this religion, in display order.
    pub deities: &'static [Deity],
}

impl Religion {
    /// Look up a deity of this religion by name.
    pub fn deity(&self, name: &str) -> Option<&'static Deity> {
        self.deities.iter().find(|d| d.name == name)
    }

    /// Build the full blessing record for one of this religion's deities.
    /// Unknown names return `None`.
    pub fn bless(&self, deity_name: &str) -> Option<ChosenBlessing> {
        let deity = self.deity(deity_name)?;
        Some(ChosenBlessing {
            religion: self.name.to_string(),
            god: deity.name.to_string(),
            domain: deity.domain.to_string(),
            blessing: deity.blessing.to_string(),
        })
    }
}

/// The blessing record reported by the wizard: religion, god, domain, and
/// blessing text, replacing the manual-entry fields once chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenBlessing {
    /// The chosen religion's name.
    pub religion: String,
    /// The chosen deity's name.
    pub god: String,
    /// The deity's domain.
    pub domain: String,
    /// The blessing text.
    pub blessing: String,
}

/// All religions in display order.
pub const RELIGIONS: &[Religion] = &[
    Religion {
        name: "Mercury",
        subtitle: "Trickery & Chaos Pantheon",
        symbol: "\u{1f0cf}",
        emblem: "Jester Mask",
        deities: &[
            Deity {
                name: "Vexoth",
                domain: "Trickery & Luck",
                blessing: "+1 reroll per session (any D20 roll)",
            },
            Deity {
                name: "Lyrix",
                domain: "Masks & Illusions",
                blessing: "Grants a disguise kit + 1/day illusion spell",
            },
            Deity {
                name: "Jhjin",
                domain: "Innovation & Mischief",
                blessing: "Hidden profession path unlocked: \"Tinkerer\"",
            },
            Deity {
                name: "Xyqutit",
                domain: "Transfiguration",
                blessing: "Can change race once via hidden side quest",
            },
            Deity {
                name: "Ketrix",
                domain: "Chaos & Darkness",
                blessing: "Start with 3 random consumable magical items",
            },
            Deity {
                name: "Vynxara",
                domain: "Dreams",
                blessing: "Once per long rest, receive a prophetic dream (DM hint)",
            },
            Deity {
                name: "Lybranis",
                domain: "Wealth & Greed",
                blessing: "Start with +200 gold and \"Greedy Glint\" (discount from shady vendors)",
            },
        ],
    },
    Religion {
        name: "Venus",
        subtitle: "Love & Chivalry Pantheon",
        symbol: "\u{1f496}",
        emblem: "Heart with Sword",
        deities: &[
            Deity {
                name: "Aesthera",
                domain: "Love & Diplomacy",
                blessing: "+1 CHA and persuasion advantage 1/day",
            },
            Deity {
                name: "Alcyrene",
                domain: "Beauty & Art",
                blessing: "Gain \"Artist's Inspiration\" \u{2013} create beauty that charms minor NPCs",
            },
            Deity {
                name: "Veltharys",
                domain: "Passion & Fire",
                blessing: "Start with a fire-based weapon or spell",
            },
            Deity {
                name: "Caelora",
                domain: "Peace & Reconciliation",
                blessing: "Gain +1 WIS and \"Calm Emotions\" spell 1/day",
            },
            Deity {
                name: "Thrydanis",
                domain: "Union & Commitment",
                blessing: "Bonded Ally: Choose a player, gain +1 AC when near",
            },
            Deity {
                name: "Lysaris",
                domain: "Desire & Influence",
                blessing: "Gain \"Subtle Whispers\" \u{2013} minor mind-influence cantrip",
            },
        ],
    },
    Religion {
        name: "Earth",
        subtitle: "The Silent Pantheon",
        symbol: "\u{1f331}",
        emblem: "Sprouting Seed",
        deities: &[Deity {
            name: "Gaia",
            domain: "Creation & Earth",
            blessing: "None at first. Hidden Quest: \"Connection with Earth\" (+2 all stats permanently when completed).",
        }],
    },
    Religion {
        name: "Mars",
        subtitle: "Nebula of Dominion",
        symbol: "\u{2694}\u{fe0f}",
        emblem: "Cracked Helm",
        deities: &[
            Deity {
                name: "Kael",
                domain: "War & Strategy",
                blessing: "+1 STR or INT (player choice)",
            },
            Deity {
                name: "Arcanthis",
                domain: "Tactics & Planning",
                blessing: "Reveal 1 enemy weakness before battle (1/day)",
            },
            Deity {
                name: "Barythra",
                domain: "Valor & Heroism",
                blessing: "+1 CON and resistance to fear",
            },
            Deity {
                name: "Thargrin",
                domain: "Fury & Bloodshed",
                blessing: "When under 50% HP, deal +1 damage per hit",
            },
            Deity {
                name: "Cindralis",
                domain: "Weapons & Forging",
                blessing: "Start with a unique named weapon (basic stats, grows over time)",
            },
            Deity {
                name: "Kaeltris",
                domain: "Ambition & Dominion",
                blessing: "+1 CHA and access to \"Dominion\" career tree",
            },
            Deity {
                name: "Morrathis",
                domain: "Death in Battle",
                blessing: "Upon death, a 50% chance to resurrect once with 1 HP",
            },
        ],
    },
    Religion {
        name: "Jupiter",
        subtitle: "Pantheon of Light",
        symbol: "\u{1f31e}",
        emblem: "Radiant Sunburst",
        deities: &[
            Deity {
                name: "Avalon",
                domain: "Sun & Light",
                blessing: "Gain \"Radiant Touch\" (cantrip that reveals illusions and undead)",
            },
            Deity {
                name: "Lumenar",
                domain: "Knowledge & Wisdom",
                blessing: "+1 INT and free lore hint 1/session",
            },
            Deity {
                name: "Soltrion",
                domain: "Courage & Sacrifice",
                blessing: "You can shield an ally from death once (1 HP survive trigger)",
            },
            Deity {
                name: "Seraphina",
                domain: "Inspiration & Art",
                blessing: "Gain a \"Muse Token\" \u{2013} once used, grants advantage on any artistic or social task",
            },
            Deity {
                name: "Astravar",
                domain: "Order & Leadership",
                blessing: "Gain \"Command Voice\" \u{2013} minor fear or inspire effect 1/day",
            },
        ],
    },
    Religion {
        name: "Saturn",
        subtitle: "Primordial Power Pantheon",
        symbol: "\u{1f74d}",
        emblem: "Ancient Rune Circle",
        deities: &[
            Deity {
                name: "Dragorath",
                domain: "Dragons",
                blessing: "Hidden profession \"Dragonbound\" becomes available",
            },
            Deity {
                name: "Ekhlyss",
                domain: "Cycles & Time",
                blessing: "Can delay aging effects and resist status changes once/day",
            },
            Deity {
                name: "Vaelthyr",
                domain: "Arcane Flames",
                blessing: "Start with rare fire spell or item",
            },
            Deity {
                name: "Rathorax",
                domain: "Strength & Dominion",
                blessing: "+2 STR cap increase (stat max is now 22 for STR)",
            },
            Deity {
                name: "Aurelix",
                domain: "Wealth & Hoards",
                blessing: "Gain rare gemstone worth 300g",
            },
            Deity {
                name: "Drakvyr",
                domain: "Secrets",
                blessing: "\"Whisper of Drakvyr\" \u{2013} minor forbidden spell cast 1/day",
            },
            Deity {
                name: "Zyraxil",
                domain: "Balance & Destruction",
                blessing: "\"Equilibrium\" \u{2013} negate one buff/debuff (self or target) 1/session",
            },
        ],
    },
    Religion {
        name: "Uranus",
        subtitle: "Thunder & Fury Pantheon",
        symbol: "\u{26a1}",
        emblem: "Shattered Bolt",
        deities: &[
            Deity {
                name: "Skorvyn",
                domain: "Titan Wrath",
                blessing: "Start with Titan heritage: +1 CON, +1 STR",
            },
            Deity {
                name: "Bjolnir",
                domain: "Forge",
                blessing: "Gain a forge blueprint and resistance to fire",
            },
            Deity {
                name: "Yrngael",
                domain: "Winds",
                blessing: "Once/day cast Wind Step \u{2013} move 15ft without provoking attacks",
            },
            Deity {
                name: "Fjorvak",
                domain: "Ice",
                blessing: "Resistance to cold and gain Ice Shard item",
            },
            Deity {
                name: "Valdris",
                domain: "Sky Hunt",
                blessing: "Gain a hawk familiar with scouting ability",
            },
            Deity {
                name: "Korgath",
                domain: "Earthquake",
                blessing: "\"Tremor Stomp\" (cantrip, 5ft knockdown chance)",
            },
            Deity {
                name: "Helvyrn",
                domain: "Sea Tempest",
                blessing: "Swim speed + underwater breathing and a vial of sea poison",
            },
        ],
    },
    Religion {
        name: "Pluto",
        subtitle: "Watchers of the Veil",
        symbol: "\u{2620}\u{fe0f}",
        emblem: "Veiled Skull",
        deities: &[
            Deity {
                name: "Ravel",
                domain: "Death",
                blessing: "Start with a soulstone that prevents death once (must be recharged)",
            },
            Deity {
                name: "Valtherion",
                domain: "Judgment",
                blessing: "Sense undead and evil in a 30ft radius once/day",
            },
            Deity {
                name: "Liriel",
                domain: "Passing",
                blessing: "Can calm dying NPCs to hear last words (may reveal hidden quests)",
            },
            Deity {
                name: "Eryndor",
                domain: "Underworld",
                blessing: "Access to Shadowpath network (underground shortcuts)",
            },
            Deity {
                name: "Seraphael",
                domain: "Life Spark",
                blessing: "Heal 1d4 HP on self or ally once per day",
            },
            Deity {
                name: "Azariel",
                domain: "Time",
                blessing: "\"Recall\" \u{2013} undo your last movement or action once/session",
            },
            Deity {
                name: "Valtheron",
                domain: "Warrior of Souls",
                blessing: "\"Ghoststep\" \u{2013} pass through thin walls once/day",
            },
            Deity {
                name: "Iryssia",
                domain: "Secrets",
                blessing: "Learn 1 random hidden fact per game session (DM granted)",
            },
            Deity {
                name: "Caeryth",
                domain: "Mourning",
                blessing: "Once per session, can inspire with grief \u{2013} allies gain morale boost",
            },
        ],
    },
];

/// Religion names in table order.
pub fn religion_keys() -> Vec<&'static str> {
    RELIGIONS.iter().map(|r| r.name).collect()
}

/// Look up a religion by name. Unknown names return `None`.
pub fn religion(key: &str) -> Option<&'static Religion> {
    RELIGIONS.iter().find(|r| r.name == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_religions() {
        assert_eq!(
            religion_keys(),
            [
                "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Pluto"
            ]
        );
    }

    #[test]
    fn mercury_vexoth_blessing() {
        let mercury = religion("Mercury").unwrap();
        let blessing = mercury.bless("Vexoth").unwrap();
        assert_eq!(
            blessing,
            ChosenBlessing {
                religion: "Mercury".to_string(),
                god: "Vexoth".to_string(),
                domain: "Trickery & Luck".to_string(),
                blessing: "+1 reroll per session (any D20 roll)".to_string(),
            }
        );
    }

    #[test]
    fn earth_has_only_gaia() {
        let earth = religion("Earth").unwrap();
        assert_eq!(earth.deities.len(), 1);
        assert!(earth.deity("Gaia").is_some());
        assert_eq!(earth.deity("Verdant"), None);
    }

    #[test]
    fn deity_lookup_is_scoped_to_religion() {
        // Vexoth belongs to Mercury, not Venus.
        assert_eq!(religion("Venus").unwrap().bless("Vexoth"), None);
    }

    #[test]
    fn unknown_religion_is_none() {
        assert_eq!(religion("Neptune"), None);
        assert_eq!(religion(""), None);
    }

    #[test]
    fn blessing_serializes() {
        let blessing = religion("Mars").unwrap().bless("Kael").unwrap();
        let json = serde_json::to_string(&blessing).unwrap();
        let back: ChosenBlessing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blessing);
    }
}
