//! Pantheon table for the manual blessing-entry fields.
//!
//! A smaller table than the full religion data: when no wizard blessing has
//! been applied, the summary form offers these pantheon/god selects for
//! free-form entry alongside a hand-written blessing text.

/// Pantheons with their god lists, in display order.
pub const PANTHEONS: &[(&str, &[&str])] = &[
    ("Divine Pantheon", &["Aella", "Lumina", "Solaris", "Harmony"]),
    (
        "Nature Pantheon",
        &["Verdant", "Tsunami", "Ignitus", "Tempest"],
    ),
    (
        "Dark Pantheon",
        &["Vexoth", "Shadowmere", "Necrosis", "Malice"],
    ),
    ("Neutral Pantheon", &["Balance", "Fate", "Time", "Knowledge"]),
];

/// Pantheon names in table order.
pub fn pantheon_names() -> Vec<&'static str> {
    PANTHEONS.iter().map(|(name, _)| *name).collect()
}

/// Gods belonging to a pantheon. Unknown pantheons return `None`.
pub fn gods_of(pantheon: &str) -> Option<&'static [&'static str]> {
    PANTHEONS
        .iter()
        .find(|(name, _)| *name == pantheon)
        .map(|(_, gods)| *gods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_pantheons() {
        assert_eq!(
            pantheon_names(),
            [
                "Divine Pantheon",
                "Nature Pantheon",
                "Dark Pantheon",
                "Neutral Pantheon"
            ]
        );
    }

    #[test]
    fn gods_lookup() {
        assert_eq!(
            gods_of("Dark Pantheon"),
            Some(["Vexoth", "Shadowmere", "Necrosis", "Malice"].as_slice())
        );
        assert_eq!(gods_of("Chaos Pantheon"), None);
    }
}
