//! Weapon category and item tables.
//!
//! Two-level picker data: a category is chosen first, then an item within
//! it. Items are only valid under their own category.

/// Weapon categories with their ordered item lists.
pub const WEAPON_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Melee Weapons",
        &["Sword", "Axe", "Mace", "Dagger", "Spear", "Hammer"],
    ),
    (
        "Ranged Weapons",
        &["Bow", "Crossbow", "Throwing Knives", "Sling"],
    ),
    ("Magic Weapons", &["Staff", "Wand", "Orb", "Tome"]),
    ("Exotic Weapons", &["Whip", "Chain", "Claws", "Fangs"]),
];

/// Category names in table order.
pub fn category_names() -> Vec<&'static str> {
    WEAPON_CATEGORIES.iter().map(|(name, _)| *name).collect()
}

/// Items belonging to a category. Unknown categories return `None`.
pub fn items_for(category: &str) -> Option<&'static [&'static str]> {
    WEAPON_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, items)| *items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_categories() {
        assert_eq!(
            category_names(),
            [
                "Melee Weapons",
                "Ranged Weapons",
                "Magic Weapons",
                "Exotic Weapons"
            ]
        );
    }

    #[test]
    fn items_in_order() {
        assert_eq!(
            items_for("Melee Weapons"),
            Some(["Sword", "Axe", "Mace", "Dagger", "Spear", "Hammer"].as_slice())
        );
        assert_eq!(
            items_for("Magic Weapons"),
            Some(["Staff", "Wand", "Orb", "Tome"].as_slice())
        );
    }

    #[test]
    fn unknown_category_is_none() {
        assert_eq!(items_for("Siege Weapons"), None);
        assert_eq!(items_for(""), None);
    }
}
