//! Built-in item themes.
//!
//! A theme only decides how the four bucket values look. Every theme maps
//! exactly one item kind onto each value `0..BUCKET_COUNT`, in value order.

use crate::item::BUCKET_COUNT;
use serde::Serialize;

/// One decorative item kind of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ItemKind {
    pub key: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub value: u8,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub display_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub kinds: [ItemKind; BUCKET_COUNT],
}

impl Theme {
    /// Look up a theme by name, falling back to the garden theme.
    pub fn by_name(name: &str) -> &'static Theme {
        Self::find(name).unwrap_or(&GARDEN)
    }

    /// Exact lookup, `None` for unknown names.
    pub fn find(name: &str) -> Option<&'static Theme> {
        THEMES.iter().copied().find(|t| t.name == name)
    }

    pub fn all() -> &'static [&'static Theme] {
        &THEMES
    }

    /// The item kind for a bucket value.
    pub fn kind(&self, value: u8) -> &ItemKind {
        &self.kinds[value as usize]
    }
}

pub static GARDEN: Theme = Theme {
    name: "garden",
    display_name: "Garden",
    title: "Garden Algorithm Sorter",
    subtitle: "--- Flowers are waiting to be matched ---",
    kinds: [
        ItemKind { key: "pink-tulip", emoji: "🌷", label: "Pink Tulip", value: 0 },
        ItemKind { key: "cherry-blossom", emoji: "🌸", label: "Cherry Blossom", value: 1 },
        ItemKind { key: "red-rose", emoji: "🥀", label: "Red Rose", value: 2 },
        ItemKind { key: "yellow-daisy", emoji: "🌼", label: "Yellow Daisy", value: 3 },
    ],
};

pub static SPACE: Theme = Theme {
    name: "space",
    display_name: "Space",
    title: "Space Algorithm Sorter",
    subtitle: "--- Celestial objects are waiting to be organized ---",
    kinds: [
        ItemKind { key: "planet", emoji: "🪐", label: "Planet", value: 0 },
        ItemKind { key: "star", emoji: "⭐", label: "Star", value: 1 },
        ItemKind { key: "rocket", emoji: "🚀", label: "Rocket", value: 2 },
        ItemKind { key: "moon", emoji: "🌙", label: "Moon", value: 3 },
    ],
};

pub static SPRING: Theme = Theme {
    name: "spring",
    display_name: "Spring",
    title: "Spring Algorithm Sorter",
    subtitle: "--- Nature elements are waiting to be sorted ---",
    kinds: [
        ItemKind { key: "butterfly", emoji: "🦋", label: "Butterfly", value: 0 },
        ItemKind { key: "bee", emoji: "🐝", label: "Bee", value: 1 },
        ItemKind { key: "ladybug", emoji: "🐞", label: "Ladybug", value: 2 },
        ItemKind { key: "leaf", emoji: "🍃", label: "Leaf", value: 3 },
    ],
};

pub static OCEAN: Theme = Theme {
    name: "ocean",
    display_name: "Ocean",
    title: "Ocean Algorithm Sorter",
    subtitle: "--- Sea creatures are waiting to be organized ---",
    kinds: [
        ItemKind { key: "fish", emoji: "🐠", label: "Tropical Fish", value: 0 },
        ItemKind { key: "dolphin", emoji: "🐬", label: "Dolphin", value: 1 },
        ItemKind { key: "shell", emoji: "🐚", label: "Shell", value: 2 },
        ItemKind { key: "octopus", emoji: "🐙", label: "Octopus", value: 3 },
    ],
};

static THEMES: [&Theme; 4] = [&GARDEN, &SPACE, &SPRING, &OCEAN];
