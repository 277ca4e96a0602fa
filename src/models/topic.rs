//! Static lesson topic catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proficiency level a topic is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon tag for a topic card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicIcon {
    Hand,
    Coffee,
    Plane,
    Briefcase,
    Home,
}

impl TopicIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            TopicIcon::Hand => "👋",
            TopicIcon::Coffee => "☕",
            TopicIcon::Plane => "✈",
            TopicIcon::Briefcase => "💼",
            TopicIcon::Home => "🏠",
        }
    }
}

/// Accent color tag for a topic card. The UI maps these to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicColor {
    Green,
    Yellow,
    Blue,
    Purple,
    Pink,
}

/// One catalog entry. Immutable for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: TopicIcon,
    pub color: TopicColor,
    pub level: Level,
}

const TOPICS: [TopicConfig; 5] = [
    TopicConfig {
        id: "greetings",
        name: "التحيات (Greetings)",
        icon: TopicIcon::Hand,
        color: TopicColor::Green,
        level: Level::Beginner,
    },
    TopicConfig {
        id: "food",
        name: "الطعام (Food)",
        icon: TopicIcon::Coffee,
        color: TopicColor::Yellow,
        level: Level::Beginner,
    },
    TopicConfig {
        id: "travel",
        name: "السفر (Travel)",
        icon: TopicIcon::Plane,
        color: TopicColor::Blue,
        level: Level::Intermediate,
    },
    TopicConfig {
        id: "work",
        name: "العمل (Work)",
        icon: TopicIcon::Briefcase,
        color: TopicColor::Purple,
        level: Level::Intermediate,
    },
    TopicConfig {
        id: "home",
        name: "المنزل (Home)",
        icon: TopicIcon::Home,
        color: TopicColor::Pink,
        level: Level::Beginner,
    },
];

/// The built-in topics in display order.
pub fn catalog() -> &'static [TopicConfig] {
    &TOPICS
}

pub fn find_topic(id: &str) -> Option<&'static TopicConfig> {
    TOPICS.iter().find(|topic| topic.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_unique_ids() {
        let mut ids: Vec<_> = catalog().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_find_topic() {
        let food = find_topic("food").unwrap();
        assert_eq!(food.level, Level::Beginner);
        assert!(food.name.contains("Food"));
        assert!(find_topic("astronomy").is_none());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Intermediate.to_string(), "Intermediate");
    }
}
