//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use crate::model::{Category, Priority};
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub urgent: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

/// Task metadata icons
#[derive(Debug, Clone)]
pub struct MetaIcons {
    pub deadline: &'static str,
    pub estimate: &'static str,
    pub tag: &'static str,
    pub busy: &'static str,
    pub error: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub priority: PriorityIcons,
    pub meta: MetaIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => IconSet {
                priority: PriorityIcons {
                    urgent: "🔴",
                    high: "🟠",
                    medium: "🟡",
                    low: "🔵",
                },
                meta: MetaIcons {
                    deadline: "📅",
                    estimate: "⏱️",
                    tag: "🏷️",
                    busy: "⏳",
                    error: "❌",
                },
            },
            IconTheme::Unicode => IconSet {
                priority: PriorityIcons {
                    urgent: "‼",
                    high: "●",
                    medium: "◉",
                    low: "○",
                },
                meta: MetaIcons {
                    deadline: "◷",
                    estimate: "⧖",
                    tag: "#",
                    busy: "⟳",
                    error: "✗",
                },
            },
            IconTheme::Ascii => IconSet {
                priority: PriorityIcons {
                    urgent: "!!!",
                    high: "!!",
                    medium: "!",
                    low: ".",
                },
                meta: MetaIcons {
                    deadline: "@",
                    estimate: "~",
                    tag: "#",
                    busy: "...",
                    error: "X",
                },
            },
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Priority) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Priority::Urgent => icons.urgent,
            Priority::High => icons.high,
            Priority::Medium => icons.medium,
            Priority::Low => icons.low,
        }
    }

    /// Short category marker shown before task content
    #[must_use]
    pub fn category(&self, category: Category) -> &'static str {
        match (self.current_theme, category) {
            (IconTheme::Emoji, Category::Study) => "📚",
            (IconTheme::Emoji, Category::Assignment) => "📝",
            (IconTheme::Emoji, Category::Project) => "🛠️",
            (IconTheme::Emoji, Category::Personal) => "🏠",
            (IconTheme::Emoji, Category::Work) => "💼",
            (IconTheme::Emoji, Category::General) => "📌",
            (_, Category::Study) => "[S]",
            (_, Category::Assignment) => "[A]",
            (_, Category::Project) => "[P]",
            (_, Category::Personal) => "[H]",
            (_, Category::Work) => "[W]",
            (_, Category::General) => "[G]",
        }
    }

    #[must_use]
    pub fn deadline(&self) -> &'static str {
        self.icons().meta.deadline
    }

    #[must_use]
    pub fn estimate(&self) -> &'static str {
        self.icons().meta.estimate
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.icons().meta.tag
    }

    #[must_use]
    pub fn busy(&self) -> &'static str {
        self.icons().meta.busy
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().meta.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Unicode);
    }

    #[test]
    fn test_priority_icons_follow_theme() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.priority(Priority::Urgent), "!!!");
        assert_eq!(service.priority(Priority::Low), ".");

        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.priority(Priority::Urgent), "🔴");
    }

    #[test]
    fn test_category_markers() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.category(Category::Assignment), "[A]");
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.category(Category::Study), "📚");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
