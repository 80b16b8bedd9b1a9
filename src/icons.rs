//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    #[default]
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Contact actions offered on the contact screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Portfolio,
    Location,
}

/// Profile counters shown as stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Years,
    Projects,
    Companies,
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

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    /// Cycle to the next icon theme in the sequence: Emoji -> Unicode -> Ascii -> Emoji
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Emoji => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Ascii,
            IconTheme::Ascii => IconTheme::Emoji,
        };
    }

    /// Glyph for an achievement icon key. Unknown keys get a medal.
    #[must_use]
    pub fn achievement(&self, key: &str) -> &'static str {
        let key = key.trim().to_ascii_lowercase();
        match self.current_theme {
            IconTheme::Emoji => match key.as_str() {
                "cloud" => "☁️",
                "verified" => "✅",
                "trophy" => "🏆",
                "star" => "⭐",
                "medal" => "🥇",
                "microphone" => "🎤",
                _ => "🏅",
            },
            IconTheme::Unicode => match key.as_str() {
                "cloud" => "☁",
                "verified" => "✓",
                "trophy" => "♛",
                "star" => "★",
                "medal" => "✪",
                "microphone" => "♪",
                _ => "✦",
            },
            IconTheme::Ascii => match key.as_str() {
                "cloud" => "(c)",
                "verified" => "[v]",
                "trophy" => "[T]",
                "star" => "*",
                "medal" => "(1)",
                "microphone" => "(m)",
                _ => "(+)",
            },
        }
    }

    /// Glyph for a skill category. Unknown categories get a light bulb.
    #[must_use]
    pub fn category(&self, category: &str) -> &'static str {
        let category = category.trim().to_ascii_uppercase();
        match self.current_theme {
            IconTheme::Emoji => match category.as_str() {
                "FRONTEND" => "🎨",
                "BACKEND" => "⚙️",
                "DEVOPS" => "🚀",
                "DATABASE" => "🗄️",
                "MOBILE" => "📱",
                "TOOLS" => "🔧",
                _ => "💡",
            },
            IconTheme::Unicode => match category.as_str() {
                "FRONTEND" => "◧",
                "BACKEND" => "⚙",
                "DEVOPS" => "➶",
                "DATABASE" => "⛁",
                "MOBILE" => "▯",
                "TOOLS" => "⚒",
                _ => "◇",
            },
            IconTheme::Ascii => match category.as_str() {
                "FRONTEND" => "<>",
                "BACKEND" => "{}",
                "DEVOPS" => "=>",
                "DATABASE" => "[]",
                "MOBILE" => "[o]",
                "TOOLS" => "%",
                _ => "?",
            },
        }
    }

    #[must_use]
    pub fn contact(&self, action: ContactIcon) -> &'static str {
        match (self.current_theme, action) {
            (IconTheme::Emoji, ContactIcon::Email) => "✉️",
            (IconTheme::Emoji, ContactIcon::Phone) => "📞",
            (IconTheme::Emoji, ContactIcon::LinkedIn) => "💼",
            (IconTheme::Emoji, ContactIcon::GitHub) => "🐙",
            (IconTheme::Emoji, ContactIcon::Portfolio) => "🌐",
            (IconTheme::Emoji, ContactIcon::Location) => "📍",
            (IconTheme::Unicode, ContactIcon::Email) => "✉",
            (IconTheme::Unicode, ContactIcon::Phone) => "☎",
            (IconTheme::Unicode, ContactIcon::LinkedIn) => "in",
            (IconTheme::Unicode, ContactIcon::GitHub) => "⌥",
            (IconTheme::Unicode, ContactIcon::Portfolio) => "◍",
            (IconTheme::Unicode, ContactIcon::Location) => "⌖",
            (IconTheme::Ascii, ContactIcon::Email) => "@",
            (IconTheme::Ascii, ContactIcon::Phone) => "#",
            (IconTheme::Ascii, ContactIcon::LinkedIn) => "in",
            (IconTheme::Ascii, ContactIcon::GitHub) => "gh",
            (IconTheme::Ascii, ContactIcon::Portfolio) => "www",
            (IconTheme::Ascii, ContactIcon::Location) => "loc",
        }
    }

    #[must_use]
    pub fn stat(&self, stat: StatIcon) -> &'static str {
        match (self.current_theme, stat) {
            (IconTheme::Emoji, StatIcon::Years) => "💼",
            (IconTheme::Emoji, StatIcon::Projects) => "🚀",
            (IconTheme::Emoji, StatIcon::Companies) => "🏢",
            (IconTheme::Unicode, StatIcon::Years) => "◷",
            (IconTheme::Unicode, StatIcon::Projects) => "➶",
            (IconTheme::Unicode, StatIcon::Companies) => "▦",
            (IconTheme::Ascii, StatIcon::Years) => "y",
            (IconTheme::Ascii, StatIcon::Projects) => "p",
            (IconTheme::Ascii, StatIcon::Companies) => "c",
        }
    }

    #[must_use]
    pub fn calendar(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📅",
            IconTheme::Unicode => "◷",
            IconTheme::Ascii => "@",
        }
    }

    #[must_use]
    pub fn location(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📍",
            IconTheme::Unicode => "⌖",
            IconTheme::Ascii => "at",
        }
    }

    /// Timeline marker; the current role gets a filled one.
    #[must_use]
    pub fn timeline_dot(&self, current: bool) -> &'static str {
        match (self.current_theme, current) {
            (IconTheme::Ascii, true) => "(*)",
            (IconTheme::Ascii, false) => "( )",
            (_, true) => "◉",
            (_, false) => "○",
        }
    }

    #[must_use]
    pub fn link(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "🔗",
            IconTheme::Unicode => "↗",
            IconTheme::Ascii => "->",
        }
    }

    /// Spinner frames for loading states
    #[must_use]
    pub fn spinner(&self) -> &'static [&'static str] {
        match self.current_theme {
            IconTheme::Ascii => &["|", "/", "-", "\\"],
            _ => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Emoji);
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Emoji);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        let service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.category("frontend"), "🎨");
        assert_eq!(service.category("QUANTUM"), "💡");
    }
}
