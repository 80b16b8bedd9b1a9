//! Color and spacing registry.
//!
//! Built once at startup and handed to every screen by reference.

use ratatui::style::{Color, Modifier, Style};

use crate::utils::color::{hex_or, with_opacity};

/// Spacing steps in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { xs: 0, sm: 1, md: 2, lg: 3 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub surface_light: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_light: Color,
    pub secondary: Color,
    pub secondary_light: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub spacing: Spacing,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The deep-space palette the resume is designed around.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x0A, 0x0A, 0x1A),
            surface: Color::Rgb(0x12, 0x12, 0x2A),
            surface_light: Color::Rgb(0x1A, 0x1A, 0x3E),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_secondary: Color::Rgb(0xA0, 0xA0, 0xC0),
            text_muted: Color::Rgb(0x6B, 0x6B, 0x8D),
            primary: Color::Rgb(0x7C, 0x4D, 0xFF),
            primary_light: Color::Rgb(0xB3, 0x88, 0xFF),
            secondary: Color::Rgb(0x00, 0xE5, 0xFF),
            secondary_light: Color::Rgb(0x84, 0xFF, 0xFF),
            accent: Color::Rgb(0xFF, 0x40, 0x81),
            success: Color::Rgb(0x00, 0xE6, 0x76),
            warning: Color::Rgb(0xFF, 0xAB, 0x40),
            error: Color::Rgb(0xFF, 0x52, 0x52),
            spacing: Spacing::default(),
        }
    }

    /// Accent color for a skill category. Unknown categories use the primary color.
    pub fn category_color(&self, category: &str) -> Color {
        let hex = match category.trim().to_ascii_uppercase().as_str() {
            "FRONTEND" => "#7C4DFF",
            "BACKEND" => "#00E5FF",
            "DEVOPS" => "#FF4081",
            "DATABASE" => "#FFAB40",
            "MOBILE" => "#00E676",
            "TOOLS" => "#84FFFF",
            _ => return self.primary,
        };
        hex_or(hex, self.primary)
    }

    /// Blend `color` toward the background by `opacity` (0 = background, 1 = color).
    pub fn fade(&self, color: Color, opacity: f32) -> Color {
        with_opacity(color, self.background, opacity)
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn secondary_text(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
