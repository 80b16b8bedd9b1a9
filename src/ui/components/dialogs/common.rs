use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::theme::Theme;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, accent: Color, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(accent))
        .style(theme.card())
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, theme.muted()));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Draw the vertical scrollbar used by every scrollable dialog
pub fn render_scrollbar(f: &mut Frame, area: Rect, state: &mut ScrollbarState, theme: &Theme) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(theme.muted())
        .thumb_style(Style::default().fg(theme.text));

    f.render_stateful_widget(scrollbar, area, state);
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
    pub const ANY_KEY: InstructionShortcut = ("Any key", Color::Cyan, " Continue");
    pub const LIVE_DEMO: InstructionShortcut = ("l", Color::Magenta, " Live demo");
    pub const SOURCE: InstructionShortcut = ("g", Color::Magenta, " GitHub");
}
