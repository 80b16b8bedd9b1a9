//! Top navigation between the five screens

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

use crate::ui::core::{AppContext, Tab};

pub struct TabBar;

impl TabBar {
    /// Label shown for `tab`, prefixed with its number key
    pub fn label(tab: Tab) -> String {
        format!("{} {}", tab.index() + 1, tab.title())
    }

    pub fn render(f: &mut Frame, area: Rect, ctx: &AppContext, active: Tab) {
        let theme = &ctx.theme;
        let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(Self::label(*tab))).collect();

        let tabs = Tabs::new(titles)
            .select(active.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.surface_light))
                    .title(" vitae ")
                    .title_style(Style::default().fg(theme.primary_light).add_modifier(Modifier::BOLD)),
            )
            .style(theme.base().fg(theme.text_muted))
            .highlight_style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
            .divider("│");

        f.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_carry_number_keys() {
        assert_eq!(TabBar::label(Tab::Profile), "1 Profile");
        assert_eq!(TabBar::label(Tab::Contact), "5 Contact");
    }
}
