//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::icons::IconTheme;
use crate::ui::core::{AppContext, Tab};

/// What the status bar reflects on each frame
#[derive(Debug, Clone, Copy)]
pub struct StatusInfo<'a> {
    pub active_tab: Tab,
    pub loading: bool,
    pub error: Option<&'a str>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    fn shortcuts(tab: Tab) -> &'static str {
        match tab {
            Tab::Profile => "j/k: scroll • r: reload • ?: help • q: quit",
            Tab::Experience | Tab::Projects => "j/k: select • Enter: details • r: reload • ?: help • q: quit",
            Tab::Skills => "←/→: category • r: reload • ?: help • q: quit",
            Tab::Contact => "j/k: select • Enter: open • ?: help • q: quit",
        }
    }

    fn theme_name(theme: IconTheme) -> &'static str {
        match theme {
            IconTheme::Emoji => "emoji",
            IconTheme::Unicode => "unicode",
            IconTheme::Ascii => "ascii",
        }
    }

    /// Text for the current state: loading and errors win over shortcuts.
    pub fn status_text(info: &StatusInfo, icons: IconTheme) -> String {
        if info.loading {
            format!("Loading {}...", info.active_tab.title())
        } else if let Some(error) = info.error {
            format!("⚠ {} • r: retry", error)
        } else {
            format!("{} • i: icons ({})", Self::shortcuts(info.active_tab), Self::theme_name(icons))
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, ctx: &AppContext, info: &StatusInfo) {
        let theme = &ctx.theme;
        let status_color = if info.loading {
            theme.warning
        } else if info.error.is_some() {
            theme.error
        } else {
            theme.text_muted
        };

        let status_bar = Paragraph::new(Self::status_text(info, ctx.icons.theme()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color).bg(theme.background));

        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins_over_error() {
        let info = StatusInfo {
            active_tab: Tab::Skills,
            loading: true,
            error: Some("boom"),
        };
        assert_eq!(StatusBar::status_text(&info, IconTheme::Emoji), "Loading Skills...");
    }

    #[test]
    fn test_idle_shows_shortcuts() {
        let info = StatusInfo {
            active_tab: Tab::Contact,
            loading: false,
            error: None,
        };
        let text = StatusBar::status_text(&info, IconTheme::Ascii);
        assert!(text.starts_with("j/k: select"));
        assert!(text.ends_with("(ascii)"));
    }
}
