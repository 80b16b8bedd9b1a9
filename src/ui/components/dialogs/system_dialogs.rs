use crate::constants::{
    DIALOG_TITLE_ERROR, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS, DIALOG_TITLE_NOTICE, LOG_FILE_NOTE, NO_LOGS,
};
use crate::logger::Logger;
use crate::ui::core::AppContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use super::scroll_behavior::ScrollState;

const HELP_CONTENT: &str = r"
VITAE - Terminal Resume
=======================

SCREENS
-------
1-5         Jump to Profile, Experience, Skills, Projects, Contact
Tab         Next screen
Shift+Tab   Previous screen
r           Reload the current screen

SCROLLING
---------
j/k ↑↓      Scroll or move the selection
PageUp/Down Page through content
Home/End    Jump to top or bottom

EXPERIENCE & PROJECTS
---------------------
Enter       Open details for the selected entry
Esc         Close details
l           Open the live demo (project details)
g           Open the GitHub repository (project details)

SKILLS
------
←/→ h/l     Switch skill category

CONTACT
-------
Enter       Open the selected contact option

GENERAL
-------
?           Toggle this help
G           Show logs
i           Change icon theme
q           Quit application
Ctrl+C      Quit application
";

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    ctx: &AppContext,
    title: String,
    accent: Color,
    message: &str,
    scroll: &mut ScrollState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(title, accent, &ctx.theme);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let total_lines = LayoutManager::wrapped_height(message, content_area.width) as usize;
    let visible_height = content_area.height as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(ctx.theme.text))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((offset as u16, 0));

    let instructions = common::create_instructions_paragraph(
        &[shortcuts::ANY_KEY, shortcuts::SEPARATOR, shortcuts::SCROLL],
        &ctx.theme,
    );

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions, instructions_area);

    if total_lines > visible_height {
        common::render_scrollbar(f, content_area, scroll.scrollbar_mut(), &ctx.theme);
    }
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, ctx: &AppContext, message: &str, scroll: &mut ScrollState) {
    let title = format!(" ⚠ {} ", DIALOG_TITLE_ERROR);
    render_message_dialog(f, area, ctx, title, ctx.theme.error, message, scroll);
}

pub fn render_notice_dialog(f: &mut Frame, area: Rect, ctx: &AppContext, message: &str, scroll: &mut ScrollState) {
    let title = format!(" {} {} ", ctx.icons.link(), DIALOG_TITLE_NOTICE);
    render_message_dialog(f, area, ctx, title, ctx.theme.warning, message, scroll);
}

/// Full-screen scrollable text panel shared by help and logs
fn render_text_panel(f: &mut Frame, area: Rect, ctx: &AppContext, title: &str, content: &str, scroll: &mut ScrollState) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = panel_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ctx.theme.primary))
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(ctx.theme.card())
        .alignment(Alignment::Left);

    f.render_widget(paragraph, panel_area);

    if total_lines > visible_height {
        common::render_scrollbar(f, panel_area, scroll.scrollbar_mut(), &ctx.theme);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, ctx: &AppContext, scroll: &mut ScrollState) {
    render_text_panel(f, area, ctx, DIALOG_TITLE_HELP, HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, ctx: &AppContext, logger: &Logger, scroll: &mut ScrollState) {
    let logs = logger.get_logs();
    let mut content = match logger.log_file() {
        Some(path) => format!("{} {}\n\n", LOG_FILE_NOTE, path.display()),
        None => String::new(),
    };
    if logs.is_empty() {
        content.push_str(NO_LOGS);
    } else {
        content.push_str(&logs.join("\n"));
    }
    render_text_panel(f, area, ctx, DIALOG_TITLE_LOGS, &content, scroll);
}
