//! Full-detail view for an experience or project, drawn over its screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts, InstructionShortcut};
use crate::constants::{
    DETAIL_CURRENT, DETAIL_FEATURED, DETAIL_LINKS, DETAIL_RESPONSIBILITIES, DETAIL_TECHNOLOGIES,
    DETAIL_TECHNOLOGIES_USED, LINK_GITHUB, LINK_LIVE_DEMO,
};
use crate::entities::{Experience, Project};
use crate::ui::components::cards;
use crate::ui::core::AppContext;
use crate::ui::layout::LayoutManager;
use crate::view_state::{Detail, DetailOverlay};

fn experience_lines<'a>(experience: &'a Experience, ctx: &AppContext) -> Vec<Line<'a>> {
    let theme = &ctx.theme;
    let mut lines = Vec::new();

    if experience.current {
        lines.push(Line::from(Span::styled(
            DETAIL_CURRENT,
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(experience.role.as_str(), theme.title())));
    lines.push(Line::from(Span::styled(
        experience.company.as_str(),
        Style::default().fg(theme.primary_light),
    )));
    lines.push(Line::from(vec![
        Span::raw(format!("{} ", ctx.icons.calendar())),
        Span::styled(experience.date_range(), theme.secondary_text()),
        Span::raw(format!("   {} ", ctx.icons.location())),
        Span::styled(experience.location.as_str(), theme.secondary_text()),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(DETAIL_RESPONSIBILITIES, theme.title())));
    lines.extend(
        experience
            .description
            .lines()
            .map(|line| Line::from(Span::styled(line, theme.secondary_text()))),
    );
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(DETAIL_TECHNOLOGIES_USED, theme.title())));
    lines.push(cards::tag_line(&experience.tags(), 0, theme.primary_light, ctx));
    lines
}

fn project_lines<'a>(project: &'a Project, ctx: &AppContext) -> Vec<Line<'a>> {
    let theme = &ctx.theme;
    let mut lines = Vec::new();

    if project.featured {
        lines.push(Line::from(Span::styled(
            DETAIL_FEATURED,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(project.title.as_str(), theme.title())));
    lines.extend(
        project
            .description
            .lines()
            .map(|line| Line::from(Span::styled(line, theme.secondary_text()))),
    );
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(DETAIL_TECHNOLOGIES, theme.title())));
    lines.push(cards::tag_line(&project.tags(), 0, theme.secondary, ctx));

    if project.has_links() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(DETAIL_LINKS, theme.title())));
        if let Some(url) = &project.live_url {
            lines.push(Line::from(vec![
                Span::styled(format!("{} {} ", ctx.icons.link(), LINK_LIVE_DEMO), Style::default().fg(theme.primary_light)),
                Span::styled(url.as_str(), theme.muted()),
            ]));
        }
        if let Some(url) = &project.github_url {
            lines.push(Line::from(vec![
                Span::styled(format!("{} {} ", ctx.icons.link(), LINK_GITHUB), Style::default().fg(theme.primary_light)),
                Span::styled(url.as_str(), theme.muted()),
            ]));
        }
    }
    lines
}

fn instructions(detail: &Detail) -> Vec<InstructionShortcut> {
    let mut keys = vec![shortcuts::ESC_CLOSE, shortcuts::SEPARATOR, shortcuts::SCROLL];
    if let Detail::Project(project) = detail {
        if project.live_url.is_some() {
            keys.extend([shortcuts::SEPARATOR, shortcuts::LIVE_DEMO]);
        }
        if project.github_url.is_some() {
            keys.extend([shortcuts::SEPARATOR, shortcuts::SOURCE]);
        }
    }
    keys
}

/// Draw the overlay if it holds a selection. Scroll is clamped to the content.
pub fn render_detail_dialog(f: &mut Frame, area: Rect, ctx: &AppContext, overlay: &mut DetailOverlay) {
    let Some(detail) = overlay.selection().cloned() else {
        return;
    };

    let dialog_area = LayoutManager::centered_rect(80, 85, area);
    f.render_widget(Clear, dialog_area);

    let title = match &detail {
        Detail::Experience(experience) => format!(" {} ", experience.company),
        Detail::Project(_) => format!(" {} ", detail.title()),
    };
    let block = common::create_dialog_block(title, ctx.theme.primary, &ctx.theme);

    let content_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines = match &detail {
        Detail::Experience(experience) => experience_lines(experience, ctx),
        Detail::Project(project) => project_lines(project, ctx),
    };
    let keys = instructions(&detail);

    let total: u16 = lines
        .iter()
        .map(|line| LayoutManager::wrapped_height(&line.to_string(), content_area.width))
        .fold(0, u16::saturating_add);
    let max_scroll = total.saturating_sub(content_area.height);

    let content = Paragraph::new(lines).wrap(Wrap { trim: false }).style(ctx.theme.card());
    let instructions = common::create_instructions_paragraph(&keys, &ctx.theme);

    let scroll = overlay.clamp_scroll(max_scroll);
    f.render_widget(block, dialog_area);
    f.render_widget(content.scroll((scroll, 0)), content_area);
    f.render_widget(instructions, instructions_area);
}
