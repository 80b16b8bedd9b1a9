//! Building blocks shared by the resume screens: card frames, tag chips,
//! section headers and the loading/error/empty placeholders.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::animation::{MountClock, RevealFrame};
use crate::constants::{ERROR_BACKEND_HINT, HINT_RETRY, SPINNER_FRAME_MS};
use crate::theme::Theme;
use crate::ui::core::AppContext;

/// Where a sampled reveal lands, or `None` while it is still invisible or
/// pushed entirely outside `bounds`.
pub fn place(frame: RevealFrame, area: Rect, bounds: Rect) -> Option<(Rect, f32)> {
    if !frame.is_visible() {
        return None;
    }
    frame.shift(area, bounds).map(|rect| (rect, frame.opacity))
}

/// Blend everything already drawn in `area` toward the background.
pub fn fade_area(f: &mut Frame, area: Rect, opacity: f32, theme: &Theme) {
    if opacity >= 1.0 {
        return;
    }
    let buffer = f.buffer_mut();
    let area = area.intersection(buffer.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                cell.fg = theme.fade(cell.fg, opacity);
                cell.bg = theme.fade(cell.bg, opacity);
            }
        }
    }
}

/// Rounded card frame; the selected card gets an accent border.
pub fn card_block<'a>(theme: &Theme, accent: Color, selected: bool) -> Block<'a> {
    let border = if selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.surface_light)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(theme.card())
}

/// Technology chips followed by a "+N" chip when some were left out.
pub fn tag_line(tags: &[&str], hidden: usize, color: Color, ctx: &AppContext) -> Line<'static> {
    let chip = Style::default().fg(color).bg(ctx.theme.surface_light);
    let mut spans = Vec::with_capacity(tags.len() * 2 + 1);
    for tag in tags {
        spans.push(Span::styled(format!(" {} ", tag), chip));
        spans.push(Span::raw(" "));
    }
    if hidden > 0 {
        spans.push(Span::styled(format!(" +{} ", hidden), ctx.theme.muted().bg(ctx.theme.surface_light)));
    }
    Line::from(spans)
}

/// Screen title with an optional subtitle underneath (two rows).
pub fn render_header(f: &mut Frame, area: Rect, ctx: &AppContext, title: &str, subtitle: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        ctx.theme.title().fg(ctx.theme.text),
    ))];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(subtitle.to_string(), ctx.theme.secondary_text())));
    }
    f.render_widget(Paragraph::new(lines).style(ctx.theme.base()), area);
}

/// One-row section title inside a screen
pub fn render_section_title(f: &mut Frame, area: Rect, ctx: &AppContext, title: &str) {
    let line = Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(ctx.theme.text).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(line).style(ctx.theme.base()), area);
}

/// Current spinner glyph for a load that started with `clock`
pub fn spinner_frame(ctx: &AppContext, clock: &MountClock) -> &'static str {
    let frames = ctx.icons.spinner();
    let step = clock.elapsed().as_millis() / u128::from(SPINNER_FRAME_MS);
    frames[(step % frames.len() as u128) as usize]
}

fn centered_message(f: &mut Frame, area: Rect, ctx: &AppContext, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new("").style(ctx.theme.base()), area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(ctx.theme.base()),
        chunks[1],
    );
}

pub fn render_loading(f: &mut Frame, area: Rect, ctx: &AppContext, clock: &MountClock, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_frame(ctx, clock),
            Style::default().fg(ctx.theme.primary),
        )),
        Line::default(),
        Line::from(Span::styled(message.to_string(), ctx.theme.secondary_text())),
    ];
    centered_message(f, area, ctx, lines);
}

/// Error placeholder with the backend's message and a hint to check the connection
pub fn render_error(f: &mut Frame, area: Rect, ctx: &AppContext, title: &str, error: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(ctx.theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(error.to_string(), ctx.theme.secondary_text())),
        Line::from(Span::styled(ERROR_BACKEND_HINT, ctx.theme.muted())),
        Line::default(),
        Line::from(Span::styled(HINT_RETRY, ctx.theme.muted())),
    ];
    centered_message(f, area, ctx, lines);
}

pub fn render_empty(f: &mut Frame, area: Rect, ctx: &AppContext, message: &str) {
    centered_message(
        f,
        area,
        ctx,
        vec![Line::from(Span::styled(message.to_string(), ctx.theme.muted()))],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Offset;

    #[test]
    fn test_invisible_frame_is_not_placed() {
        let frame = RevealFrame {
            opacity: 0.0,
            offset: Offset::ZERO,
        };
        let area = Rect::new(0, 0, 10, 3);
        assert!(place(frame, area, area).is_none());
        assert_eq!(place(RevealFrame::SETTLED, area, area), Some((area, 1.0)));
    }

    #[test]
    fn test_tag_line_counts_hidden() {
        let ctx = AppContext::default();
        let line = tag_line(&["Rust", "Tokio"], 3, ctx.theme.primary, &ctx);
        let text = line.to_string();
        assert!(text.contains(" Rust "));
        assert!(text.ends_with(" +3 "));
    }
}
