//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into tab bar, content and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Stack blocks of the given heights top to bottom inside `area`,
    /// scrolled down by `scroll` rows.
    ///
    /// Each entry is the part of its block inside `area`, or `None` when the
    /// block is scrolled out of view.
    #[must_use]
    pub fn stack(area: Rect, heights: &[u16], scroll: u16) -> Vec<Option<Rect>> {
        let mut top = area.y as i32 - scroll as i32;
        heights
            .iter()
            .map(|&height| {
                let block_top = top;
                top += height as i32;
                let visible_top = block_top.max(area.y as i32);
                let visible_bottom = (block_top + height as i32).min(area.bottom() as i32);
                (visible_bottom > visible_top).then(|| {
                    Rect::new(
                        area.x,
                        visible_top as u16,
                        area.width,
                        (visible_bottom - visible_top) as u16,
                    )
                })
            })
            .collect()
    }

    /// Scroll offset that keeps rows `top..top + height` of the content inside
    /// a viewport `viewport` rows tall, moving as little as possible.
    #[must_use]
    pub fn scroll_into_view(scroll: u16, top: u16, height: u16, viewport: u16) -> u16 {
        if top < scroll {
            top
        } else if top.saturating_add(height) > scroll.saturating_add(viewport) {
            top.saturating_add(height).saturating_sub(viewport).min(top)
        } else {
            scroll
        }
    }

    /// Top row of the `index`-th block of a uniform list starting at `first`,
    /// saturating at `u16::MAX` for lists taller than the coordinate space.
    #[must_use]
    pub fn row_top(first: u16, index: usize, row_height: u16) -> u16 {
        let index = u16::try_from(index).unwrap_or(u16::MAX);
        first.saturating_add(index.saturating_mul(row_height))
    }

    /// Rows needed to show `text` wrapped at `width` columns
    #[must_use]
    pub fn wrapped_height(text: &str, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let width = width as usize;
        text.lines()
            .map(|line| {
                let chars = line.chars().count();
                chars.div_ceil(width).max(1)
            })
            .sum::<usize>()
            .max(1)
            .min(u16::MAX as usize) as u16
    }

    /// Split `area` into `count` equal columns separated by `gap` cells
    #[must_use]
    pub fn columns(area: Rect, count: u16, gap: u16) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let mut constraints = Vec::with_capacity(count as usize * 2);
        for index in 0..count {
            if index > 0 {
                constraints.push(Constraint::Length(gap));
            }
            constraints.push(Constraint::Ratio(1, count as u32));
        }
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area)
            .iter()
            .step_by(2)
            .copied()
            .collect()
    }
}
