//! Skills grouped by category, with proficiency bars for the active one.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

use std::time::Duration;

use super::{mismatched, Mounted, Screen};
use crate::animation::{presets, MountClock};
use crate::constants::{
    ANIMATION_HORIZON_MS, EMPTY_SKILLS, ERROR_SCREEN_UNAVAILABLE, HEADER_SKILLS, LOADING_GENERIC, SUBTITLE_SKILLS,
};
use crate::logger::Logger;
use crate::ui::components::cards;
use crate::ui::core::{Action, AppContext, Component, Motion, ScreenData, Tab};
use crate::ui::layout::LayoutManager;
use crate::view_state::{CategoryProjection, LoadState};

const HEADER_HEIGHT: u16 = 3;
const STATS_HEIGHT: u16 = 4;
/// Rows per skill: name and percentage, then the bar
const SKILL_ROWS: u16 = 2;

pub struct SkillsScreen {
    state: Mounted<CategoryProjection>,
    logger: Logger,
    /// Restarted whenever the active category changes so the bars grow again
    bars_clock: MountClock,
    motion: Motion,
    scroll: u16,
}

impl SkillsScreen {
    pub fn new(motion: Motion, logger: Logger) -> Self {
        Self {
            logger,
            state: Mounted::new(motion),
            bars_clock: motion.clock(),
            motion,
            scroll: 0,
        }
    }

    fn render_stats(f: &mut Frame, area: Rect, ctx: &AppContext, projection: &CategoryProjection) {
        let stats = projection.stats();
        let theme = &ctx.theme;
        let values = [
            (stats.total_skills.to_string(), "Total Skills", theme.primary_light),
            (format!("{}%", stats.avg_proficiency), "Avg Proficiency", theme.secondary),
            (stats.category_count.to_string(), "Categories", theme.accent),
        ];
        for ((value, label, color), column) in values.into_iter().zip(LayoutManager::columns(area, 3, 1)) {
            let lines = vec![
                Line::from(Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(label, theme.muted())),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .block(cards::card_block(theme, color, false)),
                column,
            );
        }
    }

    fn render_categories(f: &mut Frame, area: Rect, ctx: &AppContext, projection: &CategoryProjection) {
        let theme = &ctx.theme;
        let mut spans = Vec::new();
        for category in projection.categories() {
            let icon = ctx.icons.category(category);
            if projection.active() == Some(category.as_str()) {
                spans.push(Span::styled(
                    format!(" {} {} ({}) ", icon, category, projection.count_for(category)),
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.category_color(category))
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} {} ", icon, category),
                    theme.secondary_text().bg(theme.surface),
                ));
            }
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_bars(&self, f: &mut Frame, area: Rect, ctx: &AppContext, projection: &CategoryProjection) {
        let theme = &ctx.theme;
        let category = projection.active().unwrap_or_default();
        let color = theme.category_color(category);

        let block = cards::card_block(theme, color, true)
            .title(format!(" {} {} ", ctx.icons.category(category), category))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let elapsed = self.bars_clock.elapsed();
        let skills = projection.active_skills();
        let heights = vec![SKILL_ROWS; skills.len()];
        // The card is already clipped by the outer scroll; rows that do not fit are cut.
        for (index, (skill, slot)) in skills.iter().zip(LayoutManager::stack(inner, &heights, 0)).enumerate() {
            let Some(slot) = slot else {
                continue;
            };
            let proficiency = skill.clamped_proficiency();
            let frame = presets::SKILL_BARS.grow(index, proficiency).sample(elapsed);

            let percent = format!("{}%", proficiency);
            let name_width = slot.width.saturating_sub(percent.chars().count() as u16);
            let label = Line::from(vec![
                Span::styled(format!("{:<width$}", skill.name, width = name_width as usize), theme.title()),
                Span::styled(percent, Style::default().fg(color)),
            ]);
            f.render_widget(Paragraph::new(label), Rect { height: 1, ..slot });

            if slot.height > 1 {
                let track = Rect {
                    y: slot.y + 1,
                    height: 1,
                    ..slot
                };
                let filled = frame.filled_cells(track.width);
                let bar = Line::from(vec![
                    Span::styled("█".repeat(filled as usize), Style::default().fg(color)),
                    Span::styled(
                        "░".repeat(track.width.saturating_sub(filled) as usize),
                        Style::default().fg(theme.surface_light),
                    ),
                ]);
                f.render_widget(Paragraph::new(bar), track);
                cards::fade_area(f, track, frame.opacity, theme);
            }
        }
    }

    fn switch_category(&mut self, forward: bool) -> Action {
        let Some(projection) = self.state.load.ready_mut() else {
            return Action::None;
        };
        let changed = if forward {
            projection.next_category()
        } else {
            projection.previous_category()
        };
        if !changed {
            return Action::None;
        }
        self.logger.log(format!("Skills: switched to category {}", projection.active().unwrap_or_default()));
        self.bars_clock = self.motion.clock();
        Action::HapticTap
    }

    fn render_ready(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let LoadState::Ready(projection) = &self.state.load else {
            return;
        };
        if projection.categories().is_empty() {
            cards::render_empty(f, area, ctx, EMPTY_SKILLS);
            return;
        }

        // Two border rows plus SKILL_ROWS per skill
        let card_height = LayoutManager::row_top(2, projection.active_skills().len(), SKILL_ROWS);
        let heights = [HEADER_HEIGHT, STATS_HEIGHT, 1, 1, 1, card_height];
        let total: u16 = heights.iter().fold(0, |sum, h| sum.saturating_add(*h));
        self.scroll = self.scroll.min(total.saturating_sub(area.height));

        let elapsed = self.state.elapsed();
        let placed = LayoutManager::stack(area, &heights, self.scroll);
        let sections = [(0, 100), (1, 200), (3, 300), (5, 400)];
        for (index, delay) in sections {
            let Some(slot) = placed[index] else {
                continue;
            };
            let frame = ctx.motion.reveal(delay).sample(elapsed);
            let Some((target, opacity)) = cards::place(frame, slot, area) else {
                continue;
            };
            match index {
                0 => cards::render_header(f, target, ctx, HEADER_SKILLS, Some(SUBTITLE_SKILLS)),
                1 => Self::render_stats(f, target, ctx, projection),
                3 => Self::render_categories(f, target, ctx, projection),
                _ => self.render_bars(f, target, ctx, projection),
            }
            cards::fade_area(f, target, opacity, &ctx.theme);
        }
    }
}

impl Component for SkillsScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.switch_category(true),
            KeyCode::Left | KeyCode::Char('h') => self.switch_category(false),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let area = rect.inner(Margin::new(2, 1));
        f.render_widget(Paragraph::new("").style(ctx.theme.base()), rect);

        match &self.state.load {
            LoadState::Loading => cards::render_loading(f, area, ctx, &self.state.clock, LOADING_GENERIC),
            LoadState::Failed(error) => cards::render_error(f, area, ctx, ERROR_SCREEN_UNAVAILABLE, error),
            LoadState::Ready(_) => {}
        }
        self.render_ready(f, area, ctx);
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating() || self.bars_clock.is_running(Duration::from_millis(ANIMATION_HORIZON_MS))
    }
}

impl Screen for SkillsScreen {
    fn tab(&self) -> Tab {
        Tab::Skills
    }

    fn apply(&mut self, data: ScreenData) {
        match data {
            ScreenData::Skills(groups) => {
                self.scroll = 0;
                self.state.settle(CategoryProjection::from_groups(groups));
                self.bars_clock = self.motion.clock();
            }
            other => mismatched(&self.logger, Tab::Skills, &other),
        }
    }

    fn fail(&mut self, error: String) {
        self.state.fail(error);
    }

    fn is_loading(&self) -> bool {
        self.state.load.is_loading()
    }

    fn error(&self) -> Option<&str> {
        self.state.load.error()
    }
}
