//! Work history as a vertical timeline with a detail overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

use super::{mismatched, move_selection, overlay_key, Mounted, Screen};
use crate::animation::presets;
use crate::constants::{
    BADGE_CURRENT, EMPTY_EXPERIENCE, ERROR_SCREEN_UNAVAILABLE, HEADER_EXPERIENCE, LOADING_GENERIC,
    SUBTITLE_EXPERIENCE, TIMELINE_TAG_LIMIT,
};
use crate::entities::Experience;
use crate::logger::Logger;
use crate::ui::components::{cards, dialogs};
use crate::ui::core::{Action, AppContext, Component, Motion, ScreenData, Tab};
use crate::ui::layout::LayoutManager;
use crate::utils::tags;
use crate::view_state::{Detail, DetailOverlay, LoadState};

const HEADER_HEIGHT: u16 = 3;
const CARD_HEIGHT: u16 = 8;
const CARD_GAP: u16 = 1;
/// Columns reserved left of the cards for the timeline rail
const RAIL_WIDTH: u16 = 4;
const TIMELINE_DURATION_MS: u64 = 500;
const TIMELINE_DISTANCE: f32 = 40.0;

pub struct ExperienceScreen {
    state: Mounted<Vec<Experience>>,
    logger: Logger,
    selected: usize,
    scroll: u16,
    overlay: DetailOverlay,
}

impl ExperienceScreen {
    pub fn new(motion: Motion, logger: Logger) -> Self {
        Self {
            logger,
            state: Mounted::new(motion),
            selected: 0,
            scroll: 0,
            overlay: DetailOverlay::new(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    fn render_card(f: &mut Frame, rect: Rect, ctx: &AppContext, experience: &Experience, selected: bool) {
        let theme = &ctx.theme;
        let block = cards::card_block(theme, theme.primary, selected).padding(Padding::horizontal(1));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut role = vec![Span::styled(experience.role.clone(), theme.title())];
        if experience.current {
            role.push(Span::raw("  "));
            role.push(Span::styled(
                format!(" {} ", BADGE_CURRENT),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(role)), rows[0]);
        f.render_widget(
            Paragraph::new(Span::styled(
                experience.company.clone(),
                Style::default().fg(theme.primary_light),
            )),
            rows[1],
        );
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} {}", ctx.icons.calendar(), experience.date_range()), theme.muted()),
                Span::styled(format!("   {} {}", ctx.icons.location(), experience.location), theme.muted()),
            ])),
            rows[2],
        );
        f.render_widget(
            Paragraph::new(experience.description.clone())
                .style(theme.secondary_text())
                .wrap(Wrap { trim: true }),
            rows[3],
        );

        let (shown, hidden) = tags::preview(&experience.technologies, TIMELINE_TAG_LIMIT);
        f.render_widget(Paragraph::new(cards::tag_line(&shown, hidden, theme.secondary, ctx)), rows[4]);
    }

    fn render_rail(f: &mut Frame, rect: Rect, ctx: &AppContext, experience: &Experience) {
        let color = if experience.current {
            ctx.theme.success
        } else {
            ctx.theme.primary
        };
        let mut lines = vec![Line::from(Span::styled(
            ctx.icons.timeline_dot(experience.current),
            Style::default().fg(color),
        ))];
        lines.extend((1..rect.height).map(|_| Line::from(Span::styled("│", ctx.theme.muted()))));
        f.render_widget(Paragraph::new(lines), rect);
    }

    fn render_timeline(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let LoadState::Ready(experiences) = &self.state.load else {
            return;
        };
        if experiences.is_empty() {
            cards::render_empty(f, area, ctx, EMPTY_EXPERIENCE);
            return;
        }

        let mut heights = vec![HEADER_HEIGHT];
        heights.extend(experiences.iter().map(|_| CARD_HEIGHT + CARD_GAP));

        let selected_top = LayoutManager::row_top(HEADER_HEIGHT, self.selected, CARD_HEIGHT + CARD_GAP);
        self.scroll = LayoutManager::scroll_into_view(self.scroll, selected_top, CARD_HEIGHT, area.height);
        if self.selected == 0 {
            self.scroll = 0;
        }

        let elapsed = self.state.elapsed();
        let placed = LayoutManager::stack(area, &heights, self.scroll);

        if let Some(Some(header)) = placed.first() {
            let frame = ctx.motion.reveal(100).sample(elapsed);
            if let Some((target, opacity)) = cards::place(frame, *header, area) {
                cards::render_header(f, target, ctx, HEADER_EXPERIENCE, Some(SUBTITLE_EXPERIENCE));
                cards::fade_area(f, target, opacity, &ctx.theme);
            }
        }

        let template = ctx
            .motion
            .reveal(0)
            .duration_ms(TIMELINE_DURATION_MS)
            .distance(TIMELINE_DISTANCE);
        for (index, (experience, slot)) in experiences.iter().zip(placed.into_iter().skip(1)).enumerate() {
            let Some(slot) = slot else {
                continue;
            };
            let frame = presets::TIMELINE.reveal(index, template).sample(elapsed);
            let Some((target, opacity)) = cards::place(frame, slot, area) else {
                continue;
            };
            let rail = Rect {
                width: RAIL_WIDTH.min(target.width),
                ..target
            };
            let card = Rect {
                x: target.x + rail.width,
                width: target.width.saturating_sub(rail.width),
                height: target.height.saturating_sub(CARD_GAP).max(1),
                ..target
            };
            Self::render_rail(f, rail, ctx, experience);
            Self::render_card(f, card, ctx, experience, index == self.selected);
            cards::fade_area(f, target, opacity, &ctx.theme);
        }
    }
}

impl Component for ExperienceScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.overlay.is_visible() {
            overlay_key(&mut self.overlay, key);
            return Action::None;
        }

        let LoadState::Ready(experiences) = &self.state.load else {
            return Action::None;
        };

        if key.code == KeyCode::Enter {
            return match experiences.get(self.selected) {
                Some(experience) => {
                    self.logger.log(format!("Experience: opened details for '{}'", experience.role));
                    self.overlay.select(Detail::Experience(experience.clone()));
                    Action::HapticTap
                }
                None => Action::None,
            };
        }

        let len = experiences.len();
        move_selection(&mut self.selected, len, key);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let area = rect.inner(Margin::new(2, 1));
        f.render_widget(Paragraph::new("").style(ctx.theme.base()), rect);

        match &self.state.load {
            LoadState::Loading => cards::render_loading(f, area, ctx, &self.state.clock, LOADING_GENERIC),
            LoadState::Failed(error) => cards::render_error(f, area, ctx, ERROR_SCREEN_UNAVAILABLE, error),
            LoadState::Ready(_) => {}
        }
        self.render_timeline(f, area, ctx);

        dialogs::render_detail_dialog(f, rect, ctx, &mut self.overlay);
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}

impl Screen for ExperienceScreen {
    fn tab(&self) -> Tab {
        Tab::Experience
    }

    fn apply(&mut self, data: ScreenData) {
        match data {
            ScreenData::Experience(experiences) => {
                self.selected = 0;
                self.scroll = 0;
                self.overlay.dismiss();
                self.state.settle(experiences);
            }
            other => mismatched(&self.logger, Tab::Experience, &other),
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

    fn captures_input(&self) -> bool {
        self.overlay.is_visible()
    }
}
