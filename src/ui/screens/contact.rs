//! Ways to reach the profile owner. Each row opens a link on Enter.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

use super::{mismatched, move_selection, Mounted, Screen};
use crate::animation::presets;
use crate::constants::{
    CONTACT_FOOTER, CONTACT_INTRO_BODY, CONTACT_INTRO_HIGHLIGHT, CONTACT_INTRO_TITLE, EMPTY_CONTACT,
    ERROR_SCREEN_UNAVAILABLE, HEADER_CONTACT, LOADING_GENERIC, SUBTITLE_CONTACT,
};
use crate::logger::Logger;
use crate::platform::{contact_actions, ContactAction};
use crate::ui::components::cards;
use crate::ui::core::{Action, AppContext, Component, Motion, ScreenData, Tab};
use crate::ui::layout::LayoutManager;
use crate::view_state::LoadState;

const HEADER_HEIGHT: u16 = 3;
const ACTION_HEIGHT: u16 = 4;
const FOOTER_DELAY_MS: u64 = 1000;

pub struct ContactScreen {
    state: Mounted<Vec<ContactAction>>,
    logger: Logger,
    selected: usize,
    scroll: u16,
}

impl ContactScreen {
    pub fn new(motion: Motion, logger: Logger) -> Self {
        Self {
            logger,
            state: Mounted::new(motion),
            selected: 0,
            scroll: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn actions(&self) -> &[ContactAction] {
        self.state.load.ready().map(Vec::as_slice).unwrap_or_default()
    }

    fn intro_lines(ctx: &AppContext) -> Vec<Line<'static>> {
        let theme = &ctx.theme;
        vec![
            Line::from(vec![
                Span::styled(format!("{} ", CONTACT_INTRO_TITLE), theme.title()),
                Span::styled(
                    CONTACT_INTRO_HIGHLIGHT,
                    Style::default().fg(theme.primary_light).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(CONTACT_INTRO_BODY, theme.secondary_text())),
        ]
    }

    fn intro_height(width: u16) -> u16 {
        let inner = width.saturating_sub(4);
        let heading = format!("{} {}", CONTACT_INTRO_TITLE, CONTACT_INTRO_HIGHLIGHT);
        LayoutManager::wrapped_height(&heading, inner)
            .saturating_add(LayoutManager::wrapped_height(CONTACT_INTRO_BODY, inner))
            .saturating_add(2)
    }

    fn render_intro(f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let block = cards::card_block(&ctx.theme, ctx.theme.primary, true).padding(Padding::horizontal(1));
        f.render_widget(
            Paragraph::new(Self::intro_lines(ctx))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );
    }

    fn render_action(f: &mut Frame, rect: Rect, ctx: &AppContext, action: &ContactAction, selected: bool) {
        let theme = &ctx.theme;
        let block = cards::card_block(theme, theme.primary, selected).padding(Padding::horizontal(1));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chevron = if selected { "›" } else { " " };
        let icon = format!("{}  ", ctx.icons.contact(action.icon));
        let lines = vec![
            Line::from(vec![
                Span::styled(icon.clone(), Style::default().fg(theme.primary_light)),
                Span::styled(action.title, theme.title()),
            ]),
            Line::from(vec![
                Span::raw(" ".repeat(icon.chars().count())),
                Span::styled(action.subtitle.clone(), theme.muted()),
            ]),
        ];
        f.render_widget(Paragraph::new(lines), inner);

        let arrow = Rect {
            x: inner.right().saturating_sub(1),
            width: 1.min(inner.width),
            height: 1.min(inner.height),
            ..inner
        };
        f.render_widget(
            Paragraph::new(Span::styled(chevron, Style::default().fg(theme.primary_light))),
            arrow,
        );
    }

    fn render_ready(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let LoadState::Ready(actions) = &self.state.load else {
            return;
        };

        let intro = Self::intro_height(area.width);
        let mut heights = vec![HEADER_HEIGHT, intro, 1];
        heights.extend(actions.iter().map(|_| ACTION_HEIGHT));
        heights.extend([1, 1]);

        let first_action = HEADER_HEIGHT.saturating_add(intro).saturating_add(1);
        if actions.is_empty() || self.selected == 0 {
            self.scroll = 0;
        } else {
            let top = LayoutManager::row_top(first_action, self.selected, ACTION_HEIGHT);
            self.scroll = LayoutManager::scroll_into_view(self.scroll, top, ACTION_HEIGHT, area.height);
        }

        let elapsed = self.state.elapsed();
        let placed = LayoutManager::stack(area, &heights, self.scroll);
        let footer_index = heights.len() - 1;

        let fixed = [(0, 100), (1, 200), (footer_index, FOOTER_DELAY_MS)];
        for (index, delay) in fixed {
            let Some(slot) = placed[index] else {
                continue;
            };
            let Some((target, opacity)) = cards::place(ctx.motion.reveal(delay).sample(elapsed), slot, area) else {
                continue;
            };
            match index {
                0 => cards::render_header(f, target, ctx, HEADER_CONTACT, Some(SUBTITLE_CONTACT)),
                1 => Self::render_intro(f, target, ctx),
                _ => f.render_widget(
                    Paragraph::new(Span::styled(CONTACT_FOOTER, ctx.theme.muted())).alignment(Alignment::Center),
                    target,
                ),
            }
            cards::fade_area(f, target, opacity, &ctx.theme);
        }

        if actions.is_empty() {
            if let Some(slot) = placed[2] {
                cards::render_empty(f, slot, ctx, EMPTY_CONTACT);
            }
            return;
        }

        let template = ctx.motion.reveal(0);
        for (index, (action, slot)) in actions.iter().zip(placed.iter().skip(3)).enumerate() {
            let Some(slot) = *slot else {
                continue;
            };
            let frame = presets::CONTACT_ACTIONS.reveal(index, template).sample(elapsed);
            let Some((target, opacity)) = cards::place(frame, slot, area) else {
                continue;
            };
            Self::render_action(f, target, ctx, action, index == self.selected);
            cards::fade_area(f, target, opacity, &ctx.theme);
        }
    }
}

impl Component for ContactScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let LoadState::Ready(actions) = &self.state.load else {
            return Action::None;
        };

        if key.code == KeyCode::Enter {
            return match actions.get(self.selected) {
                Some(action) => {
                    self.logger.log(format!("Contact: {} -> {}", action.id, action.url));
                    Action::OpenLink {
                        url: action.url.clone(),
                        fallback: action.fallback.to_string(),
                    }
                }
                None => Action::None,
            };
        }

        let len = actions.len();
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
        self.render_ready(f, area, ctx);
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}

impl Screen for ContactScreen {
    fn tab(&self) -> Tab {
        Tab::Contact
    }

    fn apply(&mut self, data: ScreenData) {
        match data {
            ScreenData::Contact(profile) => {
                self.selected = 0;
                self.scroll = 0;
                self.state.settle(contact_actions(&profile));
            }
            other => mismatched(&self.logger, Tab::Contact, &other),
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
