//! Home screen: hero, stats, about, education and achievements.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use std::time::Duration;

use super::{mismatched, Mounted, Screen};
use crate::animation::{presets, RevealSpec, ScaleIn};
use crate::constants::{
    ERROR_PROFILE_UNAVAILABLE, HEADER_ABOUT, HEADER_ACHIEVEMENTS, HEADER_EDUCATION, LOADING_PROFILE,
};
use crate::icons::StatIcon;
use crate::logger::Logger;
use crate::ui::components::cards;
use crate::ui::core::{Action, AppContext, Component, HomeData, Motion, ScreenData, Tab};
use crate::ui::layout::LayoutManager;
use crate::view_state::LoadState;

const AVATAR_WIDTH: u16 = 9;
const STAT_CARD_HEIGHT: u16 = 4;

/// One vertically stacked piece of the home screen
#[derive(Debug, Clone, Copy)]
enum Piece {
    Avatar,
    Name,
    Title,
    Subtitle,
    Location,
    Stats,
    Gap,
    SectionTitle(&'static str),
    Bio,
    Education(usize),
    Achievement(usize),
}

impl Piece {
    fn layout(data: &HomeData) -> Vec<Piece> {
        let mut pieces = vec![
            Piece::Avatar,
            Piece::Name,
            Piece::Title,
            Piece::Subtitle,
            Piece::Location,
            Piece::Gap,
            Piece::Stats,
            Piece::Gap,
            Piece::SectionTitle(HEADER_ABOUT),
            Piece::Bio,
        ];

        if !data.education.is_empty() {
            pieces.extend([Piece::Gap, Piece::SectionTitle(HEADER_EDUCATION)]);
            pieces.extend((0..data.education.len()).map(Piece::Education));
        }
        if !data.achievements.is_empty() {
            pieces.extend([Piece::Gap, Piece::SectionTitle(HEADER_ACHIEVEMENTS)]);
            pieces.extend((0..data.achievements.len()).map(Piece::Achievement));
        }
        pieces
    }

    fn height(self, data: &HomeData, width: u16) -> u16 {
        let inner = width.saturating_sub(4);
        match self {
            Piece::Avatar => 3,
            Piece::Name | Piece::Title | Piece::Location | Piece::Gap | Piece::SectionTitle(_) => 1,
            Piece::Subtitle => LayoutManager::wrapped_height(&data.profile.subtitle, width),
            Piece::Stats => STAT_CARD_HEIGHT,
            Piece::Bio => LayoutManager::wrapped_height(&data.profile.bio, inner) + 2,
            Piece::Education(_) => 6,
            Piece::Achievement(index) => {
                let description = data.achievements.get(index).map_or("", |a| a.description.as_str());
                LayoutManager::wrapped_height(description, inner) + 4
            }
        }
    }

    fn reveal(self, motion: &Motion) -> RevealSpec {
        match self {
            Piece::Avatar => motion.reveal(100),
            Piece::Name => motion.reveal(300),
            Piece::Title => motion.reveal(400),
            Piece::Subtitle => motion.reveal(500),
            Piece::Location => motion.reveal(600),
            Piece::Stats => motion.reveal(700),
            Piece::Gap | Piece::SectionTitle(_) => motion.reveal(200),
            Piece::Bio => motion.reveal(300),
            Piece::Education(index) => presets::EDUCATION.reveal(index, motion.reveal(0)),
            Piece::Achievement(index) => presets::ACHIEVEMENTS.reveal(index, motion.reveal(0)),
        }
    }
}

pub struct ProfileScreen {
    state: Mounted<HomeData>,
    logger: Logger,
    scroll: u16,
}

impl ProfileScreen {
    pub fn new(motion: Motion, logger: Logger) -> Self {
        Self {
            logger,
            state: Mounted::new(motion),
            scroll: 0,
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn centered(text: Line<'static>) -> Paragraph<'static> {
        Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true })
    }

    fn render_stats(f: &mut Frame, area: Rect, ctx: &AppContext, data: &HomeData, elapsed: Duration) {
        let profile = &data.profile;
        let stats = [
            (StatIcon::Years, profile.years_of_experience, "Years Exp", ctx.theme.primary),
            (StatIcon::Projects, profile.projects_completed, "Projects", ctx.theme.secondary),
            (StatIcon::Companies, profile.companies_worked, "Companies", ctx.theme.accent),
        ];

        let columns = LayoutManager::columns(area, stats.len() as u16, 1);
        for (index, ((icon, value, label, accent), column)) in stats.into_iter().zip(columns).enumerate() {
            let frame = ScaleIn::stat(presets::STAT_CARDS.delay(index)).sample(elapsed);
            if frame.opacity <= 0.0 {
                continue;
            }
            let rect = frame.apply(column);
            let block = cards::card_block(&ctx.theme, accent, true);
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", ctx.icons.stat(icon), value),
                    ctx.theme.title(),
                )),
                Line::from(Span::styled(label, ctx.theme.muted())),
            ];
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), rect);
            cards::fade_area(f, rect, frame.opacity, &ctx.theme);
        }
    }

    fn render_piece(f: &mut Frame, rect: Rect, ctx: &AppContext, data: &HomeData, piece: Piece, elapsed: Duration) {
        let theme = &ctx.theme;
        let profile = &data.profile;
        match piece {
            Piece::Avatar => {
                let width = AVATAR_WIDTH.min(rect.width);
                let avatar = Rect {
                    x: rect.x + rect.width.saturating_sub(width) / 2,
                    width,
                    ..rect
                };
                let ring = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.primary));
                f.render_widget(
                    Paragraph::new(Span::styled(profile.initials(), theme.title().fg(theme.primary_light)))
                        .alignment(Alignment::Center)
                        .block(ring),
                    avatar,
                );
            }
            Piece::Name => f.render_widget(
                Self::centered(Line::from(Span::styled(profile.full_name.clone(), theme.title()))),
                rect,
            ),
            Piece::Title => f.render_widget(
                Self::centered(Line::from(Span::styled(
                    format!(" {} ", profile.title),
                    Style::default()
                        .fg(theme.text)
                        .bg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ))),
                rect,
            ),
            Piece::Subtitle => f.render_widget(
                Self::centered(Line::from(Span::styled(profile.subtitle.clone(), theme.secondary_text()))),
                rect,
            ),
            Piece::Location => f.render_widget(
                Self::centered(Line::from(Span::styled(
                    format!("{} {}", ctx.icons.location(), profile.location),
                    theme.muted(),
                ))),
                rect,
            ),
            Piece::Stats => Self::render_stats(f, rect, ctx, data, elapsed),
            Piece::Gap => {}
            Piece::SectionTitle(title) => cards::render_section_title(f, rect, ctx, title),
            Piece::Bio => f.render_widget(
                Paragraph::new(profile.bio.clone())
                    .style(theme.secondary_text())
                    .wrap(Wrap { trim: true })
                    .block(cards::card_block(theme, theme.primary, false).padding(Padding::horizontal(1))),
                rect,
            ),
            Piece::Education(index) => {
                let Some(education) = data.education.get(index) else {
                    return;
                };
                let mut meta = vec![Span::styled(
                    format!("{} {}", ctx.icons.calendar(), education.year_range()),
                    theme.muted(),
                )];
                if let Some(grade) = &education.grade {
                    meta.push(Span::styled(format!("   🎯 {}", grade), Style::default().fg(theme.success)));
                }
                let lines = vec![
                    Line::from(Span::styled(education.degree.clone(), theme.title())),
                    Line::from(Span::styled(education.field.clone(), theme.secondary_text())),
                    Line::from(Span::styled(
                        education.institution.clone(),
                        Style::default().fg(theme.primary_light),
                    )),
                    Line::from(meta),
                ];
                f.render_widget(
                    Paragraph::new(lines).block(
                        cards::card_block(theme, theme.primary, false).padding(Padding::horizontal(1)),
                    ),
                    rect,
                );
            }
            Piece::Achievement(index) => {
                let Some(achievement) = data.achievements.get(index) else {
                    return;
                };
                let accent = if index % 2 == 0 { theme.primary } else { theme.accent };
                let mut lines = vec![Line::from(vec![
                    Span::raw(format!("{} ", ctx.icons.achievement(&achievement.icon))),
                    Span::styled(achievement.title.clone(), theme.title()),
                ])];
                lines.extend(
                    achievement
                        .description
                        .lines()
                        .map(|line| Line::from(Span::styled(line.to_string(), theme.secondary_text()))),
                );
                lines.push(Line::from(Span::styled(
                    achievement.year.clone(),
                    Style::default().fg(theme.secondary),
                )));
                f.render_widget(
                    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                        cards::card_block(theme, accent, false).padding(Padding::horizontal(1)),
                    ),
                    rect,
                );
            }
        }
    }
}

impl Component for ProfileScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.state.load.ready().is_none() {
            return Action::None;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = u16::MAX,
            _ => return Action::None,
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let area = rect.inner(Margin::new(2, 1));
        f.render_widget(Paragraph::new("").style(ctx.theme.base()), rect);

        let data = match &self.state.load {
            LoadState::Loading => {
                cards::render_loading(f, area, ctx, &self.state.clock, LOADING_PROFILE);
                return;
            }
            LoadState::Failed(error) => {
                cards::render_error(f, area, ctx, ERROR_PROFILE_UNAVAILABLE, error);
                return;
            }
            LoadState::Ready(data) => data,
        };

        let pieces = Piece::layout(data);
        let heights: Vec<u16> = pieces.iter().map(|piece| piece.height(data, area.width)).collect();
        let total: u16 = heights.iter().fold(0, |sum, h| sum.saturating_add(*h));
        self.scroll = self.scroll.min(total.saturating_sub(area.height));

        let elapsed = self.state.elapsed();
        let placed = LayoutManager::stack(area, &heights, self.scroll);
        for (piece, slot) in pieces.into_iter().zip(placed) {
            let Some(slot) = slot else {
                continue;
            };
            let frame = piece.reveal(&ctx.motion).sample(elapsed);
            if let Some((target, opacity)) = cards::place(frame, slot, area) {
                Self::render_piece(f, target, ctx, data, piece, elapsed);
                cards::fade_area(f, target, opacity, &ctx.theme);
            }
        }
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}

impl Screen for ProfileScreen {
    fn tab(&self) -> Tab {
        Tab::Profile
    }

    fn apply(&mut self, data: ScreenData) {
        match data {
            ScreenData::Home(home) => {
                self.scroll = 0;
                self.state.settle(*home);
            }
            other => mismatched(&self.logger, Tab::Profile, &other),
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
