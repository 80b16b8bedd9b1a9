//! Featured projects as cards, the rest as a compact list.
//!
//! One cursor walks the featured cards first and then the list. Enter opens
//! the detail overlay, where `l` and `g` open the live demo and the source.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

use super::{mismatched, move_selection, overlay_key, Mounted, Screen};
use crate::animation::{presets, ScaleIn};
use crate::constants::{
    BADGE_FEATURED, EMPTY_PROJECTS, ERROR_OPEN_LINK, ERROR_SCREEN_UNAVAILABLE, HEADER_FEATURED,
    HEADER_OTHER_PROJECTS, HEADER_PROJECTS, HINT_DETAILS, LOADING_GENERIC, PROJECT_CARD_TAG_LIMIT,
    SUBTITLE_PROJECTS,
};
use crate::entities::Project;
use crate::logger::Logger;
use crate::ui::components::{cards, dialogs};
use crate::ui::core::{Action, AppContext, Component, Motion, ScreenData, Tab};
use crate::ui::layout::LayoutManager;
use crate::utils::tags;
use crate::view_state::{partition_projects, Detail, DetailOverlay, LoadState};

const HEADER_HEIGHT: u16 = 3;
const FEATURED_HEIGHT: u16 = 8;
const LIST_ITEM_HEIGHT: u16 = 5;
const LIST_TAG_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Header,
    Gap,
    FeaturedTitle,
    Featured(usize),
    OtherTitle,
    Other(usize),
}

impl Piece {
    fn height(self) -> u16 {
        match self {
            Piece::Header => HEADER_HEIGHT,
            Piece::Gap | Piece::FeaturedTitle | Piece::OtherTitle => 1,
            Piece::Featured(_) => FEATURED_HEIGHT,
            Piece::Other(_) => LIST_ITEM_HEIGHT,
        }
    }

    /// Pieces in display order for `featured` cards and `other` list items
    fn layout(featured: usize, other: usize) -> Vec<Piece> {
        let mut pieces = vec![Piece::Header, Piece::Gap];
        if featured > 0 {
            pieces.push(Piece::FeaturedTitle);
            pieces.extend((0..featured).map(Piece::Featured));
            pieces.push(Piece::Gap);
        }
        if other > 0 {
            pieces.push(Piece::OtherTitle);
            pieces.extend((0..other).map(Piece::Other));
        }
        pieces
    }
}

pub struct ProjectsScreen {
    state: Mounted<Vec<Project>>,
    logger: Logger,
    selected: usize,
    scroll: u16,
    overlay: DetailOverlay,
}

impl ProjectsScreen {
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

    /// Projects in cursor order: featured first, then the rest
    fn ordered(projects: &[Project]) -> Vec<&Project> {
        let (featured, other) = partition_projects(projects);
        featured.into_iter().chain(other).collect()
    }

    fn render_featured(f: &mut Frame, rect: Rect, ctx: &AppContext, project: &Project, selected: bool) {
        let theme = &ctx.theme;
        let block = cards::card_block(theme, theme.accent, selected).padding(Padding::horizontal(1));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(project.title.clone(), theme.title()),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", BADGE_FEATURED),
                    Style::default()
                        .fg(theme.background)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            rows[0],
        );
        f.render_widget(
            Paragraph::new(project.description.clone())
                .style(theme.secondary_text())
                .wrap(Wrap { trim: true }),
            rows[1],
        );

        let (shown, hidden) = tags::preview(&project.technologies, PROJECT_CARD_TAG_LIMIT);
        f.render_widget(Paragraph::new(cards::tag_line(&shown, hidden, theme.secondary, ctx)), rows[2]);

        let mut footer = Vec::new();
        if project.has_links() {
            footer.push(Span::styled(format!("{} ", ctx.icons.link()), Style::default().fg(theme.primary_light)));
        }
        footer.push(Span::styled(HINT_DETAILS, theme.muted()));
        f.render_widget(Paragraph::new(Line::from(footer)), rows[3]);
    }

    fn render_list_item(f: &mut Frame, rect: Rect, ctx: &AppContext, project: &Project, selected: bool) {
        let theme = &ctx.theme;
        let block = cards::card_block(theme, theme.primary, selected).padding(Padding::horizontal(1));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let (shown, hidden) = tags::preview(&project.technologies, LIST_TAG_LIMIT);
        let mut title = vec![Span::styled(project.title.clone(), theme.title())];
        if project.has_links() {
            title.push(Span::styled(format!("  {}", ctx.icons.link()), theme.muted()));
        }
        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(project.description.clone(), theme.secondary_text())),
            cards::tag_line(&shown, hidden, theme.secondary, ctx),
        ];
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn render_ready(&mut self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let LoadState::Ready(projects) = &self.state.load else {
            return;
        };
        if projects.is_empty() {
            cards::render_empty(f, area, ctx, EMPTY_PROJECTS);
            return;
        }

        let (featured, other) = partition_projects(projects);
        let pieces = Piece::layout(featured.len(), other.len());
        let heights: Vec<u16> = pieces.iter().map(|piece| piece.height()).collect();

        let cursor_piece = if self.selected < featured.len() {
            Piece::Featured(self.selected)
        } else {
            Piece::Other(self.selected - featured.len())
        };
        let mut top = 0u16;
        for (piece, height) in pieces.iter().zip(&heights) {
            if *piece == cursor_piece {
                self.scroll = LayoutManager::scroll_into_view(self.scroll, top, *height, area.height);
                break;
            }
            top = top.saturating_add(*height);
        }
        if self.selected == 0 {
            self.scroll = 0;
        }

        let elapsed = self.state.elapsed();
        let placed = LayoutManager::stack(area, &heights, self.scroll);
        let list_template = ctx.motion.reveal(0);

        for (piece, slot) in pieces.into_iter().zip(placed) {
            let Some(slot) = slot else {
                continue;
            };
            match piece {
                Piece::Gap => {}
                Piece::Featured(index) => {
                    let frame = ScaleIn::card(presets::PROJECT_CARDS.delay(index)).sample(elapsed);
                    if frame.opacity <= 0.0 {
                        continue;
                    }
                    let rect = frame.apply(slot);
                    Self::render_featured(f, rect, ctx, featured[index], self.selected == index);
                    cards::fade_area(f, rect, frame.opacity, &ctx.theme);
                }
                _ => {
                    let spec = match piece {
                        Piece::Header => ctx.motion.reveal(100),
                        Piece::FeaturedTitle => ctx.motion.reveal(200),
                        Piece::OtherTitle => ctx.motion.reveal(300),
                        Piece::Other(index) => presets::OTHER_PROJECTS.reveal(index, list_template),
                        Piece::Gap | Piece::Featured(_) => continue,
                    };
                    let Some((target, opacity)) = cards::place(spec.sample(elapsed), slot, area) else {
                        continue;
                    };
                    match piece {
                        Piece::Header => {
                            cards::render_header(f, target, ctx, HEADER_PROJECTS, Some(SUBTITLE_PROJECTS))
                        }
                        Piece::FeaturedTitle => cards::render_section_title(f, target, ctx, HEADER_FEATURED),
                        Piece::OtherTitle => cards::render_section_title(f, target, ctx, HEADER_OTHER_PROJECTS),
                        Piece::Other(index) => {
                            let selected = self.selected == featured.len() + index;
                            Self::render_list_item(f, target, ctx, other[index], selected);
                        }
                        Piece::Gap | Piece::Featured(_) => {}
                    }
                    cards::fade_area(f, target, opacity, &ctx.theme);
                }
            }
        }
    }

    /// `l` and `g` inside the overlay
    fn open_link(&self, live: bool) -> Action {
        let Some(Detail::Project(project)) = self.overlay.selection() else {
            return Action::None;
        };
        let url = if live {
            project.live_url.as_ref()
        } else {
            project.github_url.as_ref()
        };
        match url {
            Some(url) => {
                self.logger.log(format!("Projects: opening {} for '{}'", url, project.title));
                Action::OpenLink {
                    url: url.clone(),
                    fallback: ERROR_OPEN_LINK.to_string(),
                }
            }
            None => Action::None,
        }
    }
}

impl Component for ProjectsScreen {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.overlay.is_visible() {
            return match key.code {
                KeyCode::Char('l') => self.open_link(true),
                KeyCode::Char('g') => self.open_link(false),
                _ => {
                    overlay_key(&mut self.overlay, key);
                    Action::None
                }
            };
        }

        let LoadState::Ready(projects) = &self.state.load else {
            return Action::None;
        };
        let ordered = Self::ordered(projects);

        if key.code == KeyCode::Enter {
            return match ordered.get(self.selected) {
                Some(project) => {
                    self.logger.log(format!("Projects: opened details for '{}'", project.title));
                    self.overlay.select(Detail::Project((*project).clone()));
                    Action::HapticTap
                }
                None => Action::None,
            };
        }

        let len = ordered.len();
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

        dialogs::render_detail_dialog(f, rect, ctx, &mut self.overlay);
    }

    fn is_animating(&self) -> bool {
        self.state.is_animating()
    }
}

impl Screen for ProjectsScreen {
    fn tab(&self) -> Tab {
        Tab::Projects
    }

    fn apply(&mut self, data: ScreenData) {
        match data {
            ScreenData::Projects(projects) => {
                self.selected = 0;
                self.scroll = 0;
                self.overlay.dismiss();
                self.state.settle(projects);
            }
            other => mismatched(&self.logger, Tab::Projects, &other),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_skips_empty_sections() {
        assert_eq!(
            Piece::layout(0, 2),
            vec![Piece::Header, Piece::Gap, Piece::OtherTitle, Piece::Other(0), Piece::Other(1)]
        );
        assert_eq!(
            Piece::layout(1, 0),
            vec![Piece::Header, Piece::Gap, Piece::FeaturedTitle, Piece::Featured(0), Piece::Gap]
        );
    }
}
