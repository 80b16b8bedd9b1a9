use std::sync::Arc;

use crate::backend::ResumeBackend;
use crate::config::Config;
use crate::logger::Logger;
use crate::platform::{Haptics, LinkOpener, SystemLinkOpener};
use crate::ui::components::{DialogComponent, StatusBar, StatusInfo, TabBar};
use crate::ui::core::{
    actions::{Action, DialogType, MountId, Tab},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::screens::{self, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub active_tab: Tab,
    /// Mount id of the screen currently shown
    pub mount: MountId,
    pub loading: bool,
    pub error_message: Option<String>,
    /// Load results that arrived for a screen that was already gone
    pub stale_results: usize,
}

pub struct AppComponent {
    // Component composition
    screen: Box<dyn Screen>,
    dialog: DialogComponent,
    ctx: AppContext,

    // Application state
    state: AppState,

    // Services
    backend: Arc<dyn ResumeBackend>,
    opener: Arc<dyn LinkOpener>,
    haptics: Haptics,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    next_mount: MountId,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn ResumeBackend>, config: &Config, logger: Logger) -> Self {
        let ctx = AppContext::new(config);
        let active_tab = Tab::from_key(&config.ui.default_tab).unwrap_or_default();
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            screen: screens::mount(active_tab, ctx.motion, logger.clone()),
            dialog: DialogComponent::new(logger.clone()),
            ctx,
            state: AppState {
                active_tab,
                ..Default::default()
            },
            backend,
            opener: Arc::new(SystemLinkOpener),
            haptics: Haptics::new(config.ui.haptics),
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            next_mount: 0,
        }
    }

    /// Replace the platform link opener, e.g. with a recording one in tests
    pub fn with_link_opener(mut self, opener: Arc<dyn LinkOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> &dyn Screen {
        self.screen.as_ref()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Mount the start tab. Must run inside the tokio runtime.
    pub fn start(&mut self) {
        self.logger.log(format!("AppComponent: Starting on {}", self.state.active_tab.title()));
        self.mount(self.state.active_tab);
    }

    /// Drop the current screen, create a fresh one for `tab` and start its fetch.
    fn mount(&mut self, tab: Tab) {
        self.next_mount += 1;
        let mount = self.next_mount;

        self.state.active_tab = tab;
        self.state.mount = mount;
        self.state.loading = true;
        self.state.error_message = None;
        self.screen = screens::mount(tab, self.ctx.motion, self.logger.clone());

        self.logger
            .log(format!("Navigation: Mounted {} (mount {})", tab.title(), mount));
        self.task_manager.spawn_screen_load(self.backend.clone(), tab, mount);
    }

    /// Whether a load result belongs to the screen that is mounted now
    fn is_current(&self, mount: MountId, tab: Tab) -> bool {
        mount == self.state.mount && tab == self.state.active_tab
    }

    /// Handle global keyboard shortcuts that aren't screen-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading screen".to_string());
                Action::Reload
            }
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PreviousTab,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                Tab::from_index(index).map_or(Action::None, Action::SwitchTab)
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SwitchTab(tab) => {
                if tab != self.state.active_tab {
                    self.mount(tab);
                }
                Action::None
            }
            Action::NextTab => {
                self.mount(self.state.active_tab.next());
                Action::None
            }
            Action::PreviousTab => {
                self.mount(self.state.active_tab.previous());
                Action::None
            }
            Action::Reload => {
                self.mount(self.state.active_tab);
                Action::None
            }
            Action::ScreenLoaded { mount, data } => {
                if !self.is_current(mount, data.tab()) {
                    self.state.stale_results += 1;
                    self.logger.log(format!(
                        "Background: Dropped stale result for {} (mount {}, current {})",
                        data.tab().title(),
                        mount,
                        self.state.mount
                    ));
                    return Action::None;
                }
                self.logger
                    .log(format!("{}: Loaded {}", data.tab().title(), data.describe()));
                self.state.loading = false;
                self.screen.apply(data);
                Action::None
            }
            Action::ScreenFailed { mount, tab, error } => {
                if !self.is_current(mount, tab) {
                    self.state.stale_results += 1;
                    self.logger.log(format!(
                        "Background: Dropped stale failure for {} (mount {})",
                        tab.title(),
                        mount
                    ));
                    return Action::None;
                }
                self.logger.log(format!("{}: Load failed: {}", tab.title(), error));
                self.state.loading = false;
                self.state.error_message = Some(error.clone());
                self.screen.fail(error);
                Action::None
            }
            Action::OpenLink { url, fallback } => {
                self.haptics.impact();
                self.logger.log(format!("Link: Opening {}", url));
                self.task_manager.spawn_link_open(self.opener.clone(), url, fallback);
                Action::None
            }
            Action::HapticTap => {
                self.haptics.impact();
                Action::None
            }
            Action::CycleIconTheme => {
                self.ctx.icons.cycle_icon_theme();
                self.logger
                    .log(format!("Display: Icon theme is now {:?}", self.ctx.icons.theme()));
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                // Dialog component will handle the actual dialog setup
                action
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                action
            }
            Action::None => Action::None,
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Route one action through the dialog and then the app.
    pub fn dispatch(&mut self, action: Action) {
        let action = self.dialog.update(action);
        let _final_action = self.handle_app_action(action);
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    // A screen with an open overlay keeps every key
                    let captured = self.screen.captures_input();
                    let screen_action = self.screen.handle_key_events(key);
                    if captured || !matches!(screen_action, Action::None) {
                        screen_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }

    /// Whether the next frame should come at frame rate
    pub fn is_animating(&self) -> bool {
        self.screen.is_animating()
    }

    /// Draw the tab bar, the active screen, the status bar and any dialog.
    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [tabs, content, status] = LayoutManager::main_layout(rect);

        TabBar::render(f, tabs, &self.ctx, self.state.active_tab);
        self.screen.render(f, content, &self.ctx);

        let info = StatusInfo {
            active_tab: self.state.active_tab,
            loading: self.screen.is_loading(),
            error: self.screen.error(),
        };
        StatusBar::render(f, status, &self.ctx, &info);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect, &self.ctx);
        }
    }
}
