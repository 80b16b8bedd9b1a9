//! Terminal setup and the main render loop

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::backend::ResumeBackend;
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{EventHandler, EventType};

/// Run the TUI until the user quits
pub async fn run_app(config: &Config, backend: Arc<dyn ResumeBackend>, logger: Logger) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    let mut app = AppComponent::new(backend, config, logger);
    let mut event_handler = EventHandler::new();

    app.start();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event = event_handler.next_event(app.is_animating()).await?;
        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                let background_actions = app.process_background_actions();
                needs_render = !background_actions.is_empty() || (app.is_animating() && event_handler.should_render());
                for action in background_actions {
                    app.dispatch(action);
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
