use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;
use tempfile::NamedTempFile;
use vitae::backend::{FixtureBackend, ResumeBackend};
use vitae::config::{BackendKind, Config};
use vitae::logger::Logger;
use vitae::platform::{LinkOpener, OpenError};
use vitae::ui::core::{DialogType, EventType, Tab};
use vitae::ui::AppComponent;

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            Err(OpenError::Empty)
        } else {
            Ok(())
        }
    }
}

fn resume_document() -> serde_json::Value {
    json!({
        "profile": {
            "fullName": "Ada Lovelace",
            "title": "Analyst",
            "email": "ada@example.com",
            "github": "https://github.com/ada",
            "yearsOfExperience": 12
        },
        "experiences": [
            {"company": "Analytical Engines", "role": "Lead", "current": true, "startDate": "1843"}
        ],
        "skills": {"MATH": [{"name": "Algorithms", "proficiency": 95}]},
        "projects": [
            {"id": 1, "title": "Note G", "featured": true, "liveUrl": "https://notes.example.com"},
            {"id": 2, "title": "Bernoulli", "featured": false}
        ],
        "education": [{"institution": "Home", "startYear": "1830", "endYear": "1835"}],
        "achievements": [{"title": "First program", "icon": "code"}]
    })
}

fn fixture(document: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", document).unwrap();
    file
}

fn config(file: &NamedTempFile, default_tab: &str) -> Config {
    let mut config = Config::default();
    config.api.backend = BackendKind::Fixture;
    config.api.fixture_path = Some(file.path().to_path_buf());
    config.ui.default_tab = default_tab.to_string();
    config.ui.haptics = false;
    config.animation.enabled = false;
    config
}

fn app_for(file: &NamedTempFile, default_tab: &str, opener: Arc<RecordingOpener>) -> AppComponent {
    let config = config(file, default_tab);
    let backend: Arc<dyn ResumeBackend> = Arc::new(FixtureBackend::new(file.path()));
    let mut app = AppComponent::new(backend, &config, Logger::new()).with_link_opener(opener);
    app.start();
    app
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

/// Feed background results to the app until no task is left and the screen settled.
async fn settle(app: &mut AppComponent) {
    for _ in 0..400 {
        // Finished tasks have already sent their action, so an idle check
        // taken before draining guarantees nothing is left behind
        let idle = app.active_task_count() == 0;
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if idle && !app.state().loading {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("app never settled");
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_starts_on_configured_tab() {
    let file = fixture(&resume_document());
    let mut app = app_for(&file, "skills", Arc::default());
    assert!(app.state().loading);

    settle(&mut app).await;
    assert_eq!(app.state().active_tab, Tab::Skills);
    assert_eq!(app.screen().tab(), Tab::Skills);
    assert!(!app.screen().is_loading());
    assert_eq!(app.screen().error(), None);
}

#[tokio::test]
async fn test_unknown_default_tab_falls_back_to_profile() {
    let file = fixture(&resume_document());
    let mut app = app_for(&file, "resume", Arc::default());
    settle(&mut app).await;
    assert_eq!(app.state().active_tab, Tab::Profile);
}

#[tokio::test]
async fn test_result_for_previous_mount_is_dropped() {
    let file = fixture(&resume_document());
    let mut app = app_for(&file, "profile", Arc::default());
    let first_mount = app.state().mount;

    // Leave before the profile load is processed
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().active_tab, Tab::Experience);
    assert!(app.state().mount > first_mount);

    settle(&mut app).await;
    assert_eq!(app.state().stale_results, 1);
    assert_eq!(app.screen().tab(), Tab::Experience);
    assert!(!app.screen().is_loading());
}

#[tokio::test]
async fn test_revisit_remounts_and_fetches_again() {
    let file = fixture(&resume_document());
    let mut app = app_for(&file, "projects", Arc::default());
    settle(&mut app).await;
    let mount = app.state().mount;

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, Tab::Contact);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().active_tab, Tab::Projects);
    assert_eq!(app.state().mount, mount + 2);
    assert!(app.screen().is_loading());

    settle(&mut app).await;
    assert!(!app.screen().is_loading());

    // Switching to the active tab is not a revisit
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.state().mount, mount + 2);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().mount, mount + 3);
    settle(&mut app).await;
}

#[tokio::test]
async fn test_missing_profile_shows_error() {
    let file = fixture(&json!({"experiences": []}));
    let mut app = app_for(&file, "profile", Arc::default());
    settle(&mut app).await;

    assert_eq!(app.state().error_message.as_deref(), Some("Resource not found: profile"));
    assert_eq!(app.screen().error(), Some("Resource not found: profile"));

    // Other screens still work
    press(&mut app, KeyCode::Char('2'));
    settle(&mut app).await;
    assert_eq!(app.screen().error(), None);
    assert_eq!(app.state().error_message, None);
}

#[tokio::test]
async fn test_dialog_gets_keys_first() {
    let file = fixture(&resume_document());
    let mut app = app_for(&file, "profile", Arc::default());
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog_type(), Some(&DialogType::Help));

    // Quit and tab keys stay inside the dialog
    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Char('3'));
    assert!(!app.should_quit());
    assert_eq!(app.state().active_tab, Tab::Profile);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog_type(), None);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_contact_link_failure_shows_notice() {
    let file = fixture(&resume_document());
    let opener = Arc::new(RecordingOpener {
        fail: true,
        ..Default::default()
    });
    let mut app = app_for(&file, "contact", opener.clone());
    settle(&mut app).await;

    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(*opener.opened.lock().unwrap(), vec!["mailto:ada@example.com".to_string()]);
    assert_eq!(
        app.dialog_type(),
        Some(&DialogType::Notice("Could not open email client".to_string()))
    );

    // Any key dismisses the notice
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.dialog_type(), None);
}

#[tokio::test]
async fn test_project_overlay_captures_keys() {
    let file = fixture(&resume_document());
    let opener = Arc::new(RecordingOpener::default());
    let mut app = app_for(&file, "projects", opener.clone());
    settle(&mut app).await;

    press(&mut app, KeyCode::Enter);
    assert!(app.screen().captures_input());

    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Tab);
    assert!(!app.should_quit());
    assert_eq!(app.state().active_tab, Tab::Projects);

    press(&mut app, KeyCode::Char('l'));
    settle(&mut app).await;
    assert_eq!(*opener.opened.lock().unwrap(), vec!["https://notes.example.com".to_string()]);
    assert_eq!(app.dialog_type(), None);

    press(&mut app, KeyCode::Esc);
    assert!(!app.screen().captures_input());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, Tab::Contact);
}

#[tokio::test]
async fn test_renders_tabs_and_profile() {
    let file = fixture(&resume_document());
    let mut app = app_for(&file, "profile", Arc::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    assert!(buffer_text(&terminal).contains("Loading Profile..."));

    settle(&mut app).await;
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Ada Lovelace"));
    assert!(text.contains("Experience"));
    assert!(!app.is_animating());
}
