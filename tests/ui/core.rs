use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use vitae::backend::{BackendError, ResumeBackend};
use vitae::entities::{Achievement, Education, Experience, Profile, Project, SkillGroups};
use vitae::platform::{LinkOpener, OpenError};
use vitae::ui::core::{load_screen, Action, DialogType, EventHandler, ScreenData, Tab, TaskManager};

/// Backend serving canned data, with one collection that always fails
#[derive(Default)]
struct StubBackend {
    failing_achievements: bool,
}

#[async_trait]
impl ResumeBackend for StubBackend {
    fn backend_type(&self) -> &str {
        "stub"
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn get_profile(&self) -> Result<Profile, BackendError> {
        Ok(Profile {
            full_name: "Ada Lovelace".to_string(),
            ..Default::default()
        })
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, BackendError> {
        Ok(vec![Experience::default(), Experience::default()])
    }

    async fn get_skills_by_category(&self) -> Result<SkillGroups, BackendError> {
        Ok(SkillGroups::new())
    }

    async fn get_projects(&self) -> Result<Vec<Project>, BackendError> {
        Ok(Vec::new())
    }

    async fn get_education(&self) -> Result<Vec<Education>, BackendError> {
        Ok(vec![Education::default()])
    }

    async fn get_achievements(&self) -> Result<Vec<Achievement>, BackendError> {
        if self.failing_achievements {
            Err(BackendError::Status {
                code: 500,
                message: "down".to_string(),
            })
        } else {
            Ok(Vec::new())
        }
    }
}

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

#[test]
fn test_tab_navigation_wraps() {
    assert_eq!(Tab::Profile.next(), Tab::Experience);
    assert_eq!(Tab::Contact.next(), Tab::Profile);
    assert_eq!(Tab::Profile.previous(), Tab::Contact);
    assert_eq!(Tab::from_index(3), Some(Tab::Projects));
    assert_eq!(Tab::from_index(5), None);
    for tab in Tab::ALL {
        assert_eq!(Tab::from_index(tab.index()), Some(tab));
        assert_eq!(Tab::from_key(tab.key()), Some(tab));
    }
}

#[test]
fn test_tab_from_key_is_lenient() {
    assert_eq!(Tab::from_key(" Skills "), Some(Tab::Skills));
    assert_eq!(Tab::from_key("home"), None);
}

#[tokio::test]
async fn test_home_load_needs_every_collection() {
    let backend = StubBackend::default();
    let data = load_screen(&backend, Tab::Profile).await.unwrap();
    assert_eq!(data.tab(), Tab::Profile);
    match data {
        ScreenData::Home(home) => {
            assert_eq!(home.profile.full_name, "Ada Lovelace");
            assert_eq!(home.education.len(), 1);
        }
        other => panic!("unexpected payload: {}", other.describe()),
    }

    let failing = StubBackend {
        failing_achievements: true,
    };
    let result = load_screen(&failing, Tab::Profile).await;
    assert!(matches!(result, Err(BackendError::Status { code: 500, .. })));

    // Screens that do not need achievements are unaffected
    let experience = load_screen(&failing, Tab::Experience).await.unwrap();
    assert_eq!(experience.describe(), "2 experiences");
}

#[tokio::test]
async fn test_screen_load_reports_with_mount_id() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_screen_load(Arc::new(StubBackend::default()), Tab::Contact, 7);
    manager.spawn_screen_load(
        Arc::new(StubBackend {
            failing_achievements: true,
        }),
        Tab::Profile,
        8,
    );

    let mut results = Vec::new();
    for _ in 0..2 {
        results.push(rx.recv().await.unwrap());
    }
    results.sort_by_key(|action| match action {
        Action::ScreenLoaded { mount, .. } | Action::ScreenFailed { mount, .. } => *mount,
        _ => 0,
    });

    assert!(matches!(
        &results[0],
        Action::ScreenLoaded { mount: 7, data: ScreenData::Contact(_) }
    ));
    match &results[1] {
        Action::ScreenFailed { mount, tab, error } => {
            assert_eq!(*mount, 8);
            assert_eq!(*tab, Tab::Profile);
            assert!(error.contains("500"));
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_link_becomes_notice() {
    let (mut manager, mut rx) = TaskManager::new();
    let opener = Arc::new(RecordingOpener {
        fail: true,
        ..Default::default()
    });
    manager.spawn_link_open(opener.clone(), "tel:123".to_string(), "Could not open dialer".to_string());

    let action = rx.recv().await.unwrap();
    assert!(matches!(action, Action::ShowDialog(DialogType::Notice(ref m)) if m == "Could not open dialer"));
    assert_eq!(*opener.opened.lock().unwrap(), vec!["tel:123".to_string()]);
}

#[tokio::test]
async fn test_opened_link_is_silent() {
    let (mut manager, mut rx) = TaskManager::new();
    let opener = Arc::new(RecordingOpener::default());
    manager.spawn_link_open(opener.clone(), "https://ada.dev".to_string(), "unused".to_string());

    for _ in 0..400 {
        if !manager.cleanup_finished_tasks().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(manager.task_count(), 0);

    // Success reports nothing
    assert!(rx.try_recv().is_err());
    assert_eq!(*opener.opened.lock().unwrap(), vec!["https://ada.dev".to_string()]);
}

#[tokio::test]
async fn test_render_pacing() {
    let mut handler = EventHandler::new();
    handler.mark_rendered();
    assert!(handler.time_since_last_render() < Duration::from_secs(1));

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(handler.should_render());
}
