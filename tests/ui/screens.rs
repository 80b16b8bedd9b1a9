use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use vitae::entities::{Experience, Skill, SkillGroups};
use vitae::logger::Logger;
use vitae::ui::core::{AppContext, Component, Motion, ScreenData};
use vitae::ui::screens::{ExperienceScreen, Screen, SkillsScreen};
use vitae::ui::LayoutManager;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn still() -> Motion {
    Motion {
        enabled: false,
        ..Motion::default()
    }
}

fn still_context() -> AppContext {
    AppContext {
        motion: still(),
        ..AppContext::default()
    }
}

fn draw(screen: &mut dyn Screen) {
    let ctx = still_context();
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            screen.render(f, area, &ctx);
        })
        .unwrap();
}

fn experience(role: &str) -> Experience {
    Experience {
        role: role.to_string(),
        company: "Analytical Engines Ltd".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_row_top_saturates() {
    assert_eq!(LayoutManager::row_top(3, 2, 9), 21);
    assert_eq!(LayoutManager::row_top(3, 7_300, 9), u16::MAX);
    assert_eq!(LayoutManager::row_top(3, usize::MAX, 1), u16::MAX);
    assert_eq!(LayoutManager::row_top(u16::MAX, 1, 0), u16::MAX);
}

#[test]
fn test_experience_timeline_renders_past_the_row_limit() {
    let mut screen = ExperienceScreen::new(still(), Logger::new());
    let history: Vec<Experience> = (0..7_300).map(|i| experience(&format!("Role {}", i))).collect();
    screen.apply(ScreenData::Experience(history));
    draw(&mut screen);

    screen.handle_key_events(key(KeyCode::End));
    assert_eq!(screen.selected(), 7_299);
    draw(&mut screen);

    screen.handle_key_events(key(KeyCode::Home));
    assert_eq!(screen.selected(), 0);
    draw(&mut screen);
}

#[test]
fn test_skill_card_renders_past_the_row_limit() {
    let mut screen = SkillsScreen::new(still(), Logger::new());
    let skills: Vec<Skill> = (0..33_000)
        .map(|i| Skill {
            name: format!("Skill {}", i),
            proficiency: 80,
            ..Default::default()
        })
        .collect();
    let groups: SkillGroups = [("BACKEND".to_string(), skills)].into_iter().collect();
    screen.apply(ScreenData::Skills(groups));
    draw(&mut screen);

    for _ in 0..50 {
        screen.handle_key_events(key(KeyCode::Down));
    }
    draw(&mut screen);
}

#[test]
fn test_screen_activity_reaches_the_logs_buffer() {
    let logger = Logger::new();
    let mut screen = ExperienceScreen::new(still(), logger.clone());
    screen.apply(ScreenData::Experience(vec![experience("Staff Engineer")]));
    screen.handle_key_events(key(KeyCode::Enter));
    assert!(screen.overlay().is_visible());

    let logs = logger.get_logs();
    assert!(logs
        .iter()
        .any(|line| line.ends_with("Experience: opened details for 'Staff Engineer'")));
}

#[test]
fn test_misrouted_data_is_logged_and_ignored() {
    let logger = Logger::new();
    let mut screen = ExperienceScreen::new(still(), logger.clone());
    screen.apply(ScreenData::Skills(SkillGroups::new()));
    assert!(screen.is_loading());

    let logs = logger.get_logs();
    assert!(logs
        .iter()
        .any(|line| line.ends_with("Screens: Experience screen ignored data for Skills")));
}
