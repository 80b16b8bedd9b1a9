use vitae::entities::{Experience, Project, Skill, SkillGroups};
use vitae::view_state::{partition_projects, CategoryProjection, Detail, DetailOverlay, LoadState, SkillStats};

fn skill(name: &str, proficiency: i32) -> Skill {
    Skill {
        name: name.to_string(),
        proficiency,
        ..Default::default()
    }
}

fn groups() -> SkillGroups {
    [
        ("BACKEND".to_string(), vec![skill("Rust", 90), skill("Go", 75)]),
        ("FRONTEND".to_string(), vec![skill("React", 80)]),
        ("TOOLS".to_string(), vec![]),
    ]
    .into_iter()
    .collect()
}

fn project(id: i64, featured: bool) -> Project {
    Project {
        id,
        title: format!("Project {}", id),
        featured,
        ..Default::default()
    }
}

#[test]
fn test_first_category_is_active_after_load() {
    let projection = CategoryProjection::from_groups(groups());
    assert_eq!(projection.categories(), ["BACKEND", "FRONTEND", "TOOLS"]);
    assert_eq!(projection.active(), Some("BACKEND"));
    assert_eq!(projection.active_skills().len(), 2);
    assert_eq!(projection.count_for("FRONTEND"), 1);
    assert_eq!(projection.count_for("MISSING"), 0);
}

#[test]
fn test_set_active_ignores_unknown_keys() {
    let mut projection = CategoryProjection::from_groups(groups());
    assert!(!projection.set_active("DATABASE"));
    assert_eq!(projection.active(), Some("BACKEND"));

    assert!(projection.set_active("TOOLS"));
    assert!(projection.active_skills().is_empty());

    // Selecting the active category again is not a change
    assert!(!projection.set_active("TOOLS"));
}

#[test]
fn test_category_cycling_wraps() {
    let mut projection = CategoryProjection::from_groups(groups());
    assert!(projection.previous_category());
    assert_eq!(projection.active(), Some("TOOLS"));
    assert!(projection.next_category());
    assert_eq!(projection.active(), Some("BACKEND"));
    assert!(projection.next_category());
    assert_eq!(projection.active(), Some("FRONTEND"));
}

#[test]
fn test_single_category_does_not_cycle() {
    let single: SkillGroups = [("BACKEND".to_string(), vec![skill("Rust", 90)])].into_iter().collect();
    let mut projection = CategoryProjection::from_groups(single);
    assert!(!projection.next_category());
    assert_eq!(projection.active(), Some("BACKEND"));
}

#[test]
fn test_stats_use_clamped_proficiency() {
    let mut data = groups();
    data.insert("DEVOPS", vec![skill("Docker", 130), skill("Helm", -10)]);
    let projection = CategoryProjection::from_groups(data);

    // (90 + 75 + 80 + 100 + 0) / 5 = 69
    assert_eq!(
        projection.stats(),
        SkillStats {
            total_skills: 5,
            avg_proficiency: 69,
            category_count: 4,
        }
    );
}

#[test]
fn test_empty_projection() {
    let mut projection = CategoryProjection::new();
    assert_eq!(projection.active(), None);
    assert!(projection.active_skills().is_empty());
    assert!(!projection.next_category());
    assert_eq!(projection.stats(), SkillStats::default());

    projection.load(SkillGroups::new());
    assert_eq!(projection.stats().avg_proficiency, 0);
}

#[test]
fn test_overlay_select_replaces_and_dismiss_clears() {
    let mut overlay = DetailOverlay::new();
    assert!(!overlay.is_visible());

    let experience = Experience {
        role: "Staff Engineer".to_string(),
        ..Default::default()
    };
    overlay.select(Detail::Experience(experience));
    overlay.scroll_down();
    overlay.scroll_down();
    assert_eq!(overlay.scroll(), 2);

    overlay.select(Detail::Project(project(7, true)));
    assert!(overlay.is_visible());
    assert_eq!(overlay.scroll(), 0);
    assert_eq!(overlay.selection().map(Detail::title), Some("Project 7"));

    overlay.dismiss();
    assert!(!overlay.is_visible());
    assert!(overlay.selection().is_none());
}

#[test]
fn test_overlay_scroll_is_clamped() {
    let mut overlay = DetailOverlay::new();

    // Hidden overlays do not scroll
    overlay.scroll_down();
    assert_eq!(overlay.scroll(), 0);

    overlay.select(Detail::Project(project(1, false)));
    for _ in 0..10 {
        overlay.scroll_down();
    }
    assert_eq!(overlay.clamp_scroll(4), 4);
    overlay.scroll_up();
    assert_eq!(overlay.scroll(), 3);
}

#[test]
fn test_partition_is_disjoint_and_ordered() {
    let projects = vec![
        project(1, true),
        project(2, false),
        project(3, true),
        project(4, false),
    ];
    let (featured, other) = partition_projects(&projects);
    let featured: Vec<i64> = featured.iter().map(|p| p.id).collect();
    let other: Vec<i64> = other.iter().map(|p| p.id).collect();
    assert_eq!(featured, vec![1, 3]);
    assert_eq!(other, vec![2, 4]);
}

#[test]
fn test_load_state_accessors() {
    let mut ready = LoadState::Ready(3u32);
    assert_eq!(ready.ready(), Some(&3));
    assert!(!ready.is_loading());
    if let Some(value) = ready.ready_mut() {
        *value += 1;
    }
    assert_eq!(ready.ready(), Some(&4));
    assert_eq!(ready.error(), None);

    let failed: LoadState<u32> = LoadState::Failed("Network error: refused".to_string());
    assert_eq!(failed.error(), Some("Network error: refused"));
    assert!(failed.ready().is_none());

    assert!(LoadState::<u32>::default().is_loading());
}
