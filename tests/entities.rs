use vitae::entities::{Education, Experience, Profile, Project};

#[test]
fn test_profile_uses_linked_in_key() {
    let profile: Profile = serde_json::from_str(
        r#"{"fullName": "Ada Lovelace", "linkedIn": "https://linkedin.com/in/ada", "bio": null}"#,
    )
    .unwrap();
    assert_eq!(profile.linked_in, "https://linkedin.com/in/ada");
    assert_eq!(profile.bio, "");

    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["linkedIn"], "https://linkedin.com/in/ada");
}

#[test]
fn test_profile_initials() {
    let profile = Profile {
        full_name: "ada   king lovelace".to_string(),
        ..Default::default()
    };
    assert_eq!(profile.initials(), "AK");
    assert_eq!(Profile::default().initials(), "");
}

#[test]
fn test_experience_date_range() {
    let mut experience = Experience {
        start_date: "Jan 2020".to_string(),
        current: true,
        ..Default::default()
    };
    assert_eq!(experience.date_range(), "Jan 2020 — Present");

    experience.end_date = "Mar 2024".to_string();
    assert_eq!(experience.date_range(), "Jan 2020 — Mar 2024");

    experience.current = false;
    experience.end_date = String::new();
    assert_eq!(experience.date_range(), "Jan 2020 — ");
}

#[test]
fn test_experience_tags() {
    let experience: Experience =
        serde_json::from_str(r#"{"technologies": "Rust, Tokio,,  PostgreSQL "}"#).unwrap();
    assert_eq!(experience.tags(), vec!["Rust", "Tokio", "PostgreSQL"]);
}

#[test]
fn test_project_links() {
    let project: Project =
        serde_json::from_str(r#"{"title": "Vitae", "liveUrl": "", "githubUrl": null}"#).unwrap();
    assert_eq!(project.live_url, None);
    assert_eq!(project.github_url, None);
    assert!(!project.has_links());

    let linked: Project = serde_json::from_str(r#"{"liveUrl": "https://vitae.dev"}"#).unwrap();
    assert!(linked.has_links());
}

#[test]
fn test_education_blank_grade() {
    let education: Education =
        serde_json::from_str(r#"{"startYear": "2010", "endYear": "2014", "grade": "   "}"#).unwrap();
    assert_eq!(education.grade, None);
    assert_eq!(education.year_range(), "2010 — 2014");
}
