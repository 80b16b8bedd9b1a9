use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use vitae::backend::{BackendError, FixtureBackend, ResumeBackend};

fn fixture(document: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", document).unwrap();
    file
}

#[tokio::test]
async fn test_reads_every_collection() {
    let file = fixture(&json!({
        "profile": {"fullName": "Grace Hopper", "github": "https://github.com/grace"},
        "experiences": [
            {"company": "Navy", "sortOrder": 1},
            {"company": "Harvard", "sortOrder": 0}
        ],
        "skills": {"LANGUAGES": [{"name": "COBOL", "proficiency": 100}]},
        "achievements": [{"title": "Compiler", "icon": "code"}]
    }));
    let backend = FixtureBackend::new(file.path());

    assert_eq!(backend.backend_type(), "fixture");
    assert_eq!(backend.location(), file.path().display().to_string());

    let profile = backend.get_profile().await.unwrap();
    assert_eq!(profile.full_name, "Grace Hopper");

    let companies: Vec<String> = backend
        .get_experiences()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.company)
        .collect();
    assert_eq!(companies, vec!["Harvard", "Navy"]);

    let skills = backend.get_skills_by_category().await.unwrap();
    assert_eq!(skills.keys(), ["LANGUAGES"]);

    // Collections missing from the document are empty
    assert!(backend.get_projects().await.unwrap().is_empty());
    assert!(backend.get_education().await.unwrap().is_empty());
    assert_eq!(backend.get_achievements().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_profile_is_not_found() {
    let file = fixture(&json!({"projects": []}));
    let backend = FixtureBackend::new(file.path());

    let result = backend.get_profile().await;
    assert_eq!(result, Err(BackendError::NotFound("profile".to_string())));
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FixtureBackend::new(dir.path().join("resume.json"));

    let error = backend.get_experiences().await.unwrap_err();
    assert!(matches!(error, BackendError::NotFound(ref path) if path.ends_with("resume.json")));
}

#[tokio::test]
async fn test_malformed_document_is_invalid_data() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"profile\": ").unwrap();
    let backend = FixtureBackend::new(file.path());

    let error = backend.get_profile().await.unwrap_err();
    assert!(matches!(error, BackendError::InvalidData(_)));
}

#[tokio::test]
async fn test_edits_show_up_on_next_read() {
    let file = fixture(&json!({"profile": {"fullName": "Before"}}));
    let backend = FixtureBackend::new(file.path());
    assert_eq!(backend.get_profile().await.unwrap().full_name, "Before");

    std::fs::write(file.path(), json!({"profile": {"fullName": "After"}}).to_string()).unwrap();
    assert_eq!(backend.get_profile().await.unwrap().full_name, "After");
}
