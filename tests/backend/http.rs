use std::time::Duration;

use serde_json::json;
use vitae::backend::{BackendError, HttpBackend, ResumeBackend};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_profile_decodes_null_fields() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/profile",
        json!({
            "id": 1,
            "fullName": "Ada Lovelace",
            "title": "Analyst",
            "email": "ada@example.com",
            "phone": null,
            "linkedIn": "https://linkedin.com/in/ada",
            "yearsOfExperience": 12
        }),
    )
    .await;

    let profile = backend_for(&server).await.get_profile().await.unwrap();
    assert_eq!(profile.full_name, "Ada Lovelace");
    assert_eq!(profile.phone, "");
    assert_eq!(profile.linked_in, "https://linkedin.com/in/ada");
    assert_eq!(profile.years_of_experience, 12);
    assert_eq!(profile.projects_completed, 0);
}

#[tokio::test]
async fn test_collections_are_sorted_by_sort_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/experiences",
        json!([
            {"id": 1, "role": "Lead", "sortOrder": 2},
            {"id": 2, "role": "Senior", "sortOrder": 0},
            {"id": 3, "role": "Junior", "sortOrder": 1}
        ]),
    )
    .await;
    mount_json(
        &server,
        "/projects",
        json!([
            {"id": 10, "title": "B", "sortOrder": 5, "liveUrl": "  "},
            {"id": 11, "title": "A", "sortOrder": 1, "githubUrl": "https://github.com/a"}
        ]),
    )
    .await;

    let backend = backend_for(&server).await;

    let roles: Vec<String> = backend
        .get_experiences()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.role)
        .collect();
    assert_eq!(roles, vec!["Senior", "Junior", "Lead"]);

    let projects = backend.get_projects().await.unwrap();
    assert_eq!(projects[0].id, 11);
    assert_eq!(projects[0].github_url.as_deref(), Some("https://github.com/a"));
    assert_eq!(projects[1].live_url, None);
}

#[tokio::test]
async fn test_skill_categories_keep_response_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skills/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"TOOLS":[{"name":"Git","proficiency":80}],"BACKEND":[{"name":"Rust","proficiency":95}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let groups = backend_for(&server).await.get_skills_by_category().await.unwrap();
    assert_eq!(groups.keys(), ["TOOLS", "BACKEND"]);
    assert_eq!(groups.get("BACKEND").unwrap()[0].name, "Rust");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    mount_json(&server, "/education", json!([{"institution": "MIT", "grade": ""}])).await;

    let backend = HttpBackend::new(&format!("{}/", server.uri()), Duration::from_secs(5)).unwrap();
    assert_eq!(backend.location(), server.uri());

    let education = backend.get_education().await.unwrap();
    assert_eq!(education[0].institution, "MIT");
    assert_eq!(education[0].grade, None);
}

#[tokio::test]
async fn test_missing_resource_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/achievements"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = backend_for(&server).await.get_achievements().await;
    assert_eq!(result, Err(BackendError::NotFound("/achievements".to_string())));
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let result = backend_for(&server).await.get_profile().await;
    assert_eq!(
        result,
        Err(BackendError::Status {
            code: 503,
            message: "maintenance".to_string(),
        })
    );
}

#[tokio::test]
async fn test_malformed_body_is_invalid_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let error = backend_for(&server).await.get_projects().await.unwrap_err();
    assert!(matches!(error, BackendError::InvalidData(ref message) if message.starts_with("/projects")));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind and release a port so nothing is listening on it
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let backend = HttpBackend::new(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2)).unwrap();
    let error = backend.get_profile().await.unwrap_err();
    assert!(matches!(error, BackendError::Network(_)));
    assert_eq!(backend.backend_type(), "http");
}
