//! REST backend talking to the resume service.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{in_display_order, BackendError, ResumeBackend};
use crate::entities::{Achievement, Education, Experience, Profile, Project, SkillGroups};

/// HTTP backend for the resume REST service.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vitae/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| transport_error(&url, &e))?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::error!("API error ({}) on {}: {}", status.as_u16(), path, message);
            return Err(BackendError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(|e| transport_error(&url, &e))?;
        serde_json::from_slice(&body).map_err(|e| BackendError::InvalidData(format!("{}: {}", path, e)))
    }
}

fn transport_error(url: &str, error: &reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Network(format!("Request to {} timed out", url))
    } else if error.is_decode() {
        BackendError::InvalidData(error.to_string())
    } else {
        BackendError::Network(error.to_string())
    }
}

#[async_trait]
impl ResumeBackend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }

    async fn get_profile(&self) -> Result<Profile, BackendError> {
        self.get("/profile").await
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, BackendError> {
        self.get("/experiences").await.map(in_display_order)
    }

    async fn get_skills_by_category(&self) -> Result<SkillGroups, BackendError> {
        self.get("/skills/categories").await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, BackendError> {
        self.get("/projects").await.map(in_display_order)
    }

    async fn get_education(&self) -> Result<Vec<Education>, BackendError> {
        self.get("/education").await.map(in_display_order)
    }

    async fn get_achievements(&self) -> Result<Vec<Achievement>, BackendError> {
        self.get("/achievements").await.map(in_display_order)
    }
}
