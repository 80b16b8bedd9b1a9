//! Offline backend reading every collection from one JSON document.
//!
//! The file is re-read on each request, so edits show up on the next reload.
//!
//! ```json
//! {
//!   "profile": { "fullName": "Ada Lovelace", ... },
//!   "experiences": [...],
//!   "skills": { "BACKEND": [...], "FRONTEND": [...] },
//!   "projects": [...],
//!   "education": [...],
//!   "achievements": [...]
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{in_display_order, BackendError, ResumeBackend};
use crate::entities::{Achievement, Education, Experience, Profile, Project, SkillGroups};

/// Shape of a fixture document. Missing collections are empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub profile: Option<Profile>,
    pub experiences: Vec<Experience>,
    pub skills: SkillGroups,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

#[derive(Clone, Debug)]
pub struct FixtureBackend {
    path: PathBuf,
}

impl FixtureBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn document(&self) -> Result<ResumeDocument, BackendError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BackendError::NotFound(self.path.display().to_string()),
            _ => BackendError::Other(format!("Failed to read {}: {}", self.path.display(), e)),
        })?;

        serde_json::from_str(&content)
            .map_err(|e| BackendError::InvalidData(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl ResumeBackend for FixtureBackend {
    fn backend_type(&self) -> &str {
        "fixture"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn get_profile(&self) -> Result<Profile, BackendError> {
        self.document()
            .await?
            .profile
            .ok_or_else(|| BackendError::NotFound("profile".to_string()))
    }

    async fn get_experiences(&self) -> Result<Vec<Experience>, BackendError> {
        Ok(in_display_order(self.document().await?.experiences))
    }

    async fn get_skills_by_category(&self) -> Result<SkillGroups, BackendError> {
        Ok(self.document().await?.skills)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, BackendError> {
        Ok(in_display_order(self.document().await?.projects))
    }

    async fn get_education(&self) -> Result<Vec<Education>, BackendError> {
        Ok(in_display_order(self.document().await?.education))
    }

    async fn get_achievements(&self) -> Result<Vec<Achievement>, BackendError> {
        Ok(in_display_order(self.document().await?.achievements))
    }
}
