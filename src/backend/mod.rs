//! Backend abstraction over the resume data source.
//!
//! This module defines the interface every resume source implements, along
//! with the error type shared by all of them.

use async_trait::async_trait;

use crate::entities::{sort_by_order, Achievement, Education, Experience, Profile, Project, SkillGroups, SortOrdered};

pub mod factory;
pub mod fixture;
pub mod http;

pub use fixture::FixtureBackend;
pub use http::HttpBackend;

/// Common error types for backend operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request failed with status {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Read-only source of resume records.
///
/// Collections are returned in display order (ascending `sort_order`).
#[async_trait]
pub trait ResumeBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "http", "fixture").
    fn backend_type(&self) -> &str;

    /// Where the data comes from, for the status bar and logs.
    fn location(&self) -> String;

    async fn get_profile(&self) -> Result<Profile, BackendError>;
    async fn get_experiences(&self) -> Result<Vec<Experience>, BackendError>;
    async fn get_skills_by_category(&self) -> Result<SkillGroups, BackendError>;
    async fn get_projects(&self) -> Result<Vec<Project>, BackendError>;
    async fn get_education(&self) -> Result<Vec<Education>, BackendError>;
    async fn get_achievements(&self) -> Result<Vec<Achievement>, BackendError>;
}

/// Stable-sort a fetched collection into display order.
pub(crate) fn in_display_order<T: SortOrdered>(mut items: Vec<T>) -> Vec<T> {
    sort_by_order(&mut items);
    items
}
