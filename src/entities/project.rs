use serde::{Deserialize, Serialize};

use super::{blank_as_none, null_as_empty, SortOrdered};
use crate::utils::tags;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    /// Comma-delimited technology list
    #[serde(deserialize_with = "null_as_empty")]
    pub technologies: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub live_url: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
}

impl Project {
    pub fn tags(&self) -> Vec<&str> {
        tags::parse(&self.technologies)
    }

    /// Whether the detail view has any outbound link to offer.
    pub fn has_links(&self) -> bool {
        self.live_url.is_some() || self.github_url.is_some()
    }
}

impl SortOrdered for Project {
    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
